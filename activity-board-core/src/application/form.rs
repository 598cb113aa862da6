use crate::application::api::ActionRequest;
use serde::{Deserialize, Serialize};

/// Contents of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty while the prompt entry is selected
    pub activity: String,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The signup to send, once both required fields are filled in
    pub fn submission(&self) -> Option<ActionRequest> {
        let email = self.email.trim();
        if email.is_empty() || self.activity.is_empty() {
            return None;
        }
        Some(ActionRequest::signup(self.activity.clone(), email))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop the selected activity when it is no longer offered
    pub fn retain_selection<'a>(&mut self, options: impl IntoIterator<Item = &'a str>) {
        if self.activity.is_empty() {
            return;
        }
        if !options.into_iter().any(|name| name == self.activity) {
            tracing::debug!(activity = %self.activity, "Selected activity no longer listed");
            self.activity.clear();
        }
    }
}
