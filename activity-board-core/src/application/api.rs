use crate::application::routes::{ApiRoute, HttpMethod};
use crate::domain::Snapshot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a rejection carries no `detail`
pub const GENERIC_REJECTION_TEXT: &str = "An error occurred";

/// Errors talking to the activities backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Unreadable response body: {0}")]
    Decode(String),

    #[error("Unexpected response status: {status}")]
    Status { status: u16 },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Mutating actions a user can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Signup,
    Unregister,
}

impl ActionKind {
    /// Message shown when the call itself fails (network, unreadable body)
    pub fn failure_text(&self) -> &'static str {
        match self {
            ActionKind::Signup => "Failed to sign up. Please try again.",
            ActionKind::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Signup => write!(f, "signup"),
            ActionKind::Unregister => write!(f, "unregister"),
        }
    }
}

/// A signup or unregister call for one activity and email
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub activity: String,
    pub email: String,
}

impl ActionRequest {
    pub fn signup(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Signup,
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn unregister(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Unregister,
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn route(&self) -> ApiRoute {
        let activity = self.activity.clone();
        let email = self.email.clone();
        match self.kind {
            ActionKind::Signup => ApiRoute::Signup { activity, email },
            ActionKind::Unregister => ApiRoute::Unregister { activity, email },
        }
    }
}

/// Server's answer to an action. A rejection is a business outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReply {
    Accepted { message: String },
    Rejected { detail: String },
}

impl ActionReply {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ActionReply::Accepted { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            ActionReply::Accepted { message } => message,
            ActionReply::Rejected { detail } => detail,
        }
    }
}

/// Raw HTTP response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a bodiless request and returns status and body.
///
/// Implemented per platform (`gloo-net` in the browser, `reqwest` natively,
/// in-memory in tests).
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, method: HttpMethod, url: &str) -> Result<HttpResponse>;
}

/// Typed access to the activities backend
#[async_trait(?Send)]
pub trait ActivitiesApi {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<Snapshot>;

    /// Signup or unregister
    async fn send_action(&self, request: &ActionRequest) -> Result<ActionReply>;
}
