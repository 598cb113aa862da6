use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Activity name (unique key within a snapshot)
pub type ActivityName = String;

/// A schedulable offering with a capacity and a roster of participant emails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Free-form description
    pub description: String,

    /// Category label (exact-match filter key)
    #[serde(default)]
    pub category: String,

    /// Human-readable schedule (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,

    /// Capacity
    pub max_participants: u32,

    /// Registered participant emails, in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity. Negative when the activity is overbooked.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }

    /// Case-insensitive substring match over name, description and schedule.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, name: &str, needle: &str) -> bool {
        needle.is_empty()
            || name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.schedule.to_lowercase().contains(needle)
    }
}
