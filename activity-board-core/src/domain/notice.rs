use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long a notice stays visible before it is dismissed
pub const NOTICE_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Identifies one shown notice, so a stale dismissal can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoticeId(u64);

impl NoticeId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice-{}", self.0)
    }
}

/// Category of a transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Style class of the message area
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Transient message shown in the message area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// The single message area. A newer notice replaces the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, superseding whatever is shown
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.current = Some(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Hide the notice if it is still the one identified by `id`.
    ///
    /// Returns `false` when `id` was already superseded or dismissed.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
