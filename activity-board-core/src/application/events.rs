use crate::application::api::{ActionReply, ActionRequest};
use crate::domain::{FilterCriteria, NoticeId, Snapshot};

/// State changes applied to the board, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// A list call returned a parsed snapshot
    SnapshotLoaded(Snapshot),

    /// A list call failed (network, status or body)
    SnapshotFailed { reason: String },

    CriteriaChanged(FilterCriteria),

    EmailEdited(String),

    ActivitySelected(String),

    /// Request is in flight
    ActionStarted(ActionRequest),

    /// Server answered (accepted or rejected)
    ActionReplied {
        request: ActionRequest,
        reply: ActionReply,
    },

    /// Call failed before a readable answer arrived
    ActionFailed {
        request: ActionRequest,
        reason: String,
    },

    NoticeExpired(NoticeId),
}

impl BoardEvent {
    /// Whether the server state may have changed, so the snapshot is stale
    pub fn needs_refresh(&self) -> bool {
        matches!(self, BoardEvent::ActionReplied { reply, .. } if reply.is_accepted())
    }
}
