//! Network side of the board: each call resolves to the event to apply.
//!
//! An accepted action must be followed by [`load_snapshot`]; check
//! [`BoardEvent::needs_refresh`] on the event returned by [`send_action`].

use crate::application::api::{ActionRequest, ActivitiesApi};
use crate::application::events::BoardEvent;

/// Fetch the snapshot. Never fails: a failure becomes `SnapshotFailed`.
pub async fn load_snapshot<A: ActivitiesApi + ?Sized>(api: &A) -> BoardEvent {
    match api.list_activities().await {
        Ok(snapshot) => BoardEvent::SnapshotLoaded(snapshot),
        Err(e) => BoardEvent::SnapshotFailed {
            reason: e.to_string(),
        },
    }
}

/// Send a signup/unregister. Never fails: a failure becomes `ActionFailed`.
pub async fn send_action<A: ActivitiesApi + ?Sized>(api: &A, request: ActionRequest) -> BoardEvent {
    match api.send_action(&request).await {
        Ok(reply) => BoardEvent::ActionReplied { request, reply },
        Err(e) => BoardEvent::ActionFailed {
            request,
            reason: e.to_string(),
        },
    }
}
