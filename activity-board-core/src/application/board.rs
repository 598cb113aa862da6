use crate::application::api::{ActionKind, ActionReply, ActionRequest};
use crate::application::events::BoardEvent;
use crate::application::form::SignupForm;
use crate::application::store::ActivityStore;
use crate::domain::{ActivityView, FilterCriteria, NoticeId, NoticeKind, NoticeSlot};

/// State of the list area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No list call has completed yet
    #[default]
    Loading,
    Ready,
    /// The last list call failed
    Failed { reason: String },
}

/// Per-action lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionPhase {
    #[default]
    Idle,
    /// A request is in flight
    Pending(ActionRequest),
}

/// Everything the widget shows, driven by [`BoardEvent`]s.
///
/// Overlapping actions are not serialized: each event is applied as it
/// arrives and the newest notice wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityBoard {
    store: ActivityStore,
    criteria: FilterCriteria,
    load_state: LoadState,
    phase: ActionPhase,
    notice: NoticeSlot,
    form: SignupForm,
}

impl ActivityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Getters =====

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn phase(&self) -> &ActionPhase {
        &self.phase
    }

    pub fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// Current derived view of the stored snapshot
    pub fn view(&self) -> ActivityView {
        self.store.derive(&self.criteria)
    }

    // ===== Transitions =====

    /// Apply one event. Returns the id of a notice shown by it, so the
    /// caller can schedule its dismissal.
    pub fn apply(&mut self, event: BoardEvent) -> Option<NoticeId> {
        match event {
            BoardEvent::SnapshotLoaded(snapshot) => {
                tracing::info!(activities = snapshot.len(), "📥 Snapshot replaced");
                self.store.replace(snapshot);
                self.load_state = LoadState::Ready;
                self.sync_selection();
                None
            }

            BoardEvent::SnapshotFailed { reason } => {
                tracing::error!(%reason, "Error fetching activities");
                self.load_state = LoadState::Failed { reason };
                self.form.retain_selection(std::iter::empty::<&str>());
                None
            }

            BoardEvent::CriteriaChanged(criteria) => {
                self.criteria = criteria;
                self.sync_selection();
                None
            }

            BoardEvent::EmailEdited(email) => {
                self.form.email = email;
                None
            }

            BoardEvent::ActivitySelected(name) => {
                self.form.activity = name;
                None
            }

            BoardEvent::ActionStarted(request) => {
                tracing::info!(kind = %request.kind, activity = %request.activity, "⏳ Action pending");
                self.phase = ActionPhase::Pending(request);
                None
            }

            BoardEvent::ActionReplied { request, reply } => {
                self.phase = ActionPhase::Idle;
                Some(self.handle_reply(&request, reply))
            }

            BoardEvent::ActionFailed { request, reason } => {
                self.phase = ActionPhase::Idle;
                tracing::error!(kind = %request.kind, activity = %request.activity, %reason, "Action failed");
                Some(
                    self.notice
                        .show(NoticeKind::Error, request.kind.failure_text()),
                )
            }

            BoardEvent::NoticeExpired(id) => {
                if !self.notice.dismiss(id) {
                    tracing::debug!(%id, "Ignoring dismissal of superseded notice");
                }
                None
            }
        }
    }

    fn handle_reply(&mut self, request: &ActionRequest, reply: ActionReply) -> NoticeId {
        match reply {
            ActionReply::Accepted { message } => {
                tracing::info!(kind = %request.kind, activity = %request.activity, "✅ {}", message);
                if request.kind == ActionKind::Signup {
                    self.form.reset();
                }
                self.notice.show(NoticeKind::Success, message)
            }
            ActionReply::Rejected { detail } => {
                tracing::warn!(kind = %request.kind, activity = %request.activity, "❌ {}", detail);
                self.notice.show(NoticeKind::Error, detail)
            }
        }
    }

    fn sync_selection(&mut self) {
        let view = self.view();
        self.form.retain_selection(view.iter().map(|(name, _)| name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, Snapshot};

    fn chess_snapshot() -> Snapshot {
        Snapshot::new()
            .with("Chess Club", Activity::new("Strategy", "Games", "Fridays", 2))
            .with("Art Studio", Activity::new("Painting", "Arts", "Wednesdays", 10))
    }

    fn filled_form(board: &mut ActivityBoard) {
        board.apply(BoardEvent::EmailEdited("new@b.com".to_string()));
        board.apply(BoardEvent::ActivitySelected("Chess Club".to_string()));
    }

    #[test]
    fn test_starts_loading() {
        let board = ActivityBoard::new();
        assert_eq!(board.load_state(), &LoadState::Loading);
        assert_eq!(board.phase(), &ActionPhase::Idle);
        assert!(board.view().is_empty());
    }

    #[test]
    fn test_snapshot_loaded() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));

        assert_eq!(board.load_state(), &LoadState::Ready);
        assert_eq!(board.view().names(), vec!["Art Studio", "Chess Club"]);
    }

    #[test]
    fn test_snapshot_failure_keeps_previous_snapshot() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));
        board.apply(BoardEvent::SnapshotFailed {
            reason: "offline".to_string(),
        });

        assert!(matches!(board.load_state(), LoadState::Failed { .. }));
        assert_eq!(board.store().snapshot().len(), 2);
    }

    #[test]
    fn test_snapshot_failure_clears_selection() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));
        filled_form(&mut board);

        board.apply(BoardEvent::SnapshotFailed {
            reason: "offline".to_string(),
        });

        assert!(board.form().activity.is_empty());
        assert_eq!(board.form().email, "new@b.com");
        assert!(board.form().submission().is_none());
    }

    #[test]
    fn test_accepted_signup_resets_form_and_shows_success() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));
        filled_form(&mut board);

        let request = board.form().submission().unwrap();
        board.apply(BoardEvent::ActionStarted(request.clone()));
        assert!(matches!(board.phase(), ActionPhase::Pending(_)));

        let shown = board.apply(BoardEvent::ActionReplied {
            request,
            reply: ActionReply::Accepted {
                message: "Signed up".to_string(),
            },
        });

        assert!(shown.is_some());
        assert_eq!(board.phase(), &ActionPhase::Idle);
        assert_eq!(board.form(), &SignupForm::default());
        let notice = board.notice().current().unwrap();
        assert_eq!(notice.text, "Signed up");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_rejected_signup_keeps_form_and_snapshot() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));
        filled_form(&mut board);
        let before = board.store().clone();

        let request = board.form().submission().unwrap();
        board.apply(BoardEvent::ActionReplied {
            request,
            reply: ActionReply::Rejected {
                detail: "Activity full".to_string(),
            },
        });

        assert_eq!(board.store(), &before);
        assert_eq!(board.form().activity, "Chess Club");
        assert_eq!(board.form().email, "new@b.com");
        let notice = board.notice().current().unwrap();
        assert_eq!(notice.text, "Activity full");
        assert!(notice.is_error());
    }

    #[test]
    fn test_accepted_unregister_leaves_form_alone() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));
        filled_form(&mut board);

        board.apply(BoardEvent::ActionReplied {
            request: ActionRequest::unregister("Chess Club", "a@b.com"),
            reply: ActionReply::Accepted {
                message: "Unregistered".to_string(),
            },
        });

        assert_eq!(board.form().email, "new@b.com");
    }

    #[test]
    fn test_transport_failure_shows_fallback_text() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::ActionFailed {
            request: ActionRequest::unregister("Chess Club", "a@b.com"),
            reason: "offline".to_string(),
        });

        assert_eq!(
            board.notice().current().unwrap().text,
            "Failed to unregister. Please try again."
        );
    }

    #[test]
    fn test_stale_expiry_keeps_newer_notice() {
        let mut board = ActivityBoard::new();
        let request = ActionRequest::signup("Chess Club", "a@b.com");

        let first = board
            .apply(BoardEvent::ActionFailed {
                request: request.clone(),
                reason: "offline".to_string(),
            })
            .unwrap();
        board.apply(BoardEvent::ActionReplied {
            request,
            reply: ActionReply::Accepted {
                message: "Signed up".to_string(),
            },
        });

        board.apply(BoardEvent::NoticeExpired(first));
        assert_eq!(board.notice().current().unwrap().text, "Signed up");
    }

    #[test]
    fn test_criteria_change_clears_hidden_selection() {
        let mut board = ActivityBoard::new();
        board.apply(BoardEvent::SnapshotLoaded(chess_snapshot()));
        filled_form(&mut board);

        board.apply(BoardEvent::CriteriaChanged(
            FilterCriteria::new().with_category("Arts"),
        ));
        assert!(board.form().activity.is_empty());
        assert_eq!(board.view().names(), vec!["Art Studio"]);
    }
}
