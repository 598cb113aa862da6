use crate::application::api::{ActionRequest, ActivitiesApi};
use crate::application::board::ActivityBoard;
use crate::application::commands::BoardCommand;
use crate::application::config::BoardConfig;
use crate::application::dismiss::DismissScheduler;
use crate::application::effects;
use crate::application::events::BoardEvent;
use crate::application::render::{BoardView, RenderTarget};
use crate::domain::{FilterCriteria, NoticeId};
use std::time::Duration;

/// Drives an [`ActivityBoard`] against a backend and a render target.
///
/// Every state change is followed by a full render of the projected
/// [`BoardView`].
pub struct BoardController<A, R, S> {
    api: A,
    target: R,
    scheduler: S,
    board: ActivityBoard,
    dismiss_after: Duration,
}

impl<A, R, S> BoardController<A, R, S>
where
    A: ActivitiesApi,
    R: RenderTarget,
    S: DismissScheduler,
{
    pub fn new(api: A, target: R, scheduler: S) -> Self {
        Self {
            api,
            target,
            scheduler,
            board: ActivityBoard::new(),
            dismiss_after: BoardConfig::default().dismiss_after,
        }
    }

    pub fn with_config(mut self, config: &BoardConfig) -> Self {
        self.dismiss_after = config.dismiss_after;
        self
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.board.apply(BoardEvent::CriteriaChanged(criteria));
        self
    }

    // ===== Accessors =====

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn board(&self) -> &ActivityBoard {
        &self.board
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn view(&self) -> BoardView {
        BoardView::project(&self.board)
    }

    // ===== Operations =====

    /// Replace the snapshot from the backend and re-render
    pub async fn fetch_snapshot(&mut self) {
        let event = effects::load_snapshot(&self.api).await;
        self.apply(event);
    }

    /// Re-derive the view for new control values (no fetch)
    pub fn change_criteria(&mut self, criteria: FilterCriteria) {
        self.apply(BoardEvent::CriteriaChanged(criteria));
    }

    pub async fn handle_signup(&mut self, activity: &str, email: &str) {
        self.perform(ActionRequest::signup(activity, email)).await;
    }

    pub async fn handle_unregister(&mut self, activity: &str, email: &str) {
        self.perform(ActionRequest::unregister(activity, email)).await;
    }

    /// Submit the signup form. Returns `false` when a required field is empty.
    pub async fn submit_form(&mut self) -> bool {
        match self.board.form().submission() {
            Some(request) => {
                self.perform(request).await;
                true
            }
            None => {
                tracing::debug!("Signup form incomplete, not submitted");
                false
            }
        }
    }

    /// Hide the notice if it is still the one shown
    pub fn dismiss_notice(&mut self, id: NoticeId) {
        self.apply(BoardEvent::NoticeExpired(id));
    }

    pub async fn execute(&mut self, command: BoardCommand) {
        if let Some(event) = command.immediate_event() {
            self.apply(event);
            return;
        }
        match command {
            BoardCommand::Refresh => self.fetch_snapshot().await,
            BoardCommand::Perform(request) => self.perform(request).await,
            _ => {}
        }
    }

    async fn perform(&mut self, request: ActionRequest) {
        self.apply(BoardEvent::ActionStarted(request.clone()));

        let replied = effects::send_action(&self.api, request).await;
        let needs_refresh = replied.needs_refresh();
        self.apply(replied);

        if needs_refresh {
            self.fetch_snapshot().await;
        }
    }

    fn apply(&mut self, event: BoardEvent) {
        if let Some(id) = self.board.apply(event) {
            self.scheduler.schedule(id, self.dismiss_after);
        }
        let view = BoardView::project(&self.board);
        self.target.render(&view);
    }
}
