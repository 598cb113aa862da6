use crate::infrastructure::{CliError, ReqwestTransport, Result};
use crate::presentation::TerminalTarget;
use activity_board_core::application::{LoadState, ManualDismissScheduler};
use activity_board_core::{
    ActionRequest, ActivitiesApi, ActivitiesClient, BoardCommand, BoardConfig, BoardController,
    FilterCriteria,
};

pub type CliController<A = ActivitiesClient<ReqwestTransport>> =
    BoardController<A, TerminalTarget, ManualDismissScheduler>;

pub fn new_controller<A: ActivitiesApi>(api: A, config: &BoardConfig) -> CliController<A> {
    BoardController::new(api, TerminalTarget::new(), ManualDismissScheduler::new())
        .with_config(config)
}

fn ensure_loaded<A: ActivitiesApi>(controller: &CliController<A>) -> Result<()> {
    match controller.board().load_state() {
        LoadState::Failed { reason } => Err(CliError::LoadFailed {
            reason: reason.clone(),
        }),
        _ => Ok(()),
    }
}

/// Fetch and derive the board for `criteria`
pub async fn run_list<A: ActivitiesApi>(
    controller: &mut CliController<A>,
    criteria: FilterCriteria,
) -> Result<()> {
    controller.change_criteria(criteria);
    controller.execute(BoardCommand::Refresh).await;
    ensure_loaded(controller)
}

/// Load the board, then send one signup/unregister. A rejected action is an
/// error.
pub async fn run_action<A: ActivitiesApi>(
    controller: &mut CliController<A>,
    request: ActionRequest,
) -> Result<()> {
    let kind = request.kind;
    controller.execute(BoardCommand::Refresh).await;
    controller.execute(BoardCommand::Perform(request)).await;

    if let Some(notice) = controller.board().notice().current() {
        if notice.is_error() {
            return Err(CliError::rejected(kind.to_string(), notice.text.clone()));
        }
    }
    ensure_loaded(controller)
}
