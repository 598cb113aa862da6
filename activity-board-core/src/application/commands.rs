use crate::application::api::ActionRequest;
use crate::application::events::BoardEvent;
use crate::domain::{FilterCriteria, NoticeId};

/// User intents coming from the widget's controls
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    /// Fetch the snapshot again
    Refresh,

    /// Any of the three filter controls changed
    ChangeCriteria(FilterCriteria),

    /// Typing in the email field
    EditEmail(String),

    /// Picking an entry of the activity selector
    SelectActivity(String),

    /// Signup form submission or a participant's removal action
    Perform(ActionRequest),

    /// The dismissal delay of a notice elapsed
    DismissNotice(NoticeId),
}

impl BoardCommand {
    /// Event for commands that need no network round trip
    pub fn immediate_event(&self) -> Option<BoardEvent> {
        match self {
            BoardCommand::ChangeCriteria(criteria) => {
                Some(BoardEvent::CriteriaChanged(criteria.clone()))
            }
            BoardCommand::EditEmail(email) => Some(BoardEvent::EmailEdited(email.clone())),
            BoardCommand::SelectActivity(name) => Some(BoardEvent::ActivitySelected(name.clone())),
            BoardCommand::DismissNotice(id) => Some(BoardEvent::NoticeExpired(*id)),
            BoardCommand::Refresh | BoardCommand::Perform(_) => None,
        }
    }
}
