use activity_board_core::{BoardCommand, BoardView};
use std::rc::Rc;
use yew::prelude::*;

/// Board state accessible via hook
#[derive(Clone, PartialEq)]
pub struct BoardContext {
    /// Projection of the current board
    pub view: Rc<BoardView>,

    /// Send commands to the provider
    pub send: Callback<BoardCommand>,
}

/// Hook to access the board
///
/// # Example
///
/// ```rust,ignore
/// use activity_board_yew::use_board;
/// use activity_board_core::BoardCommand;
///
/// let board = use_board();
/// board.send.emit(BoardCommand::Refresh);
/// ```
#[hook]
pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("use_board must be used within a BoardProvider")
}

/// Hook to access only the current view (convenience wrapper)
#[hook]
pub fn use_board_view() -> Rc<BoardView> {
    use_board().view
}
