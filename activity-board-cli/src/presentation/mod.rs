mod terminal;

pub use terminal::{format_board, BoardText, TerminalTarget};
