mod use_board;

pub use use_board::{use_board, use_board_view, BoardContext};
