pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use application::{new_controller, run_action, run_list, CliController};
pub use infrastructure::{CliError, LogConfig, ReqwestTransport, Result};
pub use presentation::{format_board, BoardText, TerminalTarget};
