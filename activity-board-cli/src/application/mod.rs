mod runner;

pub use runner::{new_controller, run_action, run_list, CliController};
