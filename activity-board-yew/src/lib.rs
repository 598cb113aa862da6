//! # Activity Board Yew Components
//!
//! Browser widget listing extracurricular activities, with filters and a
//! signup form, on top of `activity-board-core`.

pub mod adapters;
pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod providers;

// Re-exports for convenience
pub use adapters::{GlooTransport, TimeoutScheduler};
pub use app::{App, AppProps, BoardScreen};
pub use components::{ActivityCardView, ActivityList, FilterBar, MessageArea, SignupPanel};
pub use config::AppConfig;
pub use hooks::{use_board, use_board_view, BoardContext};
pub use providers::{BoardProvider, BoardProviderProps, BoardState};
