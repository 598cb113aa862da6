mod api;
mod board;
mod client;
mod commands;
mod config;
mod controller;
mod dismiss;
pub mod effects;
mod events;
mod form;
mod render;
mod routes;
mod store;

pub use api::{
    ActionKind, ActionReply, ActionRequest, ActivitiesApi, ApiError, HttpResponse, HttpTransport,
    Result, GENERIC_REJECTION_TEXT,
};
pub use board::{ActionPhase, ActivityBoard, LoadState};
pub use client::{parse_action_reply, parse_snapshot, ActivitiesClient};
pub use commands::BoardCommand;
pub use config::BoardConfig;
pub use controller::BoardController;
pub use dismiss::{DismissScheduler, ManualDismissScheduler};
pub use events::BoardEvent;
pub use form::SignupForm;
pub use render::{
    ActivityCard, BoardView, Listing, ParticipantEntry, RenderTarget, LOADING_TEXT,
    LOAD_FAILED_TEXT, NO_MATCHES_TEXT, NO_PARTICIPANTS_TEXT, SELECT_PROMPT_TEXT,
};
pub use routes::{encode_component, ApiRoute, HttpMethod};
pub use store::ActivityStore;
