pub mod application;
pub mod domain;

pub use application::{
    ActionKind, ActionReply, ActionRequest, ActivitiesApi, ActivitiesClient, ActivityBoard,
    ApiError, BoardCommand, BoardConfig, BoardController, BoardEvent, BoardView, DismissScheduler,
    RenderTarget,
};
pub use domain::{Activity, ActivityName, FilterCriteria, Notice, NoticeId, NoticeKind, Snapshot, SortKey};
