use activity_board_core::application::{
    ApiError, HttpMethod, HttpResponse, HttpTransport, ManualDismissScheduler,
};
use activity_board_core::{
    ActivitiesClient, Activity, BoardController, BoardView, NoticeId, RenderTarget, Snapshot,
};
use async_trait::async_trait;
use cucumber::World;
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

pub const SERVER_URL: &str = "http://school.test";

#[derive(Debug, Default)]
pub struct ServerState {
    pub activities: Snapshot,
    /// Every request as "METHOD path?query"
    pub requests: Vec<String>,
    /// Detail returned by the next signup/unregister instead of processing it
    pub reject_next: Option<String>,
    pub offline: bool,
}

/// In-memory activities backend speaking the HTTP contract
#[derive(Debug, Clone, Default)]
pub struct InMemoryServer {
    state: Arc<Mutex<ServerState>>,
}

impl InMemoryServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, ServerState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_activity(&self, name: &str, activity: Activity) {
        self.state().activities.insert(name, activity);
    }

    pub fn requests(&self) -> Vec<String> {
        self.state().requests.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.as_str() == "GET /activities")
            .count()
    }

    fn handle(&self, method: HttpMethod, path_and_query: &str) -> HttpResponse {
        let (path, query) = path_and_query
            .split_once('?')
            .unwrap_or((path_and_query, ""));
        let email = query
            .strip_prefix("email=")
            .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
            .unwrap_or_default();

        let segments: Vec<String> = path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();

        let mut state = self.state();
        match (method, segments.as_slice()) {
            (HttpMethod::Get, [root]) if root == "activities" => {
                let body = serde_json::to_string(&state.activities).unwrap_or_default();
                HttpResponse::new(200, body)
            }
            (HttpMethod::Post, [root, name, action]) if root == "activities" && action == "signup" => {
                if let Some(detail) = state.reject_next.take() {
                    return detail_response(400, &detail);
                }
                let Some(activity) = state.activities.get(name).cloned() else {
                    return detail_response(404, "Activity not found");
                };
                if activity.participants.contains(&email) {
                    return detail_response(400, "Student is already signed up");
                }
                state
                    .activities
                    .insert(name.as_str(), activity.with_participant(email.clone()));
                message_response(&format!("Signed up {} for {}", email, name))
            }
            (HttpMethod::Delete, [root, name, action])
                if root == "activities" && action == "unregister" =>
            {
                if let Some(detail) = state.reject_next.take() {
                    return detail_response(400, &detail);
                }
                let Some(mut activity) = state.activities.get(name).cloned() else {
                    return detail_response(404, "Activity not found");
                };
                if !activity.participants.contains(&email) {
                    return detail_response(400, "Student is not signed up for this activity");
                }
                activity.participants.retain(|participant| *participant != email);
                state.activities.insert(name.as_str(), activity);
                message_response(&format!("Unregistered {} from {}", email, name))
            }
            _ => detail_response(404, "Not Found"),
        }
    }
}

fn detail_response(status: u16, detail: &str) -> HttpResponse {
    HttpResponse::new(status, json!({ "detail": detail }).to_string())
}

fn message_response(message: &str) -> HttpResponse {
    HttpResponse::new(200, json!({ "message": message }).to_string())
}

#[async_trait(?Send)]
impl HttpTransport for InMemoryServer {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
    ) -> activity_board_core::application::Result<HttpResponse> {
        let path = url.strip_prefix(SERVER_URL).unwrap_or(url);
        {
            let mut state = self.state();
            state.requests.push(format!("{} {}", method, path));
            if state.offline {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
        }
        Ok(self.handle(method, path))
    }
}

/// Keeps every rendered frame
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub frames: Vec<BoardView>,
}

impl RenderTarget for RecordingTarget {
    fn render(&mut self, view: &BoardView) {
        self.frames.push(view.clone());
    }
}

impl RecordingTarget {
    pub fn last(&self) -> Option<&BoardView> {
        self.frames.last()
    }

    /// Ids of the notices shown so far, in order of appearance
    pub fn notice_ids(&self) -> Vec<NoticeId> {
        let mut ids: Vec<NoticeId> = Vec::new();
        for notice in self.frames.iter().filter_map(|frame| frame.notice.as_ref()) {
            if !ids.contains(&notice.id) {
                ids.push(notice.id);
            }
        }
        ids
    }
}

pub type WorldController =
    BoardController<ActivitiesClient<InMemoryServer>, RecordingTarget, ManualDismissScheduler>;

#[derive(World)]
#[world(init = Self::new)]
pub struct BoardWorld {
    /// Backend shared with the controller's client
    pub server: InMemoryServer,

    /// The system under test
    pub controller: WorldController,
}

impl fmt::Debug for BoardWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardWorld")
            .field("server", &self.server)
            .field("board", self.controller.board())
            .finish()
    }
}

impl BoardWorld {
    pub fn new() -> Self {
        let server = InMemoryServer::new();
        let client = ActivitiesClient::new(server.clone(), SERVER_URL);
        let controller = BoardController::new(
            client,
            RecordingTarget::default(),
            ManualDismissScheduler::new(),
        );
        Self { server, controller }
    }

    /// Latest frame (panics if nothing was rendered yet)
    pub fn view(&self) -> &BoardView {
        self.controller
            .target()
            .last()
            .expect("Nothing rendered yet")
    }

    pub fn last_request(&self) -> Option<String> {
        self.server.requests().last().cloned()
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}
