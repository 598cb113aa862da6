use crate::application::api::{
    ActionReply, ActionRequest, ActivitiesApi, ApiError, HttpResponse, HttpTransport, Result,
    GENERIC_REJECTION_TEXT,
};
use crate::application::routes::ApiRoute;
use crate::domain::Snapshot;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AcceptedBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct RejectedBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Parse a list response. Any non-2xx status is an error.
pub fn parse_snapshot(response: &HttpResponse) -> Result<Snapshot> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Parse a signup/unregister response.
///
/// Non-2xx is a rejection carrying the body's `detail` verbatim. A body that
/// is not JSON is a decode error either way.
pub fn parse_action_reply(response: &HttpResponse) -> Result<ActionReply> {
    if response.is_success() {
        let body: AcceptedBody = serde_json::from_str(&response.body)?;
        return Ok(ActionReply::Accepted {
            message: body.message,
        });
    }

    let body: RejectedBody = serde_json::from_str(&response.body)?;
    let detail = match body.detail {
        Some(serde_json::Value::String(text)) => text,
        Some(serde_json::Value::Null) | None => GENERIC_REJECTION_TEXT.to_string(),
        Some(other) => other.to_string(),
    };
    Ok(ActionReply::Rejected { detail })
}

/// [`ActivitiesApi`] over any [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct ActivitiesClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> ActivitiesClient<T> {
    /// `base_url` may be empty for same-origin requests
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, route: &ApiRoute) -> Result<HttpResponse> {
        let url = route.url(&self.base_url);
        tracing::debug!(method = %route.method(), %url, "Sending request");
        let response = self.transport.send(route.method(), &url).await?;
        tracing::debug!(status = response.status, %url, "Received response");
        Ok(response)
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> ActivitiesApi for ActivitiesClient<T> {
    async fn list_activities(&self) -> Result<Snapshot> {
        let response = self.call(&ApiRoute::ListActivities).await?;
        parse_snapshot(&response)
    }

    async fn send_action(&self, request: &ActionRequest) -> Result<ActionReply> {
        let response = self.call(&request.route()).await?;
        parse_action_reply(&response)
    }
}
