use activity_board_core::application::{ApiError, HttpMethod, HttpResponse, HttpTransport, Result};
use async_trait::async_trait;
use gloo_net::http::Request;

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, method: HttpMethod, url: &str) -> Result<HttpResponse> {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Delete => Request::delete(url),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!("🌐 {} {} -> {}", method, url, status);
        Ok(HttpResponse::new(status, body))
    }
}
