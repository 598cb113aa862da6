use activity_board_core::application::{HttpMethod, HttpResponse, HttpTransport};
use activity_board_core::ApiError;
use async_trait::async_trait;
use std::time::Duration;

use super::{CliError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Native transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CliError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
    ) -> activity_board_core::application::Result<HttpResponse> {
        let builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!("🌐 {} {} -> {}", method, url, status);
        Ok(HttpResponse::new(status, body))
    }
}
