use activity_board_core::BoardConfig;
use std::time::Duration;

/// Widget settings baked in at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub dismiss_after: Duration,
}

impl AppConfig {
    /// Read `ACTIVITIES_API_URL` at compile time; unset means same origin
    pub fn new() -> Self {
        Self::with_base_url(option_env!("ACTIVITIES_API_URL").unwrap_or_default())
    }

    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        let board = BoardConfig::new(api_base_url);
        Self {
            api_base_url: board.api_base_url,
            dismiss_after: board.dismiss_after,
        }
    }

    pub fn with_dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.api_base_url.clone()).with_dismiss_after(self.dismiss_after)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
