use crate::domain::NOTICE_DISMISS_DELAY;
use std::time::Duration;

/// Settings shared by every surface of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base_url: String,

    /// Delay before a notice is dismissed
    pub dismiss_after: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            dismiss_after: NOTICE_DISMISS_DELAY,
        }
    }
}

impl BoardConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert!(config.api_base_url.is_empty());
        assert_eq!(config.dismiss_after, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new("http://localhost:8000")
            .with_dismiss_after(Duration::from_millis(250));
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.dismiss_after, Duration::from_millis(250));
    }
}
