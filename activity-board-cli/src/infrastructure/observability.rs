use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_level: tracing::Level,
    pub show_targets: bool,
    pub show_thread_ids: bool,
    /// Whether to write logs to stderr at all
    pub show_logs: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: tracing::Level::WARN,
            show_targets: false,
            show_thread_ids: false,
            show_logs: true,
        }
    }
}

impl LogConfig {
    /// Verbose, human-readable
    pub fn dev() -> Self {
        Self {
            default_level: tracing::Level::DEBUG,
            show_targets: true,
            ..Default::default()
        }
    }

    /// Map the `--verbose`/`--quiet` flags
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::default().without_logs();
        }
        match verbose {
            0 => Self::default(),
            1 => Self::default().with_level(tracing::Level::INFO),
            _ => Self::dev(),
        }
    }

    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.default_level = level;
        self
    }

    pub fn without_logs(mut self) -> Self {
        self.show_logs = false;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "activity_board_cli={level},activity_board_core={level}",
                level = self.default_level
            ))
        })
    }

    pub fn init(self) -> Result<(), String> {
        let env_filter = self.env_filter();

        if self.show_logs {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(self.show_targets)
                .with_thread_ids(self.show_thread_ids);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e))
        } else {
            // Silent mode: no fmt layer, just filter
            tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e))
        }
    }
}
