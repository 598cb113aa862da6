pub mod error;
pub mod http;
pub mod observability;

pub use error::{CliError, Result};
pub use http::{ReqwestTransport, DEFAULT_TIMEOUT};
pub use observability::LogConfig;
