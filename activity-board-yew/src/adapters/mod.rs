//! Browser implementations of the core's transport and timer seams

mod http;
mod timer;

pub use http::GlooTransport;
pub use timer::TimeoutScheduler;
