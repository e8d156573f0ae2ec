//! Process-level plumbing shared by calculator binaries: layered
//! configuration, tracing setup and shutdown signals.

pub mod config;
pub mod logging;
pub mod signals;

pub use config::{AppConfig, CliOverrides, LogFormat, LoggingConfig, ServerConfig};
pub use logging::init_logging;
pub use signals::wait_for_shutdown;
