//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - console output for development
//! - optional JSON-formatted local file logging with rotation
//! - configurable log levels via argument or `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use anonim::config::LoggingConfig;
//! use anonim::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("engine ready");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
