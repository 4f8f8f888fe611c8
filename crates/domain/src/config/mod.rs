//! Configuration module for the Run Club Directory
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration, file loading and CLI overrides
//! - `server`: HTTP server binding
//! - `sources`: remote spreadsheet source and local fallback data
//! - `cache`: TTLs and sweep interval
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod sources;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use sources::{FallbackConfig, SheetsConfig};
