//! Run Club Directory Domain Layer
pub mod club;
pub mod config;
pub mod errors;

pub use club::ClubRecord;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DirectoryError;
