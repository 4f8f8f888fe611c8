//! Run Club Directory Infrastructure Layer
//!
//! Concrete sources behind the application ports: the Google-Sheets-backed
//! remote source and the bundled JSON fallback.
pub mod sources;

pub use sources::{BundledFallbackSource, SheetsClubSource};
