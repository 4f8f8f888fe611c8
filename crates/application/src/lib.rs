//! Run Club Directory Application Layer
//!
//! Holds the directory data service: the expiring cache, the source resolver
//! with its remote-then-fallback policy, search/filter, ranking and image
//! assignment, plus the thin use cases consumed by the API layer.
pub mod cache;
pub mod ports;
pub mod services;
pub mod use_cases;
