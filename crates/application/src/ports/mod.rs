pub mod club_source;
pub mod fallback_source;

pub use club_source::ClubSource;
pub use fallback_source::FallbackSource;
