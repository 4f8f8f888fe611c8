pub mod mock_sources;

pub use mock_sources::{make_club, MockClubSource, MockFallbackSource};
