pub mod get_all;
pub mod get_club;
pub mod get_featured;
pub mod refresh;
pub mod region_counts;
pub mod search_clubs;

pub use get_all::GetClubsUseCase;
pub use get_club::GetClubUseCase;
pub use get_featured::GetFeaturedClubsUseCase;
pub use refresh::RefreshClubsUseCase;
pub use region_counts::{GetRegionCountsUseCase, RegionCount};
pub use search_clubs::SearchClubsUseCase;
