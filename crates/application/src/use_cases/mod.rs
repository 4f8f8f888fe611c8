pub mod clubs;

pub use clubs::{
    GetClubUseCase, GetClubsUseCase, GetFeaturedClubsUseCase, GetRegionCountsUseCase,
    RefreshClubsUseCase, SearchClubsUseCase,
};
