pub mod images;
pub mod ranking;
pub mod resolver;
pub mod search;

pub use resolver::ClubResolver;
pub use search::SearchService;
