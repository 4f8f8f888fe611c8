pub mod fallback;
pub mod sheets;

pub use fallback::BundledFallbackSource;
pub use sheets::SheetsClubSource;
