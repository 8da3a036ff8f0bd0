// Marketplace logic for ReWear - points, browsing, listing, dashboard
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod export;
pub mod listing;
pub mod models;
pub mod points;
pub mod seed;
pub mod source;

pub use catalog::{filter_and_sort, toggle_favorite, FilterCriteria, SortKey};
pub use config::Config;
pub use error::Error;
pub use export::{ExportFormat, Exporter};
pub use listing::ListingDraft;
pub use models::{Category, Condition, Item, Size, Style};
pub use points::estimate_points;
pub use source::{ItemSource, JsonFileSource, Marketplace, SeedCatalog};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
