pub mod aggregate;
pub mod filter;
pub mod listing;
pub mod normalize;
pub mod scoring;
pub mod snapshot;

pub use filter::Selection;
pub use listing::{ListingRecord, MapPoint, RawListing, Score, ScoredListing};
pub use snapshot::{DashboardMetrics, DatasetSnapshot};
