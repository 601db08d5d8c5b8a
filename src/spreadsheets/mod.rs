pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{content_fingerprint, export_listings_csv, parse_listings_csv};
pub use export_xlsx::export_listings_xlsx;
