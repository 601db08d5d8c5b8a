use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::domain::listing::ListingRecord;
use crate::errors::ServerError;

/// Serialize listings as CSV with a header row named after the record fields.
pub fn export_listings_csv<'a, I>(listings: I) -> Result<Vec<u8>, ServerError>
where
    I: IntoIterator<Item = &'a ListingRecord>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut wrote_any = false;

    for listing in listings {
        writer.serialize(listing)?;
        wrote_any = true;
    }

    // serde only emits the header alongside the first record
    if !wrote_any {
        writer.write_record(CSV_HEADERS)?;
    }

    writer
        .into_inner()
        .map_err(|e| ServerError::CsvError(format!("Failed to flush CSV: {e}")))
}

pub const CSV_HEADERS: [&str; 12] = [
    "id",
    "address",
    "zip_code",
    "square_footage",
    "bedrooms",
    "home_type",
    "listed_price",
    "zestimate",
    "value_delta",
    "last_updated",
    "latitude",
    "longitude",
];

/// Read back a file written by [`export_listings_csv`].
pub fn parse_listings_csv(bytes: &[u8]) -> Result<Vec<ListingRecord>, ServerError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut out = Vec::new();
    for record in reader.deserialize() {
        out.push(record?);
    }
    Ok(out)
}

/// Strong ETag value for an export body.
pub fn content_fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("\"{}\"", STANDARD.encode(digest))
}
