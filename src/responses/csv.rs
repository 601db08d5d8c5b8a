// responses/csv.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return a CSV export as a download, tagged with its content fingerprint.
pub fn csv_response(buffer: Vec<u8>, filename: &str, etag: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSV_UTF_8.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .header("ETag", etag)
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}

/// The client already holds this exact export.
pub fn not_modified_response(etag: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(304)
        .header("ETag", etag)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
