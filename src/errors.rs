use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (DB, exports).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("CSV Error: {0}")]
    CsvError(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("JSON Error: {0}")]
    JsonError(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            _ => 500,
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<csv::Error> for ServerError {
    fn from(e: csv::Error) -> Self {
        ServerError::CsvError(e.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::JsonError(e.to_string())
    }
}
