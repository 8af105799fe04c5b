use axum::http::StatusCode;
use thiserror::Error;

/// Load-level failures: a missing file or a table whose header/rows do not
/// match the expected schema. Cell-level junk never reaches this type; it
/// coerces to zero during parsing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read source table: {0}")]
    Io(#[from] std::io::Error),
    #[error("source table is malformed: {0}")]
    Malformed(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write track file: {0}")]
    Write(#[from] csv::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
