use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single transfer request. Every variant is turned into a
/// [`ResponseEnvelope`](crate::model::envelope::ResponseEnvelope) by the
/// handler that produced it; none of them reach the transport.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Field '{0}' is missing from the request.")]
    FieldMissing(&'static str),
    #[error("Field '{0}' is present but cannot be used.")]
    FieldInvalid(&'static str),
    #[error("Field '{0}' exceeds the request body limit.")]
    PayloadTooLarge(&'static str),
    #[error("Filesystem operation on {} failed: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TransferError {
    pub fn status(&self) -> StatusCode {
        match self {
            TransferError::FieldMissing(_) | TransferError::FieldInvalid(_) => {
                StatusCode::BAD_REQUEST
            }
            TransferError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            TransferError::FileSystem { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
