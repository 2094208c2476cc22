use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::model::app_state::AppState;
use crate::model::envelope::ResponseEnvelope;
use crate::model::errors::TransferError;
use crate::shared::constants::FILE_FIELD;
use crate::shared::storage::resolve;

const MISSING_FILE_MESSAGE: &str = "File in field 'filebytes' does not exist.";
const WRITE_FAILED_MESSAGE: &str = "File could not be saved";
const TOO_LARGE_MESSAGE: &str = "File in field 'filebytes' exceeds the upload size limit.";

/// Stores the `filebytes` part of a multipart form under the uploads root,
/// replacing any file that already has the same name.
pub async fn receive_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match store_upload(&state, multipart).await {
        Ok((filename, size)) => {
            tracing::info!("Stored {} ({} bytes).", &filename, size);
            ResponseEnvelope::ok().into_response_with(StatusCode::OK)
        }
        Err(e) => {
            let message = match &e {
                TransferError::FieldMissing(_) | TransferError::FieldInvalid(_) => {
                    tracing::warn!("Rejected upload: {}", e);
                    MISSING_FILE_MESSAGE
                }
                TransferError::PayloadTooLarge(_) => {
                    tracing::warn!(
                        "Rejected upload over {} bytes: {}",
                        state.max_body_size,
                        e
                    );
                    TOO_LARGE_MESSAGE
                }
                TransferError::FileSystem { .. } => {
                    tracing::error!("Failed to store upload: {}", e);
                    WRITE_FAILED_MESSAGE
                }
            };
            ResponseEnvelope::with_message(message).into_response_with(e.status())
        }
    }
}

async fn store_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(String, usize), TransferError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Upload body is not a multipart form: {}", e);
        TransferError::FieldMissing(FILE_FIELD)
    })?;

    let (filename, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
            .ok_or(TransferError::FieldMissing(FILE_FIELD))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or(TransferError::FieldInvalid(FILE_FIELD))?;
        let bytes = field.bytes().await.map_err(multipart_error)?;
        break (filename, bytes);
    };

    let path = resolve(&state.storage.uploads_dir, &filename, FILE_FIELD)?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| TransferError::FileSystem { path, source })?;

    Ok((filename, bytes.len()))
}

fn multipart_error(e: MultipartError) -> TransferError {
    tracing::debug!("Failed to read multipart body: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        TransferError::PayloadTooLarge(FILE_FIELD)
    } else {
        TransferError::FieldInvalid(FILE_FIELD)
    }
}
