use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;

use crate::model::app_state::AppState;
use crate::model::envelope::ResponseEnvelope;
use crate::model::errors::TransferError;
use crate::shared::constants::FILENAME_FIELD;
use crate::shared::storage::resolve;

const MISSING_FILENAME_MESSAGE: &str = "Filename in field 'filename' does not exist.";
const NOT_FOUND_MESSAGE: &str = "File not found";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Reads the file named by the `filename` form field out of the saved root and
/// returns it base64-encoded. The field may arrive either as a multipart form
/// or as a urlencoded one.
pub async fn send_file(State(state): State<AppState>, request: Request) -> Response {
    let result = match read_filename(request).await {
        Ok(filename) => encode_file(&state, filename).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(envelope) => envelope.into_response_with(StatusCode::OK),
        Err(e) => {
            let message = match &e {
                TransferError::FieldMissing(_)
                | TransferError::FieldInvalid(_)
                | TransferError::PayloadTooLarge(_) => {
                    tracing::warn!("Rejected download: {}", e);
                    MISSING_FILENAME_MESSAGE
                }
                TransferError::FileSystem { .. } => {
                    tracing::error!("Failed to read requested file: {}", e);
                    NOT_FOUND_MESSAGE
                }
            };
            ResponseEnvelope::with_message(message).into_response_with(e.status())
        }
    }
}

async fn read_filename(request: Request) -> Result<String, TransferError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.get(..MULTIPART_FORM_DATA.len()))
        .is_some_and(|essence| essence.eq_ignore_ascii_case(MULTIPART_FORM_DATA));

    let filename = if is_multipart {
        filename_from_multipart(request).await?
    } else {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(|e| {
                tracing::debug!("Download body is not a form: {}", e);
                TransferError::FieldMissing(FILENAME_FIELD)
            })?;
        fields
            .get(FILENAME_FIELD)
            .cloned()
            .ok_or(TransferError::FieldMissing(FILENAME_FIELD))?
    };

    if filename.is_empty() {
        Err(TransferError::FieldMissing(FILENAME_FIELD))
    } else {
        Ok(filename)
    }
}

async fn filename_from_multipart(request: Request) -> Result<String, TransferError> {
    let mut multipart = Multipart::from_request(request, &()).await.map_err(|e| {
        tracing::debug!("Download body is not a multipart form: {}", e);
        TransferError::FieldMissing(FILENAME_FIELD)
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| TransferError::FieldInvalid(FILENAME_FIELD))?
    {
        if field.name() == Some(FILENAME_FIELD) {
            return field
                .text()
                .await
                .map_err(|_| TransferError::FieldInvalid(FILENAME_FIELD));
        }
    }

    Err(TransferError::FieldMissing(FILENAME_FIELD))
}

async fn encode_file(state: &AppState, filename: String) -> Result<ResponseEnvelope, TransferError> {
    let path = resolve(&state.storage.saved_dir, &filename, FILENAME_FIELD)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| TransferError::FileSystem { path, source })?;

    tracing::info!("Sending {} ({} bytes).", &filename, bytes.len());
    Ok(ResponseEnvelope::with_file(
        STANDARD.encode(&bytes),
        extension_of(&filename),
    ))
}

/// Everything after the first `.`, or an empty string when there is none.
pub fn extension_of(filename: &str) -> &str {
    filename
        .split_once('.')
        .map(|(_, extension)| extension)
        .unwrap_or_default()
}
