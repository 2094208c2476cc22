use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const OK_MESSAGE: &str = "Ok";

/// JSON body returned by both transfer endpoints.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl ResponseEnvelope {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ResponseEnvelope {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn ok() -> Self {
        ResponseEnvelope::with_message(OK_MESSAGE)
    }

    pub fn with_file<S: Into<String>>(file64: String, extension: S) -> Self {
        ResponseEnvelope {
            message: OK_MESSAGE.to_string(),
            file64: Some(file64),
            extension: Some(extension.into()),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
