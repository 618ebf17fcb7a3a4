use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing)]
    status_code: Option<StatusCode>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ErrorResponse {
    pub fn status_code(&self) -> StatusCode {
        self.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_request(error: impl Into<String>, description: impl Into<Option<String>>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, error, description)
    }

    /// The rejection every malformed score submission gets.
    pub fn invalid_data(description: impl Into<String>) -> Self {
        Self::bad_request("invalid_data", Some(description.into()))
    }

    pub fn with_status(status: StatusCode, error: impl Into<String>, description: impl Into<Option<String>>) -> Self {
        Self {
            status_code: Some(status),
            error: error.into(),
            description: description.into(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self)).into_response()
    }
}
