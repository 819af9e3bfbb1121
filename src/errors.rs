use axum::http::StatusCode;
use std::fmt;

/// Failure talking to the portfolio API.
#[derive(Debug)]
pub enum ApiError {
    // Connection refused, reset, bad URL and friends
    Transport(reqwest::Error),
    // Upstream answered with a non-2xx status
    Status(reqwest::StatusCode),
    // Body was not the JSON we expected
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "request failed: {err}"),
            ApiError::Status(status) => write!(f, "api returned {status}"),
            ApiError::Decode(err) => write!(f, "invalid api response: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

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
