use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use researcher::TopicError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the JSON API.
///
/// Generation failures never show up here: the stages turn them into text.
/// What remains is bad input, a server without a usable provider, and bugs.
#[derive(Debug)]
pub enum AppError {
    /// The topic was empty or whitespace-only.
    Topic(TopicError),
    /// The pipeline was never built; carries the message shown to users.
    Unavailable(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<TopicError> for AppError {
    fn from(err: TopicError) -> Self {
        AppError::Topic(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Topic(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Topic(err) => err.to_string(),
            AppError::Unavailable(message) => message.clone(),
            AppError::Internal(_) => "An internal server error occurred.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Topic(err) => warn!("Rejected research request: {err}"),
            AppError::Unavailable(message) => warn!("Research request refused: {message}"),
            AppError::Internal(err) => error!("Internal server error: {:?}", err),
        }

        let body = Json(json!({
            "error": self.user_message(),
        }));

        (self.status_code(), body).into_response()
    }
}
