//! API error handling.
//!
//! Every failure inside a handler ends up as an [`ApiError`], and every
//! `ApiError` becomes a JSON body with a single `error` field. Storage and
//! unexpected errors are logged here and answered with a generic text, so
//! driver messages and SQL never reach the client.

use crate::libs::messages::Message;
use crate::msg_error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed, missing or oversized input.
    #[error("{0}")]
    Validation(Message),
    /// The id does not resolve to a stored task.
    #[error("task not found")]
    NotFound,
    /// Anything the SQLite driver reported.
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
    /// Everything else.
    #[error("unexpected failure: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text the client gets to see.
    pub fn public_message(&self) -> Message {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::NotFound => Message::TaskNotFound,
            ApiError::Storage(_) => Message::DatabaseOperationFailed,
            ApiError::Unexpected(_) => Message::InternalServerError,
        }
    }
}

impl From<Message> for ApiError {
    fn from(message: Message) -> Self {
        ApiError::Validation(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(error) => msg_error!(Message::DatabaseError(error.to_string())),
            ApiError::Unexpected(error) => msg_error!(Message::UnexpectedError(format!("{error:#}"))),
            ApiError::Validation(_) | ApiError::NotFound => {}
        }

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_hide_driver_details() {
        let error = ApiError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.public_message(), Message::DatabaseOperationFailed);
    }

    #[test]
    fn unexpected_errors_are_generic() {
        let error = ApiError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(error.public_message().to_string(), "Internal server error");
    }

    #[test]
    fn validation_keeps_its_message() {
        let error = ApiError::from(Message::TaskNameEmpty);
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), Message::TaskNameEmpty);
    }
}
