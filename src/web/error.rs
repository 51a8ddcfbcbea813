//! Error type for request handling and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::render::RenderError;
use crate::storage::StorageError;

/// Failures a view can end in.
///
/// Only [`WebError::NotFound`] is visible to the client as such. Everything
/// else becomes a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested list does not exist.
    #[error("Not found")]
    NotFound,

    /// The store failed for a reason other than a missing list.
    #[error("Storage error: {0}")]
    Storage(StorageError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The request body was missing or could not be decoded as a form.
    #[error("Malformed form body: {0}")]
    BadForm(String),

    /// The shared database lock was poisoned by a panicking request.
    #[error("Database lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for WebError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => WebError::NotFound,
            other => WebError::Storage(other),
        }
    }
}

impl WebError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            (status, "Server Error (500)").into_response()
        } else {
            (status, "Not Found").into_response()
        }
    }
}
