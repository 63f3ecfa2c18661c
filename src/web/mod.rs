//! HTTP surface of the service.
//!
//! Handlers translate requests into exactly one store call. Not-found and
//! id-mismatch outcomes are decided here, never inside the store, and are
//! reported as bare status codes with an empty body.

pub mod app;
pub mod handlers;
pub mod openapi;
pub mod state;
pub mod system;

pub use app::build_router;
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::core::ItemId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("path id {path} does not match body id {body}")]
    IdMismatch { path: ItemId, body: ItemId },
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
