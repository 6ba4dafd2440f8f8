//! # API Module
//!
//! HTTP endpoints of the spotisrc proxy. The browser (or any other client)
//! never talks to Spotify directly: these handlers hold the application
//! credentials, relay the catalog lookups and flatten every failure into a
//! small JSON body.
//!
//! ## Endpoints
//!
//! - [`lookup`] - `POST /api/spotify` with `{input, mode}`, answers
//!   `{track, features}` or `{message}`
//! - [`artist`] - `POST /api/spotify/artist` with `{artistId}`, answers the
//!   artist payload or `{error}`
//! - [`health`] - `GET /health`
//! - [`method_not_allowed`] - any other verb on the POST endpoints
//!
//! ## Status Codes
//!
//! Caller mistakes (missing or empty fields, unknown mode) are 400.
//! Everything else, including "no track for this ISRC", is 500 with the
//! failure reason as message text.

mod artist;
mod health;
mod lookup;

use axum::{
    Json,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::Error;

pub use artist::artist;
pub use health::health;
pub use lookup::lookup;

pub fn status_for(err: &Error) -> StatusCode {
    if err.is_caller_mistake() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// `{"message": ...}` body used by the lookup endpoint.
pub fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// `{"error": ...}` body used by the artist endpoint.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Text shown for a failure, or `fallback` when the error has none.
pub fn failure_message(err: &Error, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
