use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::{failure_message, message_response, status_for},
    lookup::lookup_track,
    spotify::Catalog,
    types::{LookupRequest, TrackQuery},
    utils, warning,
};

const FALLBACK_MESSAGE: &str = "Error fetching track information";

pub async fn lookup(
    Extension(catalog): Extension<Arc<dyn Catalog>>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Response {
    // an unreadable body is treated like an empty one
    let request = payload.map(|Json(r)| r).unwrap_or_default();

    let input = request.input.filter(|i| !i.trim().is_empty());
    let mode = request.mode.filter(|m| !m.trim().is_empty());
    let (Some(input), Some(mode)) = (input, mode) else {
        return message_response(StatusCode::BAD_REQUEST, "Input and mode are required");
    };

    let mode = match utils::parse_query_mode(&mode) {
        Ok(mode) => mode,
        Err(e) => return message_response(StatusCode::BAD_REQUEST, &e),
    };

    let query = TrackQuery::new(mode, input);
    match lookup_track(catalog.as_ref(), &query).await {
        Ok(data) => (StatusCode::OK, Json(data.response())).into_response(),
        Err(e) => {
            warning!("Track lookup failed ({} '{}'): {}", mode, query.raw(), e);
            message_response(status_for(&e), &failure_message(&e, FALLBACK_MESSAGE))
        }
    }
}
