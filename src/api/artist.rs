use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::{error_response, failure_message, status_for},
    lookup::fetch_artist,
    spotify::Catalog,
    types::ArtistRequest,
    warning,
};

const FALLBACK_MESSAGE: &str = "Error fetching artist information";

pub async fn artist(
    Extension(catalog): Extension<Arc<dyn Catalog>>,
    payload: Result<Json<ArtistRequest>, JsonRejection>,
) -> Response {
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let artist_id = request.artist_id.unwrap_or_default();

    match fetch_artist(catalog.as_ref(), &artist_id).await {
        Ok(artist) => (StatusCode::OK, Json(artist)).into_response(),
        Err(e) => {
            if !e.is_caller_mistake() {
                warning!("Artist lookup failed ('{}'): {}", artist_id, e);
            }
            error_response(status_for(&e), &failure_message(&e, FALLBACK_MESSAGE))
        }
    }
}
