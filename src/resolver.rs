//! Turns what the user typed into a Spotify track id.
//!
//! URLs are parsed locally without touching the network; the id is not
//! checked for existence here, an unknown id fails later when the track is
//! fetched. ISRCs go through the catalog search and take the first hit as
//! ranked by Spotify.

use crate::{
    Error, Res,
    spotify::Catalog,
    types::{TrackId, TrackQuery},
};

/// Resolves a query to the track id it names.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for empty or whitespace-only input (before any
///   network call) and for URLs without a usable last path segment
/// - [`Error::IsrcNotFound`] when the ISRC search has no results
/// - Whatever the catalog search reports for ISRC queries
pub async fn resolve(catalog: &dyn Catalog, query: &TrackQuery) -> Res<TrackId> {
    let raw = query.raw().trim();
    if raw.is_empty() {
        return Err(Error::InvalidInput("Input must not be empty".to_string()));
    }

    match query {
        TrackQuery::Url(_) => track_id_from_url(raw),
        TrackQuery::Isrc(_) => catalog
            .search_by_isrc(raw)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::IsrcNotFound(raw.to_string())),
    }
}

/// Extracts the track id from a Spotify track URL.
///
/// Takes the last path segment, ignoring a query string (`?si=...`), a
/// fragment and trailing slashes.
///
/// # Example
///
/// ```
/// let id = track_id_from_url("https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT?si=abc")?;
/// assert_eq!(id.as_str(), "4cOdK2wGLETKBW3PvgPWqT");
/// ```
pub fn track_id_from_url(url: &str) -> Res<TrackId> {
    let path = url.trim().split(['?', '#']).next().unwrap_or_default();
    let id = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if id.is_empty() {
        return Err(Error::InvalidInput(format!(
            "Could not find a track id in '{}'",
            url
        )));
    }

    Ok(TrackId::new(id))
}
