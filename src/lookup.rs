//! Lookup orchestration shared by the HTTP handlers and the CLI.

use crate::{
    Error, Res, resolver,
    spotify::Catalog,
    types::{ArtistRecord, TrackLookup, TrackQuery, TrackView},
    view,
};

/// Resolves the query, then fetches track and audio features concurrently.
///
/// Both requests are in flight at the same time and the lookup fails as
/// soon as either of them fails; there is no partial result.
pub async fn lookup_track(catalog: &dyn Catalog, query: &TrackQuery) -> Res<TrackLookup> {
    let id = resolver::resolve(catalog, query).await?;

    let (track, features) = tokio::try_join!(
        catalog.get_track(&id),
        catalog.get_audio_features(&id)
    )?;

    Ok(TrackLookup { track, features })
}

/// [`lookup_track`] followed by [`view::build_track_view`].
pub async fn lookup_view(catalog: &dyn Catalog, query: &TrackQuery) -> Res<TrackView> {
    let TrackLookup { track, features } = lookup_track(catalog, query).await?;
    view::build_track_view(query, &track, &features)
}

pub async fn fetch_artist(catalog: &dyn Catalog, artist_id: &str) -> Res<ArtistRecord> {
    let artist_id = artist_id.trim();
    if artist_id.is_empty() {
        return Err(Error::InvalidInput("Artist ID is required".to_string()));
    }
    catalog.get_artist(artist_id).await
}
