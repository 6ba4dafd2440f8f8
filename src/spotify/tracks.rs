use reqwest::Client;

use crate::{
    Res,
    spotify::send_json,
    types::{AudioFeatures, SearchResponse, TrackId, TrackRecord},
};

/// Retrieves a track from the Spotify Web API.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (carries the request deadline)
/// * `api_url` - Base URL of the Web API, e.g. `https://api.spotify.com/v1`
/// * `token` - Valid bearer token
/// * `id` - Spotify track id
///
/// # Errors
///
/// An unknown id comes back from Spotify as a 404 (or 400 for an id that
/// is not base62) and is returned as [`crate::Error::Upstream`].
pub async fn get_track(
    client: &Client,
    api_url: &str,
    token: &str,
    id: &TrackId,
) -> Res<TrackRecord> {
    let url = format!("{uri}/tracks/{id}", uri = api_url, id = id);
    send_json(client.get(&url), token).await
}

/// Retrieves the audio analysis summary (tempo, key, descriptors) of a track.
pub async fn get_audio_features(
    client: &Client,
    api_url: &str,
    token: &str,
    id: &TrackId,
) -> Res<AudioFeatures> {
    let url = format!("{uri}/audio-features/{id}", uri = api_url, id = id);
    send_json(client.get(&url), token).await
}

/// Searches the catalog for tracks carrying exactly this ISRC.
///
/// Returns the ids in the order Spotify ranks them; an empty list means no
/// match and is not an error at this level.
///
/// # Example
///
/// ```
/// let ids = search_by_isrc(&client, api_url, &token, "BRBMG0300729").await?;
/// let first = ids.into_iter().next();
/// ```
pub async fn search_by_isrc(
    client: &Client,
    api_url: &str,
    token: &str,
    isrc: &str,
) -> Res<Vec<TrackId>> {
    let url = format!("{uri}/search", uri = api_url);
    let query = format!("isrc:{}", isrc);
    let request = client
        .get(&url)
        .query(&[("q", query.as_str()), ("type", "track")]);

    let res: SearchResponse = send_json(request, token).await?;
    Ok(res
        .tracks
        .items
        .into_iter()
        .map(|item| TrackId::new(item.id))
        .collect())
}
