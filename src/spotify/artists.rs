use reqwest::Client;

use crate::{Res, spotify::send_json, types::ArtistRecord};

/// Retrieves an artist (name, genres, followers, popularity, images).
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `api_url` - Base URL of the Web API
/// * `token` - Valid bearer token
/// * `id` - Spotify artist id, usually the primary artist of a looked-up track
///
/// # Returns
///
/// - `Ok(ArtistRecord)` - The artist; `images` may be empty
/// - `Err(Error::Upstream)` - Spotify rejected the id
/// - `Err(Error::Transport)` - Network failure or timeout
pub async fn get_artist(
    client: &Client,
    api_url: &str,
    token: &str,
    id: &str,
) -> Res<ArtistRecord> {
    let url = format!("{uri}/artists/{id}", uri = api_url, id = id);
    send_json(client.get(&url), token).await
}
