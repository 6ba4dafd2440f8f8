//! # Spotify Integration Module
//!
//! Thin client over the Spotify Web API: the client-credentials token
//! exchange plus the four catalog lookups the converter needs. Each lookup
//! is one authenticated GET without retries.
//!
//! ## Architecture
//!
//! ```text
//! Lookup orchestration / API handlers
//!          ↓
//!    dyn Catalog
//!          ↓
//! SpotifyCatalog ── TokenManager ── auth::request_token
//!     ├── tracks (track, audio features, ISRC search)
//!     └── artists (artist by id)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Error Handling
//!
//! - Non-success statuses become [`Error::Upstream`] with Spotify's own
//!   message when the body carries one
//! - Connection failures and timeouts become [`Error::Transport`]
//! - Bodies missing required fields become [`Error::MalformedUpstreamData`]
//!
//! ## API Coverage
//!
//! - `GET /tracks/{id}`
//! - `GET /audio-features/{id}`
//! - `GET /search?q=isrc:{isrc}&type=track`
//! - `GET /artists/{id}`
//! - `POST /api/token` (client credentials)

pub mod artists;
pub mod auth;
pub mod tracks;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    Error, Res, config,
    management::TokenManager,
    types::{ArtistRecord, AudioFeatures, SpotifyErrorResponse, TrackId, TrackRecord},
};

/// Lookups against the external music catalog.
///
/// Everything above the client layer depends on this trait only, so tests
/// can swap in an in-memory catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn get_track(&self, id: &TrackId) -> Res<TrackRecord>;

    async fn get_audio_features(&self, id: &TrackId) -> Res<AudioFeatures>;

    /// Track ids matching an ISRC, in the provider's ranking order.
    async fn search_by_isrc(&self, isrc: &str) -> Res<Vec<TrackId>>;

    async fn get_artist(&self, id: &str) -> Res<ArtistRecord>;
}

/// [`Catalog`] backed by the Spotify Web API.
pub struct SpotifyCatalog {
    client: Client,
    tokens: TokenManager,
    api_url: String,
}

impl SpotifyCatalog {
    /// Builds a catalog from the environment configuration.
    ///
    /// Credentials are not read here; they are read on every token
    /// exchange, so a missing secret surfaces on the first lookup as
    /// [`Error::MissingCredential`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unparsable timeout and
    /// [`Error::Transport`] if the HTTP client cannot be built.
    pub fn from_env() -> Res<Self> {
        let client = Client::builder().timeout(config::request_timeout()?).build()?;
        Ok(Self::new(
            client,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        ))
    }

    /// Catalog against explicit Web API and token endpoints.
    pub fn new(client: Client, api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        SpotifyCatalog {
            tokens: TokenManager::new(client.clone(), token_url),
            client,
            api_url: api_url.into(),
        }
    }

    /// Drops the cached token when Spotify no longer accepts it.
    async fn checked<T>(&self, result: Res<T>) -> Res<T> {
        if let Err(Error::Upstream { status: 401, .. }) = &result {
            self.tokens.invalidate().await;
        }
        result
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn get_track(&self, id: &TrackId) -> Res<TrackRecord> {
        let token = self.tokens.get_valid_token().await?;
        let result = tracks::get_track(&self.client, &self.api_url, &token, id).await;
        self.checked(result).await
    }

    async fn get_audio_features(&self, id: &TrackId) -> Res<AudioFeatures> {
        let token = self.tokens.get_valid_token().await?;
        let result = tracks::get_audio_features(&self.client, &self.api_url, &token, id).await;
        self.checked(result).await
    }

    async fn search_by_isrc(&self, isrc: &str) -> Res<Vec<TrackId>> {
        let token = self.tokens.get_valid_token().await?;
        let result = tracks::search_by_isrc(&self.client, &self.api_url, &token, isrc).await;
        self.checked(result).await
    }

    async fn get_artist(&self, id: &str) -> Res<ArtistRecord> {
        let token = self.tokens.get_valid_token().await?;
        let result = artists::get_artist(&self.client, &self.api_url, &token, id).await;
        self.checked(result).await
    }
}

/// Sends an authenticated request and decodes a JSON body of type `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    token: &str,
) -> Res<T> {
    let response = request.bearer_auth(token).send().await?;
    decode_response(response).await
}

/// Maps a response to `T`, or to an [`Error::Upstream`] for non-success statuses.
pub(crate) async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Res<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(upstream_error(status, &body));
    }

    serde_json::from_slice(&body).map_err(|e| Error::MalformedUpstreamData(e.to_string()))
}

/// Builds an [`Error::Upstream`], preferring the message from Spotify's error object.
pub fn upstream_error(status: StatusCode, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<SpotifyErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Error::Upstream {
        status: status.as_u16(),
        message,
    }
}
