use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Which representation of a track the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Url,
    Isrc,
}

impl QueryMode {
    /// The representation shown back to the user for this input mode.
    pub fn opposite(self) -> Self {
        match self {
            QueryMode::Url => QueryMode::Isrc,
            QueryMode::Isrc => QueryMode::Url,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryMode::Url => "url",
            QueryMode::Isrc => "isrc",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submitted lookup: a Spotify track URL or an ISRC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackQuery {
    Url(String),
    Isrc(String),
}

impl TrackQuery {
    pub fn new(mode: QueryMode, raw: impl Into<String>) -> Self {
        match mode {
            QueryMode::Url => TrackQuery::Url(raw.into()),
            QueryMode::Isrc => TrackQuery::Isrc(raw.into()),
        }
    }

    pub fn mode(&self) -> QueryMode {
        match self {
            TrackQuery::Url(_) => QueryMode::Url,
            TrackQuery::Isrc(_) => QueryMode::Isrc,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            TrackQuery::Url(raw) | TrackQuery::Isrc(raw) => raw,
        }
    }
}

/// Opaque Spotify track id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        TrackId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub isrc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Track payload as returned by `GET /tracks/{id}`.
///
/// Collections and nested objects default to empty so a thin payload still
/// deserializes; the view builder decides whether it is usable. Fields not
/// named here land in `extra` and are serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: Album,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrackRecord {
    /// Id of the first listed artist, if any.
    pub fn primary_artist_id(&self) -> Option<&str> {
        self.artists.first().map(|a| a.id.as_str())
    }
}

/// The seven bounded [0, 1] descriptors of an audio analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioDescriptors {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub valence: f64,
}

impl AudioDescriptors {
    /// Descriptor names and values in display order.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("acousticness", self.acousticness),
            ("danceability", self.danceability),
            ("energy", self.energy),
            ("instrumentalness", self.instrumentalness),
            ("liveness", self.liveness),
            ("speechiness", self.speechiness),
            ("valence", self.valence),
        ]
    }
}

/// Audio-features payload as returned by `GET /audio-features/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub id: String,
    pub tempo: f64,
    pub key: i32,
    pub mode: i32,
    pub time_signature: i32,
    #[serde(flatten)]
    pub descriptors: AudioDescriptors,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

/// Artist payload as returned by `GET /artists/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracks {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: String,
}

/// Error object Spotify puts in non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyErrorResponse {
    pub error: SpotifyErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyErrorBody {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Seconds before the reported expiry at which a token is no longer reused.
    pub const EXPIRY_MARGIN_SECS: u64 = 240;

    pub fn is_expired_at(&self, now: u64) -> bool {
        now + Self::EXPIRY_MARGIN_SECS >= self.obtained_at + self.expires_in
    }
}

/// Body of `POST /api/spotify`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Body of `POST /api/spotify/artist`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRequest {
    #[serde(default)]
    pub artist_id: Option<String>,
}

/// Track and audio features of one resolved track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLookup {
    pub track: TrackRecord,
    pub features: AudioFeatures,
}

impl TrackLookup {
    /// Body of a successful `POST /api/spotify`.
    pub fn response(&self) -> LookupResponse<'_> {
        LookupResponse {
            track: TrackWithArtist {
                record: &self.track,
                artist_id: self.track.primary_artist_id(),
            },
            features: &self.features,
        }
    }
}

/// `{track, features}` as relayed to the caller; `track` also carries `artistId`.
#[derive(Debug, Serialize)]
pub struct LookupResponse<'a> {
    pub track: TrackWithArtist<'a>,
    pub features: &'a AudioFeatures,
}

#[derive(Debug, Serialize)]
pub struct TrackWithArtist<'a> {
    #[serde(flatten)]
    pub record: &'a TrackRecord,
    #[serde(rename = "artistId", skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<&'a str>,
}

/// Display-ready merge of a track and its audio features.
///
/// `kind` names the representation held in `value`, which is always the
/// opposite of what the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackView {
    #[serde(rename = "type")]
    pub kind: QueryMode,
    pub value: String,
    pub artist: String,
    pub song: String,
    pub cover_url: String,
    pub tempo: f64,
    pub time_signature: i32,
    pub mode: i32,
    pub key: i32,
    pub audio_features: AudioDescriptors,
    pub artist_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistView {
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: u32,
    pub image_url: String,
}

#[derive(Tabled)]
pub struct DetailTableRow {
    pub field: String,
    pub value: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub value: String,
    pub level: String,
}

#[derive(Tabled)]
pub struct FeatureDescriptionRow {
    pub feature: String,
    pub description: String,
}
