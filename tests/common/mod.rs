#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tokio::sync::Barrier;

use spotisrc::{
    Error, Res,
    spotify::Catalog,
    types::{
        Album, ArtistRecord, AudioDescriptors, AudioFeatures, ExternalIds, ExternalUrls,
        Followers, Image, TrackArtist, TrackId, TrackRecord,
    },
};

pub const TRACK_ID: &str = "4cOdK2wGLETKBW3PvgPWqT";
pub const TRACK_URL: &str = "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT";
pub const ISRC: &str = "BRBMG0300729";
pub const ARTIST_ID: &str = "0du5cEVh5yTK9QJze8zA0C";

/// Unwraps a `json!` object literal into the map kept in `extra`.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

pub fn create_test_track() -> TrackRecord {
    TrackRecord {
        id: TRACK_ID.to_string(),
        name: "Never Gonna Give You Up".to_string(),
        artists: vec![
            TrackArtist {
                id: ARTIST_ID.to_string(),
                name: "Rick Astley".to_string(),
            },
            TrackArtist {
                id: "featured_artist_id".to_string(),
                name: "Featured Artist".to_string(),
            },
        ],
        album: Album {
            id: "album_id".to_string(),
            name: "Whenever You Need Somebody".to_string(),
            images: vec![
                Image {
                    url: "https://i.scdn.co/image/large".to_string(),
                    height: Some(640),
                    width: Some(640),
                },
                Image {
                    url: "https://i.scdn.co/image/small".to_string(),
                    height: Some(64),
                    width: Some(64),
                },
            ],
        },
        external_ids: ExternalIds {
            isrc: Some(ISRC.to_string()),
        },
        external_urls: ExternalUrls {
            spotify: Some(TRACK_URL.to_string()),
        },
        extra: object(json!({
            "duration_ms": 213573,
            "popularity": 79,
            "preview_url": null,
            "uri": "spotify:track:4cOdK2wGLETKBW3PvgPWqT"
        })),
    }
}

pub fn create_test_features() -> AudioFeatures {
    AudioFeatures {
        id: TRACK_ID.to_string(),
        tempo: 113.301,
        key: 8,
        mode: 1,
        time_signature: 4,
        descriptors: AudioDescriptors {
            acousticness: 0.135,
            danceability: 0.727,
            energy: 0.939,
            instrumentalness: 0.0,
            liveness: 0.151,
            speechiness: 0.0369,
            valence: 0.916,
        },
        extra: object(json!({
            "loudness": -11.855,
            "duration_ms": 213573,
            "type": "audio_features"
        })),
    }
}

pub fn create_test_artist() -> ArtistRecord {
    ArtistRecord {
        id: ARTIST_ID.to_string(),
        name: "Rick Astley".to_string(),
        genres: vec!["dance pop".to_string(), "new wave pop".to_string()],
        followers: Followers { total: 1_234_567 },
        popularity: 72,
        images: vec![Image {
            url: "https://i.scdn.co/image/artist".to_string(),
            height: Some(640),
            width: Some(640),
        }],
        extra: object(json!({
            "external_urls": {"spotify": "https://open.spotify.com/artist/0du5cEVh5yTK9QJze8zA0C"},
            "type": "artist",
            "uri": "spotify:artist:0du5cEVh5yTK9QJze8zA0C"
        })),
    }
}

pub fn not_found() -> Error {
    Error::Upstream {
        status: 404,
        message: "non existing id".to_string(),
    }
}

/// In-memory catalog with scripted answers and call counters.
pub struct FakeCatalog {
    pub track: Option<TrackRecord>,
    pub features: Option<AudioFeatures>,
    pub search_results: Vec<TrackId>,
    pub artist: Option<ArtistRecord>,
    pub features_transport_error: bool,
    /// When set, track and features requests wait on it, so a lookup only
    /// completes if both are in flight at the same time.
    pub barrier: Option<Arc<Barrier>>,
    pub track_calls: AtomicUsize,
    pub features_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub artist_calls: AtomicUsize,
    pub requested_ids: std::sync::Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        FakeCatalog {
            track: Some(create_test_track()),
            features: Some(create_test_features()),
            search_results: vec![TrackId::new(TRACK_ID)],
            artist: Some(create_test_artist()),
            features_transport_error: false,
            barrier: None,
            track_calls: AtomicUsize::new(0),
            features_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            artist_calls: AtomicUsize::new(0),
            requested_ids: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.track_calls.load(Ordering::SeqCst)
            + self.features_calls.load(Ordering::SeqCst)
            + self.search_calls.load(Ordering::SeqCst)
            + self.artist_calls.load(Ordering::SeqCst)
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }

    async fn rendezvous(&self) {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn get_track(&self, id: &TrackId) -> Res<TrackRecord> {
        self.track_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(id.to_string());
        self.rendezvous().await;
        self.track.clone().ok_or_else(not_found)
    }

    async fn get_audio_features(&self, _id: &TrackId) -> Res<AudioFeatures> {
        self.features_calls.fetch_add(1, Ordering::SeqCst);
        self.rendezvous().await;
        if self.features_transport_error {
            return Err(Error::Transport("connection reset".to_string()));
        }
        self.features.clone().ok_or_else(not_found)
    }

    async fn search_by_isrc(&self, _isrc: &str) -> Res<Vec<TrackId>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.search_results.clone())
    }

    async fn get_artist(&self, id: &str) -> Res<ArtistRecord> {
        self.artist_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(id.to_string());
        self.artist.clone().ok_or_else(not_found)
    }
}
