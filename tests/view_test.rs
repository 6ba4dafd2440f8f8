mod common;

use common::{
    ARTIST_ID, ISRC, TRACK_URL, create_test_artist, create_test_features, create_test_track,
};
use pretty_assertions::assert_eq;
use spotisrc::{
    Error,
    types::{AudioDescriptors, QueryMode, TrackQuery, TrackView},
    view::*,
};

#[test]
fn test_build_track_view_from_url_shows_isrc() {
    let query = TrackQuery::Url(TRACK_URL.to_string());
    let view = build_track_view(&query, &create_test_track(), &create_test_features()).unwrap();

    let expected = TrackView {
        kind: QueryMode::Isrc,
        value: ISRC.to_string(),
        artist: "Rick Astley".to_string(),
        song: "Never Gonna Give You Up".to_string(),
        cover_url: "https://i.scdn.co/image/large".to_string(),
        tempo: 113.301,
        time_signature: 4,
        mode: 1,
        key: 8,
        audio_features: AudioDescriptors {
            acousticness: 0.135,
            danceability: 0.727,
            energy: 0.939,
            instrumentalness: 0.0,
            liveness: 0.151,
            speechiness: 0.0369,
            valence: 0.916,
        },
        artist_id: ARTIST_ID.to_string(),
    };
    assert_eq!(view, expected);
}

#[test]
fn test_build_track_view_from_isrc_shows_url() {
    let query = TrackQuery::Isrc(ISRC.to_string());
    let view = build_track_view(&query, &create_test_track(), &create_test_features()).unwrap();

    assert_eq!(view.kind, QueryMode::Url);
    assert_eq!(view.value, TRACK_URL);
}

#[test]
fn test_build_track_view_is_idempotent() {
    let query = TrackQuery::Isrc(ISRC.to_string());
    let track = create_test_track();
    let features = create_test_features();

    let first = build_track_view(&query, &track, &features).unwrap();
    let second = build_track_view(&query, &track, &features).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_build_track_view_keeps_only_first_artist() {
    let query = TrackQuery::Url(TRACK_URL.to_string());
    let view = build_track_view(&query, &create_test_track(), &create_test_features()).unwrap();

    assert_eq!(view.artist, "Rick Astley");
    assert_eq!(view.artist_id, ARTIST_ID);
}

#[test]
fn test_build_track_view_copies_numbers_verbatim() {
    let mut features = create_test_features();
    features.key = -1;
    features.tempo = 0.0;
    features.descriptors.energy = 1.0;

    let query = TrackQuery::Url(TRACK_URL.to_string());
    let view = build_track_view(&query, &create_test_track(), &features).unwrap();

    assert_eq!(view.key, -1);
    assert_eq!(view.tempo, 0.0);
    assert_eq!(view.audio_features.energy, 1.0);
}

#[test]
fn test_build_track_view_rejects_missing_artists() {
    let mut track = create_test_track();
    track.artists.clear();

    let query = TrackQuery::Url(TRACK_URL.to_string());
    let result = build_track_view(&query, &track, &create_test_features());

    assert!(matches!(result, Err(Error::MalformedUpstreamData(_))));
}

#[test]
fn test_build_track_view_rejects_missing_cover() {
    let mut track = create_test_track();
    track.album.images.clear();

    let query = TrackQuery::Isrc(ISRC.to_string());
    let result = build_track_view(&query, &track, &create_test_features());

    assert!(matches!(result, Err(Error::MalformedUpstreamData(_))));
}

#[test]
fn test_build_track_view_never_invents_an_isrc() {
    let mut track = create_test_track();
    track.external_ids.isrc = None;

    let from_url = build_track_view(
        &TrackQuery::Url(TRACK_URL.to_string()),
        &track,
        &create_test_features(),
    );
    assert!(matches!(from_url, Err(Error::MalformedUpstreamData(_))));

    // the ISRC is not displayed for ISRC queries, so its absence is fine there
    let from_isrc = build_track_view(
        &TrackQuery::Isrc(ISRC.to_string()),
        &track,
        &create_test_features(),
    );
    assert!(from_isrc.is_ok());
}

#[test]
fn test_build_track_view_rejects_missing_url() {
    let mut track = create_test_track();
    track.external_urls.spotify = Some(String::new());

    let result = build_track_view(
        &TrackQuery::Isrc(ISRC.to_string()),
        &track,
        &create_test_features(),
    );

    assert!(matches!(result, Err(Error::MalformedUpstreamData(_))));
}

#[test]
fn test_build_artist_view() {
    let view = build_artist_view(&create_test_artist());

    assert_eq!(view.name, "Rick Astley");
    assert_eq!(view.genres, vec!["dance pop", "new wave pop"]);
    assert_eq!(view.followers, 1_234_567);
    assert_eq!(view.popularity, 72);
    assert_eq!(view.image_url, "https://i.scdn.co/image/artist");
}

#[test]
fn test_build_artist_view_without_images() {
    let mut artist = create_test_artist();
    artist.images.clear();

    let view = build_artist_view(&artist);

    assert_eq!(view.image_url, "");
}

#[test]
fn test_key_name() {
    assert_eq!(key_name(0), "C");
    assert_eq!(key_name(1), "C♯/D♭");
    assert_eq!(key_name(8), "G♯/A♭");
    assert_eq!(key_name(11), "B");
    assert_eq!(key_name(-1), "No key detected");
    assert_eq!(key_name(12), "No key detected");
}

#[test]
fn test_mode_name() {
    assert_eq!(mode_name(1), "Major");
    assert_eq!(mode_name(0), "Minor");
    assert_eq!(mode_name(-1), "Minor");
}

#[test]
fn test_value_label() {
    assert_eq!(value_label(QueryMode::Isrc), "ISRC");
    assert_eq!(value_label(QueryMode::Url), "Spotify URL");
}

#[test]
fn test_every_descriptor_has_a_description() {
    for (feature, _) in create_test_features().descriptors.entries() {
        assert!(feature_description(feature).is_some(), "{}", feature);
    }
    assert!(feature_description("loudness").is_none());
}

#[test]
fn test_track_view_serializes_like_the_form_expects() {
    let query = TrackQuery::Url(TRACK_URL.to_string());
    let view = build_track_view(&query, &create_test_track(), &create_test_features()).unwrap();

    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["type"], "isrc");
    assert_eq!(json["value"], ISRC);
    assert_eq!(json["coverUrl"], "https://i.scdn.co/image/large");
    assert_eq!(json["timeSignature"], 4);
    assert_eq!(json["artistId"], ARTIST_ID);
    assert_eq!(json["audioFeatures"]["valence"], 0.916);
}
