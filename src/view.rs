//! Display models built from Spotify payloads.
//!
//! [`build_track_view`] merges a track and its audio features into the
//! record the presentation layer shows, [`build_artist_view`] does the same
//! for artists. Both are pure. The remaining helpers own the display
//! semantics of the raw numbers (pitch class names, modality, what each
//! descriptor means).

use crate::{
    Error, Res,
    types::{
        ArtistRecord, ArtistView, AudioFeatures, QueryMode, TrackQuery, TrackRecord, TrackView,
    },
};

/// Pitch class names indexed by Spotify's `key` field.
pub const KEY_NAMES: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E", "F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

pub const NO_KEY: &str = "No key detected";

/// Builds the view for a finished lookup.
///
/// The displayed value is the representation the user did not type: the
/// ISRC for URL queries, the Spotify URL for ISRC queries. Only the first
/// artist is kept. Numbers are copied as Spotify reports them.
///
/// # Errors
///
/// [`Error::MalformedUpstreamData`] when the track has no artists, no album
/// images, or lacks the identifier that would be displayed. Nothing is
/// substituted for missing data.
pub fn build_track_view(
    query: &TrackQuery,
    track: &TrackRecord,
    features: &AudioFeatures,
) -> Res<TrackView> {
    let artist = track
        .artists
        .first()
        .ok_or_else(|| malformed("track has no artists"))?;

    let cover = track
        .album
        .images
        .first()
        .ok_or_else(|| malformed("album has no images"))?;

    let kind = query.mode().opposite();
    let value = match kind {
        QueryMode::Isrc => track.external_ids.isrc.as_deref(),
        QueryMode::Url => track.external_urls.spotify.as_deref(),
    }
    .filter(|v| !v.trim().is_empty())
    .ok_or_else(|| match kind {
        QueryMode::Isrc => malformed("track has no ISRC"),
        QueryMode::Url => malformed("track has no Spotify URL"),
    })?;

    Ok(TrackView {
        kind,
        value: value.to_string(),
        artist: artist.name.clone(),
        song: track.name.clone(),
        cover_url: cover.url.clone(),
        tempo: features.tempo,
        time_signature: features.time_signature,
        mode: features.mode,
        key: features.key,
        audio_features: features.descriptors.clone(),
        artist_id: artist.id.clone(),
    })
}

/// Builds the artist view; a missing image becomes an empty URL.
pub fn build_artist_view(artist: &ArtistRecord) -> ArtistView {
    ArtistView {
        name: artist.name.clone(),
        genres: artist.genres.clone(),
        followers: artist.followers.total,
        popularity: artist.popularity,
        image_url: artist
            .images
            .first()
            .map(|img| img.url.clone())
            .unwrap_or_default(),
    }
}

pub fn key_name(key: i32) -> &'static str {
    usize::try_from(key)
        .ok()
        .and_then(|k| KEY_NAMES.get(k))
        .copied()
        .unwrap_or(NO_KEY)
}

pub fn mode_name(mode: i32) -> &'static str {
    if mode == 1 { "Major" } else { "Minor" }
}

pub fn value_label(kind: QueryMode) -> &'static str {
    match kind {
        QueryMode::Isrc => "ISRC",
        QueryMode::Url => "Spotify URL",
    }
}

pub fn feature_description(feature: &str) -> Option<&'static str> {
    let description = match feature {
        "acousticness" => {
            "A confidence measure from 0.0 to 1.0 of whether the track is acoustic. 1.0 represents high confidence the track is acoustic."
        }
        "danceability" => {
            "Describes how suitable a track is for dancing based on a combination of musical elements including tempo, rhythm stability, beat strength, and overall regularity. A value of 0.0 is least danceable and 1.0 is most danceable."
        }
        "energy" => {
            "Represents a perceptual measure of intensity and activity. Typically, energetic tracks feel fast, loud, and noisy. For example, death metal has high energy, while a Bach prelude scores low on the scale."
        }
        "instrumentalness" => {
            "Predicts whether a track contains no vocals. The closer the instrumentalness value is to 1.0, the greater likelihood the track contains no vocal content."
        }
        "liveness" => {
            "Detects the presence of an audience in the recording. Higher liveness values represent an increased probability that the track was performed live. A value above 0.8 provides strong likelihood that the track is live."
        }
        "speechiness" => {
            "Detects the presence of spoken words in a track. Values above 0.66 describe tracks that are probably made entirely of spoken words. Values between 0.33 and 0.66 may contain both music and speech. Values below 0.33 most likely represent music and other non-speech-like tracks."
        }
        "valence" => {
            "Describes the musical positiveness conveyed by a track. Tracks with high valence sound more positive (e.g. happy, cheerful, euphoric), while tracks with low valence sound more negative (e.g. sad, depressed, angry)."
        }
        _ => return None,
    };
    Some(description)
}

fn malformed(what: &str) -> Error {
    Error::MalformedUpstreamData(what.to_string())
}
