use tabled::Table;

use crate::{
    error, lookup,
    management::LookupSession,
    types::{
        DetailTableRow, FeatureDescriptionRow, FeatureTableRow, QueryMode, TrackQuery, TrackView,
    },
    utils, view,
};

const BAR_WIDTH: usize = 20;

/// Looks up one track and prints its view.
///
/// # Arguments
///
/// * `input` - Spotify track URL or ISRC, depending on `mode`
/// * `mode` - What `input` is
/// * `with_artist` - Follow up with the primary artist's details
/// * `explain` - Print what each audio descriptor means
///
/// # Example Usage
///
/// ```bash
/// spotisrc lookup https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT
/// spotisrc lookup BRBMG0300729 --mode isrc --artist
/// ```
pub async fn lookup(input: String, mode: QueryMode, with_artist: bool, explain: bool) {
    let catalog = super::catalog_or_exit();
    let query = TrackQuery::new(mode, input);
    let mut session = LookupSession::new();
    let ticket = session.begin();

    let pb = super::spinner("Fetching track information...");
    let result = lookup::lookup_view(&catalog, &query).await;
    pb.finish_and_clear();

    match result {
        Ok(view) => {
            session.complete(ticket, view);
        }
        Err(e) => {
            if session.fail(ticket) {
                error!("Error fetching track information. {}", e);
            }
            return;
        }
    }

    if let Some(view) = session.view() {
        print_track(view, explain);
    }

    if !with_artist {
        return;
    }

    let pb = super::spinner("Fetching artist information...");
    let result = session.fetch_artist(&catalog).await;
    pb.finish_and_clear();

    match result {
        Ok(artist) => super::artist::print_artist(artist),
        Err(e) => error!("Error fetching artist information. {}", e),
    }
}

fn print_track(track: &TrackView, explain: bool) {
    let details = vec![
        row("Song", &track.song),
        row("Artist", &track.artist),
        row(view::value_label(track.kind), &track.value),
        row("Tempo", &format!("{:.1} BPM", track.tempo)),
        row("Time Signature", &format!("{}/4", track.time_signature)),
        row("Mode", view::mode_name(track.mode)),
        row("Key", view::key_name(track.key)),
        row("Cover", &track.cover_url),
    ];
    println!("{}", Table::new(details));

    let features: Vec<FeatureTableRow> = track
        .audio_features
        .entries()
        .into_iter()
        .map(|(feature, value)| FeatureTableRow {
            feature: feature.to_string(),
            value: format!("{:.3}", value),
            level: utils::feature_bar(value, BAR_WIDTH),
        })
        .collect();
    println!("{}", Table::new(features));

    if explain {
        let descriptions: Vec<FeatureDescriptionRow> = track
            .audio_features
            .entries()
            .into_iter()
            .map(|(feature, _)| FeatureDescriptionRow {
                feature: feature.to_string(),
                description: view::feature_description(feature)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();
        println!("{}", Table::new(descriptions));
    }
}

fn row(field: &str, value: &str) -> DetailTableRow {
    DetailTableRow {
        field: field.to_string(),
        value: value.to_string(),
    }
}
