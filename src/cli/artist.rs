use tabled::Table;

use crate::{
    error, lookup,
    types::{ArtistView, DetailTableRow},
    utils, view,
};

/// Prints an artist by Spotify id.
pub async fn artist(artist_id: String) {
    let catalog = super::catalog_or_exit();

    let pb = super::spinner("Fetching artist information...");
    let result = lookup::fetch_artist(&catalog, &artist_id).await;
    pb.finish_and_clear();

    match result {
        Ok(record) => print_artist(&view::build_artist_view(&record)),
        Err(e) => error!("Error fetching artist information. {}", e),
    }
}

pub(super) fn print_artist(artist: &ArtistView) {
    let mut rows = vec![
        DetailTableRow {
            field: "Artist".to_string(),
            value: artist.name.clone(),
        },
        DetailTableRow {
            field: "Followers".to_string(),
            value: utils::format_thousands(artist.followers),
        },
        DetailTableRow {
            field: "Popularity".to_string(),
            value: format!("{}/100", artist.popularity),
        },
        DetailTableRow {
            field: "Genres".to_string(),
            value: artist.genres.join(", "),
        },
    ];

    if !artist.image_url.is_empty() {
        rows.push(DetailTableRow {
            field: "Image".to_string(),
            value: artist.image_url.clone(),
        });
    }

    println!("{}", Table::new(rows));
}
