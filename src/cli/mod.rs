//! # CLI Module
//!
//! Command implementations behind the `spotisrc` binary. The commands are
//! the presentation layer of the converter: they resolve input, show a
//! spinner while Spotify is queried, and print the results as tables.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP proxy
//! - [`lookup`] - Converts a track URL to its ISRC (or an ISRC to its URL)
//!   and prints the audio features, optionally followed by the artist
//! - [`artist`] - Prints an artist by Spotify id
//!
//! ## Error Handling
//!
//! Every failure ends the command with a single error line and exit code 1.
//! There are no retries; run the command again.

mod artist;
mod lookup;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, spotify::SpotifyCatalog};

pub use artist::artist;
pub use lookup::lookup;
pub use serve::serve;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn catalog_or_exit() -> SpotifyCatalog {
    match SpotifyCatalog::from_env() {
        Ok(catalog) => catalog,
        Err(e) => error!("Cannot set up the Spotify client. Err: {}", e),
    }
}
