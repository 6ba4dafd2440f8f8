//! ISRC ⇄ Spotify converter library
//!
//! This library converts between a recording's ISRC and its Spotify track,
//! fetches the track's audio features and, on demand, the primary artist.
//! It backs both the HTTP proxy (`spotisrc serve`) and the command-line
//! lookups.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the proxy endpoints
//! - `cli` - Command-line command implementations
//! - `config` - Configuration from environment variables and `.env` files
//! - `error` - Error taxonomy shared by every layer
//! - `lookup` - Lookup orchestration (resolve, concurrent fetch, artist)
//! - `management` - Token cache and lookup session state
//! - `resolver` - Normalizes user input into a Spotify track id
//! - `server` - Router construction and the listening loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `view` - Display models built from Spotify payloads
//!
//! # Example
//!
//! ```
//! use spotisrc::{config, lookup, spotify::SpotifyCatalog, types::TrackQuery};
//!
//! #[tokio::main]
//! async fn main() -> spotisrc::Res<()> {
//!     config::load_env().await?;
//!     let catalog = SpotifyCatalog::from_env()?;
//!     let query = TrackQuery::Isrc("BRBMG0300729".to_string());
//!     let view = lookup::lookup_view(&catalog, &query).await?;
//!     println!("{}", view.value);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod management;
pub mod resolver;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports one of the [`Error`]
/// variants, so callers can decide between a caller mistake (HTTP 400) and
/// everything else (HTTP 500) without inspecting message text.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only command-line code uses this macro. Request handlers must report
/// failures through their response instead, since this terminates the
/// whole process with exit code 1.
///
/// # Example
///
/// ```
/// error!("Error fetching track information. {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a failed proxy request that was turned
/// into an error response.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
