//! Configuration management for spotisrc.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials are read on demand
//! for every token exchange, the rest falls back to sensible defaults.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{Error, Res};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// Creates the platform-specific local data directory if it doesn't exist
/// and loads `spotisrc/.env` from there, then a `.env` in the working
/// directory. Variables already present in the environment are never
/// overwritten, and missing files are skipped silently.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotisrc/.env`
/// - macOS: `~/Library/Application Support/spotisrc/.env`
/// - Windows: `%LOCALAPPDATA%/spotisrc/.env`
///
/// # Errors
///
/// Returns [`Error::Io`] if the data directory cannot be created.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotisrc/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    dotenv::dotenv().ok();
    Ok(())
}

/// Returns the address the proxy server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify client id used for the client-credentials exchange.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] when `SPOTIFY_CLIENT_ID` is unset
/// or empty, so the token exchange never runs with a blank credential.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify client secret used for the client-credentials exchange.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] when `SPOTIFY_CLIENT_SECRET` is
/// unset or empty.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Res<String> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the deadline applied to every outbound request.
///
/// Reads `SPOTIFY_API_TIMEOUT_SECS`, defaulting to 10 seconds.
///
/// # Errors
///
/// Returns [`Error::Config`] when the value is not a positive integer.
pub fn request_timeout() -> Res<Duration> {
    match env::var("SPOTIFY_API_TIMEOUT_SECS") {
        Ok(raw) => parse_timeout(&raw),
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

/// Parses a timeout given in whole seconds.
pub fn parse_timeout(raw: &str) -> Res<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Config(format!(
            "SPOTIFY_API_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

fn required(name: &'static str) -> Res<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingCredential(name)),
    }
}
