use thiserror::Error;

/// Everything that can go wrong while resolving, fetching or shaping a lookup.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller sent empty or malformed input.
    #[error("{0}")]
    InvalidInput(String),

    /// The ISRC search returned no tracks.
    #[error("No track found for this ISRC")]
    IsrcNotFound(String),

    /// Spotify answered with a non-success status.
    #[error("Spotify API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// Spotify answered, but without fields we rely on.
    #[error("Malformed Spotify response: {0}")]
    MalformedUpstreamData(String),

    /// An artist lookup was attempted before any track was resolved.
    #[error("No artist information available")]
    NoArtistAvailable,

    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the failure is the caller's fault rather than ours or Spotify's.
    pub fn is_caller_mistake(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Error::Transport(format!("request timed out ({})", err));
        }
        Error::Transport(err.to_string())
    }
}
