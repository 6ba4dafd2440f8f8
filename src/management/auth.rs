use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{Res, spotify, types::Token};

/// Caches the client-credentials token until shortly before it expires.
///
/// Every catalog call asks for a token; only the first call after expiry
/// pays for a round trip to the token endpoint.
pub struct TokenManager {
    client: Client,
    token_url: String,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(client: Client, token_url: impl Into<String>) -> Self {
        TokenManager {
            client,
            token_url: token_url.into(),
            token: Mutex::new(None),
        }
    }

    /// Starts from an already obtained token.
    pub fn with_token(client: Client, token_url: impl Into<String>, token: Token) -> Self {
        TokenManager {
            client,
            token_url: token_url.into(),
            token: Mutex::new(Some(token)),
        }
    }

    pub async fn get_valid_token(&self) -> Res<String> {
        let mut cached = self.token.lock().await;
        let now = Utc::now().timestamp() as u64;

        if let Some(token) = cached.as_ref().filter(|t| !t.is_expired_at(now)) {
            return Ok(token.access_token.clone());
        }

        let fresh = spotify::auth::request_token(&self.client, &self.token_url).await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    pub async fn invalidate(&self) {
        *self.token.lock().await = None;
    }
}
