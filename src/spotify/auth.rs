use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    Res, config,
    spotify::decode_response,
    types::{Token, TokenResponse},
};

/// Exchanges the application credentials for an access token.
///
/// Implements the OAuth 2.0 client-credentials grant: the client id and
/// secret are read from the environment on every call, sent as HTTP Basic
/// auth, and `grant_type=client_credentials` is posted as a form body to
/// `token_url`.
///
/// # Returns
///
/// - `Ok(Token)` - Access token with its lifetime and the time it was obtained
/// - `Err(Error::MissingCredential)` - Id or secret not configured; no request is sent
/// - `Err(Error::Upstream)` - Spotify rejected the credentials
/// - `Err(Error::MalformedUpstreamData)` - Response without an `access_token`
/// - `Err(Error::Transport)` - Network failure or timeout
///
/// # Example
///
/// ```
/// let token = request_token(&client, &config::spotify_apitoken_url()).await?;
/// println!("Access token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(client: &Client, token_url: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let client_secret = config::spotify_client_secret()?;

    let res = client
        .post(token_url)
        .header("Authorization", basic_auth_header(&client_id, &client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let json: TokenResponse = decode_response(res).await?;

    Ok(Token {
        access_token: json.access_token,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// `Basic base64(id:secret)` as expected by the token endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}
