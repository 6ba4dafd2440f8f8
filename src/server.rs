use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Error, Res, api, config, info, spotify::Catalog};

/// Routes of the proxy. Non-POST verbs on the lookup endpoints get a 405.
pub fn router(catalog: Arc<dyn Catalog>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/api/spotify",
            post(api::lookup).fallback(api::method_not_allowed),
        )
        .route(
            "/api/spotify/artist",
            post(api::artist).fallback(api::method_not_allowed),
        )
        .layer(Extension(catalog))
}

pub async fn start_api_server(catalog: Arc<dyn Catalog>) -> Res<()> {
    let raw_addr = config::server_addr();
    let addr = SocketAddr::from_str(&raw_addr)
        .map_err(|e| Error::Config(format!("invalid SERVER_ADDRESS '{}': {}", raw_addr, e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(catalog)).await?;
    Ok(())
}
