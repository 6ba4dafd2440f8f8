use std::sync::Arc;

use crate::{config, error, server, spotify::Catalog, warning};

pub async fn serve() {
    if let Err(e) = config::spotify_client_id().and(config::spotify_client_secret()) {
        warning!("{}. Every lookup will fail until it is configured.", e);
    }

    let catalog: Arc<dyn Catalog> = Arc::new(super::catalog_or_exit());
    if let Err(e) = server::start_api_server(catalog).await {
        error!("Server stopped. Err: {}", e);
    }
}
