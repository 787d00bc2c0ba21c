use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinematch_api::config::Config;
use cinematch_api::data::{Catalog, SimilarityMatrix};
use cinematch_api::services::providers::TmdbProvider;
use cinematch_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinematch_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let catalog =
        Catalog::load(&config.catalog_path).context("Failed to load movie catalog")?;
    let similarity = SimilarityMatrix::load(&config.similarity_path, catalog.len())
        .context("Failed to load similarity matrix")?;

    let provider = Arc::new(TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
    ));

    let state = AppState::new(catalog, similarity, provider);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Server running on http://{addr}");
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
