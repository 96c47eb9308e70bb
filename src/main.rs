// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booktrack::application::AppState;
use booktrack::config::Config;
use booktrack::integrations::{CatalogClient, OpenLibraryClient};
use booktrack::repositories::{BookRepository, JsonFileBookRepository};
use booktrack::routes::create_router;
use booktrack::services::{BookService, StatisticsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booktrack=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1. CONFIGURATION
    let config = Config::from_env().context("failed to read configuration")?;

    // 2. REPOSITORIES
    let repo: Arc<dyn BookRepository> =
        Arc::new(JsonFileBookRepository::new(config.data_file.clone()));

    // 3. SERVICES & INTEGRATIONS
    let book_service = Arc::new(BookService::new(repo.clone()));
    let statistics_service = Arc::new(StatisticsService::new(repo));
    let catalog: Arc<dyn CatalogClient> = Arc::new(
        OpenLibraryClient::new(config.catalog_base_url.clone())
            .context("failed to build catalog client")?,
    );

    // 4. APPLICATION STATE & ROUTER
    let state = AppState::new(book_service, statistics_service, catalog);
    let app = create_router(state);

    // 5. SERVE
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, data_file = %config.data_file.display(), "Personal Book Tracker API ready");
    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;

    Ok(())
}
