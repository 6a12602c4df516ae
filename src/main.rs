//! Arcana server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use arcana::api::{create_server_router, AppState};
use arcana::catalog::Catalog;
use arcana::config::{AppConfig, LogFormat};
use arcana::interpret::Interpreter;
use arcana::reading::ReadingService;
use arcana::storage::{LocalStorage, ReadingStore, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let catalog = Arc::new(Catalog::golden_dawn().context("failed to load the card catalog")?);
    tracing::info!(
        deck = catalog.deck_name(),
        cards = catalog.len(),
        spreads = catalog.list_spreads().len(),
        "Catalog loaded"
    );

    let backend: Arc<dyn StorageBackend> = Arc::new(
        LocalStorage::new(&config.readings.path)
            .with_context(|| format!("failed to prepare {}", config.readings.path))?,
    );
    let store = ReadingStore::new(backend);

    let interpreter = Interpreter::from_config(&config.interpretation);
    tracing::info!(
        strategy = interpreter.strategy_name(),
        timeout_secs = interpreter.timeout().as_secs(),
        ai_model_url = %config.interpretation.ai_model_url,
        vector_db_url = %config.interpretation.vector_db_url,
        "Interpretation configured"
    );

    let service = Arc::new(ReadingService::new(
        catalog,
        interpreter,
        store,
        config.readings.id_scheme,
    ));

    let router = create_server_router(AppState::new(service), &config.server);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, readings = %config.readings.path, "Listening for HTTP traffic");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("arcana=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
