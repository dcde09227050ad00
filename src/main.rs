use std::sync::Arc;

use sticky_notes::{
    config::{self, StorageConfig},
    repository::{MemoryRepository, NoteStore, PostgresRepository},
    router,
    service::NoteService,
};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded sticky notes config");

    // Repository creation and migration
    let store: Arc<dyn NoteStore> = match cfg.storage {
        StorageConfig::Postgres { dsn } => {
            let mut repo = PostgresRepository::new(&dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            repo.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            Arc::new(repo)
        }
        StorageConfig::Memory => {
            tracing::info!("Using in-memory note storage");
            Arc::new(MemoryRepository::new())
        }
    };

    // Service creation
    let service = Arc::new(NoteService::new(store));

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {}: {e}", cfg.listen_addr);
            panic!("failed to bind to {}: {e}", cfg.listen_addr);
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Sticky notes server starting, listening on {}", addr),
        Err(e) => tracing::warn!("Listening on unknown address: {e}"),
    }

    if let Err(e) = axum::serve(listener, router(service)).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
