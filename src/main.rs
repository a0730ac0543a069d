use invite_registry::core::{AppState, Config, StoreBackend};
use invite_registry::create_router;
use invite_registry::repositories::{InviteStore, MemoryInviteStore, MySqlInviteStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.print_info();

    // Lo store viene costruito una volta sola e iniettato nello stato
    let store: Arc<dyn InviteStore> = match config.store_backend {
        StoreBackend::MySql => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or("DATABASE_URL must be set in .env file")?;
            let store = MySqlInviteStore::connect(
                database_url,
                config.max_connections,
                config.connection_lifetime(),
            )
            .await
            .inspect_err(|e| error!("Failed to initialise MySQL store: {}", e))?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory invite store: data is lost on shutdown");
            Arc::new(MemoryInviteStore::new())
        }
    };

    if !config.public_dir.is_dir() {
        warn!(
            "Public dir {} not found, static assets will not be served",
            config.public_dir.display()
        );
    }

    let state = Arc::new(AppState::from_config(store, &config));
    let app = create_router(state).layer(config.cors_layer());

    let listener = TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
