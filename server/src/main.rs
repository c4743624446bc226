//! lang-portal HTTP server.
//!
//! Configuration comes from the environment (a `.env` file is honoured); see `AppConfig`.

use lang_portal::{app, apply_migrations, init_tracing, seed_if_empty, AppConfig, AppState, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    let store = Store::from_config(&config).await?;
    let applied = apply_migrations(store.pool()).await?;
    tracing::info!(applied, "migrations up to date");
    if config.seed_on_startup {
        seed_if_empty(store.pool()).await?;
    }

    let router = app(AppState::new(store.clone()), &config)?;
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("lang-portal listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.pool().close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
