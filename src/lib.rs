pub mod app;
pub mod modules;
mod schema;
pub mod shared;

use std::future::Future;
use std::sync::Arc;

use app::App;
use modules::movie::{MovieRepositoryImpl, OmdbClient};
use shared::{config::AppConfig, utils::init_logger, Database};

/// Composition root: config, logging, database, wiring, then serve until Ctrl-C
pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logger();

    // Pool creation and migrations block, keep them off the runtime workers
    let db_config = config.clone();
    let db = tokio::task::spawn_blocking(move || -> shared::errors::AppResult<Database> {
        let db = Database::new(&db_config)?;
        db.run_migrations()?;
        Ok(db)
    })
    .await??;
    let db = Arc::new(db);

    let repository = Arc::new(MovieRepositoryImpl::new(Arc::clone(&db)));
    let catalog = Arc::new(OmdbClient::new(
        config.omdb_base_url.clone(),
        config.omdb_api_key.clone(),
    )?);
    let app = Arc::new(App::new(repository, catalog, config.request_timeout));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    log_info!("Listening on http://{}", address);

    axum::serve(listener, app::router(app))
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;

    log_info!("Server stopped");
    Ok(())
}

/// Resolve once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running until the process is killed.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        log_error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log_info!("Shutdown signal received");
}
