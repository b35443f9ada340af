//! Backend entry-point: loads settings, prepares the recipe store, and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recipe_backend::inbound::http::health::HealthState;
use recipe_backend::outbound::persistence::{
    DbPool, PoolConfig, redact_url, run_pending_migrations,
};
use recipe_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            interrupted = tokio::signal::ctrl_c() => interrupted,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Fail the health checks as soon as actix starts its graceful shutdown.
async fn drain_on_shutdown(health_state: web::Data<HealthState>) {
    match shutdown_signal().await {
        Ok(()) => {
            info!("shutdown signal received, draining");
            health_state.mark_draining();
        }
        Err(error) => warn!(%error, "cannot listen for shutdown signals"),
    }
}

async fn connect_store(settings: &AppSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations() {
        info!(database_url = %redact_url(url), "applying pending migrations");
        run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
    }
    let config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
    DbPool::new(config).await.map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect_store(&settings, url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_shutdown(health_state));
    info!(%bind_addr, "recipe server listening");
    server.await
}
