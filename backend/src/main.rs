//! Shelter API entry-point: loads settings, prepares storage and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shelter::ServerSettings;
use shelter::inbound::http::health::HealthState;
use shelter::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr())
        .with_request_timeout(settings.request_timeout())
        .with_shutdown_grace(settings.shutdown_grace());

    if let Some(url) = settings.database_url() {
        run_pending_migrations(url)
            .await
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        let pool = DbPool::new(
            PoolConfig::new(url).with_max_size(settings.db_max_connections()),
        )
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
        info!(max_connections = settings.db_max_connections(), "database pool ready");
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await?;
    info!("server stopped");
    Ok(())
}
