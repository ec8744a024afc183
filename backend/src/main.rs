//! Backend entry-point: loads settings, selects the store, and serves the
//! community API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, StoreBackend, create_server};
use yourside::inbound::http::health::HealthState;
use yourside::outbound::memory::InMemoryStore;
use yourside::outbound::persistence::{DbPool, run_pending_migrations};

async fn select_store(settings: &ServerSettings) -> std::io::Result<StoreBackend> {
    let seeds = settings.seed_nicknames()?;
    let Some(pool_config) = settings.pool_config() else {
        let store = InMemoryStore::new();
        for nickname in &seeds {
            let user = store
                .add_user(nickname)
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            info!(user_id = %user.id(), nickname = nickname.as_str(), "seeded member");
        }
        warn!("no database configured; data lives in memory only");
        return Ok(StoreBackend::Memory(Arc::new(store)));
    };

    if !seeds.is_empty() {
        warn!(count = seeds.len(), "seed users are ignored when a database is configured");
    }
    if settings.run_migrations {
        run_pending_migrations(pool_config.database_url())
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    }
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(StoreBackend::Postgres(pool))
}

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr()?;
    let store = select_store(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, store))?;
    server.await
}
