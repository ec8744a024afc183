//! Server settings loaded via OrthoConfig, and the resolved server
//! configuration built from them.

use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use yourside::domain::NICKNAME_MAX;
use yourside::outbound::memory::InMemoryStore;
use yourside::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Values read from `YOURSIDE_*` environment variables or the command line.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "YOURSIDE")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; the in-memory store is used without one.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
    /// Comma-separated nicknames registered in the in-memory store at startup.
    pub seed_users: Option<String>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Pool configuration when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        Some(PoolConfig::new(url).with_max_size(
            self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
        ))
    }

    /// Nicknames to register in the in-memory store.
    ///
    /// Fails with `InvalidInput` when a nickname exceeds [`NICKNAME_MAX`]
    /// characters.
    pub fn seed_nicknames(&self) -> std::io::Result<Vec<String>> {
        self.seed_users
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|nickname| !nickname.is_empty())
            .map(|nickname| {
                if nickname.chars().count() > NICKNAME_MAX {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("seed nickname {nickname:?} exceeds {NICKNAME_MAX} characters"),
                    ));
                }
                Ok(nickname.to_owned())
            })
            .collect()
    }
}

/// Store backing the repository ports.
#[derive(Clone)]
pub enum StoreBackend {
    Postgres(DbPool),
    Memory(Arc<InMemoryStore>),
}

impl StoreBackend {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreBackend,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: StoreBackend) -> Self {
        Self { bind_addr, store }
    }
}
