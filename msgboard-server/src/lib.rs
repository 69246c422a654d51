//! msgboard-server: HTTP surface and PostgreSQL storage for the message board
//!
//! Exposes the `msgboard-core` service over `/messages` and provides the
//! sqlx-backed [`db::PgMessageStore`].

pub mod db;
pub mod error;
pub mod http;

use std::sync::Arc;

use msgboard_core::{InMemoryMessageStore, MessageStore};

pub use error::{ServerError, ServerResult};
pub use http::{build_router, run_server, AppState, ServerConfig};

/// Where messages are persisted
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// PostgreSQL at `url`, with a bounded pool
    Postgres { url: String, max_connections: u32 },
    /// Process memory; contents vanish on exit
    InMemory,
}

/// Open the configured store, running migrations for PostgreSQL.
pub async fn open_store(backend: &StoreBackend) -> ServerResult<Arc<dyn MessageStore>> {
    match backend {
        StoreBackend::Postgres {
            url,
            max_connections,
        } => {
            let pool = db::create_pool_with_options(url, *max_connections).await?;
            db::migrations::run(&pool).await?;
            Ok(Arc::new(db::PgMessageStore::new(pool)))
        }
        StoreBackend::InMemory => {
            tracing::warn!("Using in-memory store - messages are lost on shutdown");
            Ok(Arc::new(InMemoryMessageStore::new()))
        }
    }
}

/// Open the store and serve until shutdown.
pub async fn serve(backend: StoreBackend, config: ServerConfig) -> ServerResult<()> {
    let store = open_store(&backend).await?;
    run_server(store, config).await
}
