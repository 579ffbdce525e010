pub mod config;
pub mod migrate;

use std::sync::Arc;
use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use thiserror::Error;

use crate::db::config::DbConfig;
use crate::db::migrate::MigrationError;

const POOL_SIZE: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Owns the bounded connection pool to the word store. Every query runs on
/// a connection scoped by the pool guard, so the connection returns to the
/// pool on every exit path.
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Builds the pool from the environment. `Ok(None)` means no store is
    /// configured and the caller should serve the embedded seed data.
    pub async fn from_env() -> Result<Option<Arc<Self>>, DbInitError> {
        let Some(config) = DbConfig::from_env() else {
            return Ok(None);
        };

        let db = Self::connect(&config).await?;
        migrate::run_migrations(db.pool()).await?;
        Ok(Some(Arc::new(db)))
    }

    pub async fn connect(config: &DbConfig) -> Result<Self, DbInitError> {
        let options = config.connect_options()?;

        let pool = MySqlPoolOptions::new()
            .max_connections(POOL_SIZE)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[derive(Debug, Error)]
pub enum DbInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] MigrationError),
}
