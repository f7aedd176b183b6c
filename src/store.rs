use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::db;
use crate::error::PersistenceError;
use crate::models::NewContact;

/// Gateway to wherever contact submissions are kept.
///
/// Implementations must be safe to share between concurrent requests. A
/// request checks out its own writer and drops it when done, which hands the
/// underlying connection back.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Reserve a connection for one request. Fails when the store is down.
    async fn checkout(&self) -> Result<Box<dyn ContactWriter>, PersistenceError>;

    /// Cheap round trip used by the readiness check.
    async fn ping(&self) -> Result<(), PersistenceError>;
}

/// A checked-out connection, scoped to one request.
#[async_trait]
pub trait ContactWriter: Send {
    /// Persist one submission and return the id the store assigned to it.
    /// A failed insert is reported as-is, never retried.
    async fn insert(&mut self, contact: &NewContact) -> Result<Uuid, PersistenceError>;
}

pub struct PgContactStore {
    pool: PgPool,
    table: String,
    timeout: Duration,
}

impl PgContactStore {
    pub fn new(pool: PgPool, table: impl Into<String>, timeout: Duration) -> Self {
        Self {
            pool,
            table: table.into(),
            timeout,
        }
    }

    pub async fn ensure_table(&self) -> Result<(), PersistenceError> {
        bounded(
            self.timeout,
            db::contacts::ensure_table(&self.pool, &self.table),
        )
        .await
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn checkout(&self) -> Result<Box<dyn ContactWriter>, PersistenceError> {
        let conn = bounded(self.timeout, self.pool.acquire()).await?;
        Ok(Box::new(PgContactWriter {
            conn,
            table: self.table.clone(),
            timeout: self.timeout,
        }))
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        bounded(self.timeout, db::contacts::ping(&self.pool)).await
    }
}

pub struct PgContactWriter {
    conn: PoolConnection<Postgres>,
    table: String,
    timeout: Duration,
}

#[async_trait]
impl ContactWriter for PgContactWriter {
    async fn insert(&mut self, contact: &NewContact) -> Result<Uuid, PersistenceError> {
        let created_at = Utc::now();
        let stored = bounded(
            self.timeout,
            db::contacts::insert(&mut *self.conn, &self.table, contact, created_at),
        )
        .await?;
        tracing::debug!("Contact {} written at {}", stored.id, stored.created_at);
        Ok(stored.id)
    }
}

async fn bounded<T>(
    timeout: Duration,
    fut: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, PersistenceError> {
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(PersistenceError::from),
        Err(_) => Err(PersistenceError::Timeout(timeout)),
    }
}
