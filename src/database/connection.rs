use std::time::Duration;

use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::config::settings::DatabaseSettings;
use crate::errors::TournamentResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(&settings.path);
    build_pool(manager, settings.pool_size)
}

/// Pool over a private in-memory database. Every SQLite memory connection is
/// its own database, so the pool is capped at a single connection.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = enable_foreign_keys(SqliteConnectionManager::memory());
    build_pool(manager, 1)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    enable_foreign_keys(SqliteConnectionManager::file(path))
}

// SQLite ships with foreign keys off and the pragma is per connection.
fn enable_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn: &mut Connection| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}

/// Runs `op` inside a single transaction. The transaction is committed only
/// when `op` returns `Ok`; any error (or panic) drops it, which rolls back.
///
/// The write lock is taken at `BEGIN`, so operations that read before they
/// write queue on the busy timeout instead of failing a lock upgrade.
pub fn with_transaction<T, F>(pool: &DbPool, op: F) -> TournamentResult<T>
where
    F: FnOnce(&Transaction) -> TournamentResult<T>,
{
    let mut conn = pool.get()?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let value = op(&tx)?;
    tx.commit()?;
    Ok(value)
}
