//! SQLite database handle backed by an r2d2 connection pool.
//!
//! Every store operation checks a connection out of the pool for the
//! duration of one call; the pooled guard returns it on drop, on every
//! exit path.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use thiserror::Error;

/// A connection checked out of the pool for one operation.
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type DbResult<T> = Result<T, DbError>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `path` and run schema setup.
    pub fn new(path: &str) -> Result<Self, String> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create database directory: {}", e))?;
            }
        }

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder()
            .max_size(8)
            .build(manager)
            .map_err(|e| format!("Failed to build connection pool: {}", e))?;

        let db = Self { pool };
        db.run_migrations()
            .map_err(|e| format!("Failed to run migrations: {}", e))?;

        Ok(db)
    }

    /// Check a connection out of the pool. Returned to the pool when the
    /// guard drops.
    pub(crate) fn conn(&self) -> Result<DbConn, r2d2::Error> {
        self.pool.get()
    }

    fn run_migrations(&self) -> DbResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                text TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}
