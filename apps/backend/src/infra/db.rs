//! Database connection bootstrap.
//!
//! The pool is built once at startup and handed to `AppState`; nothing in
//! the application reaches for an ambient global connection. A failed
//! bootstrap is fatal to the process.

use std::future::Future;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, is_memory_sqlite, is_sqlite, DbProfile};
use crate::error::AppError;

const POSTGRES_CONNECT_ATTEMPTS: u32 = 5;
const POSTGRES_CONNECT_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the result of the last attempt after all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        AppError::config("connection retry exhausted without a recorded error")
    }))
}

/// Open a connection pool for the given profile without touching the schema.
///
/// SQLite in-memory pools are pinned to a single connection: every pooled
/// connection would otherwise get its own private database.
pub async fn open_connection(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opt = ConnectOptions::new(&url);
    if is_memory_sqlite(&url) {
        opt.min_connections(1).max_connections(1);
    } else {
        opt.min_connections(1).max_connections(10);
    }
    opt.acquire_timeout(Duration::from_secs(2)).sqlx_logging(false);

    // Retry on startup for Postgres only; SQLite connections are local
    // and fail fast.
    let db = if is_sqlite(&url) {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to connect to database: {e}")))?
    } else {
        retry_connection(
            || {
                let opt_clone = opt.clone();
                async move {
                    Database::connect(opt_clone)
                        .await
                        .map_err(|e| AppError::config(format!("failed to connect to Postgres: {e}")))
                }
            },
            POSTGRES_CONNECT_ATTEMPTS,
            POSTGRES_CONNECT_INTERVAL_MS,
        )
        .await?
    };

    Ok(db)
}

/// Build the app connection *and* guarantee the schema is current.
///
/// This is the single entrypoint used by `StateBuilder`: connect (with
/// retries for Postgres), then run pending migrations on the same pool.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    info!("bootstrap=start profile={:?} pid={}", profile, std::process::id());

    let db = open_connection(profile).await?;

    migration::migrate(&db, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("failed to run migrations: {e}")))?;

    info!("bootstrap=ready");
    Ok(db)
}
