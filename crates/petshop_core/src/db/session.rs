//! Scoped store sessions.
//!
//! # Responsibility
//! - Run one repository operation inside one SQLite transaction.
//!
//! # Invariants
//! - A session ends with exactly one commit or exactly one rollback.
//! - Rollback is owned by the `rusqlite::Transaction` drop guard, so it runs
//!   on every failure path, including a failed `COMMIT`.
//! - The error that caused the rollback is returned unchanged.

use log::{debug, warn};
use rusqlite::{Connection, Transaction};
use std::fmt::Display;
use std::time::Instant;

/// Runs `work` in a transaction on `conn`, committing only when it succeeds.
///
/// `operation` is a static label used in log events (`insert_person`, ...).
///
/// # Errors
/// - Any error returned by `work`, after the transaction was rolled back.
/// - The commit error itself, after the transaction was rolled back.
pub fn in_transaction<T, E, F>(conn: &Connection, operation: &'static str, work: F) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<rusqlite::Error> + Display,
{
    let started_at = Instant::now();
    let tx = conn.unchecked_transaction()?;

    let value = match work(&tx) {
        Ok(value) => value,
        Err(err) => {
            drop(tx);
            log_rollback(operation, started_at, "operation_failed", &err);
            return Err(err);
        }
    };

    if let Err(err) = tx.commit() {
        log_rollback(operation, started_at, "commit_failed", &err);
        return Err(err.into());
    }

    debug!(
        "event=db_session module=db status=ok op={operation} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(value)
}

fn log_rollback(operation: &str, started_at: Instant, error_code: &str, err: &dyn Display) {
    warn!(
        "event=db_session module=db status=rolled_back op={operation} duration_ms={} error_code={error_code} error={err}",
        started_at.elapsed().as_millis()
    );
}
