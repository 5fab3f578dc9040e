//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQL details from controllers.
//!
//! # Invariants
//! - Every operation runs in its own scoped session (`db::in_transaction`).
//! - "No row" on a single-row read is `Ok(None)`, never an error.
//! - Store failures are returned unchanged after the session rolled back.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod people_repo;
pub mod pets_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for people/pets persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
