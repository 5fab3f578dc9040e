//! Controllers: one repository call in, one response envelope out.
//!
//! # Responsibility
//! - Depend on repository traits, never on a concrete store.
//! - Wrap repository results into `Envelope`s.
//!
//! # Invariants
//! - Each controller operation performs exactly one repository call, or none
//!   when its input is rejected up front.
//! - Repository errors are wrapped as `ControllerError::Repo` without change.

use crate::model::person::PersonId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod envelope;
pub mod person_creator;
pub mod person_finder;
pub mod pet_deleter;
pub mod pet_lister;

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors surfaced by controller operations.
#[derive(Debug)]
pub enum ControllerError {
    /// No person has the requested id.
    NotFound(PersonId),
    /// A person name contains characters other than ASCII letters, or is empty.
    InvalidName { field: &'static str, value: String },
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::InvalidName { field, value } => {
                write!(f, "invalid {field} `{value}`: only letters are allowed")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) | Self::InvalidName { .. } => None,
        }
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
