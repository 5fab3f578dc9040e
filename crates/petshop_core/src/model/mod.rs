//! Entity records for people and their pets.
//!
//! # Invariants
//! - Every stored record is identified by a surrogate integer id.
//! - A person references at most one pet; the reference may be absent.

pub mod person;
pub mod pet;
