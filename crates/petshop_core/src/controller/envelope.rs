//! Uniform response envelope: `{ data: { type, count, attributes } }`.
//!
//! # Invariants
//! - `count` always equals the number of records in `attributes`.
//! - Fields are private; `single` and `list` are the only constructors and
//!   both compute `count`.
//! - `single` only accepts `SingleRecord` payloads, so a sequence cannot be
//!   wrapped with `count: 1`.

use crate::model::person::{NewPerson, PersonWithPet};
use serde::Serialize;

/// Payloads that are exactly one record.
///
/// Sequences do not implement this; wrap them with `Envelope::list`.
pub trait SingleRecord {}

impl SingleRecord for NewPerson {}
impl SingleRecord for PersonWithPet {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    data: EnvelopeData<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeData<T> {
    /// Resource label, e.g. `Person` or `Pets`.
    #[serde(rename = "type")]
    kind: String,
    count: usize,
    attributes: T,
}

impl<T: SingleRecord> Envelope<T> {
    /// Wraps one record.
    pub fn single(kind: impl Into<String>, attributes: T) -> Self {
        Self {
            data: EnvelopeData {
                kind: kind.into(),
                count: 1,
                attributes,
            },
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Wraps a sequence of records; `count` is the sequence length.
    pub fn list(kind: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            data: EnvelopeData {
                kind: kind.into(),
                count: items.len(),
                attributes: items,
            },
        }
    }
}

impl<T> Envelope<T> {
    pub fn kind(&self) -> &str {
        &self.data.kind
    }

    pub fn count(&self) -> usize {
        self.data.count
    }

    pub fn attributes(&self) -> &T {
        &self.data.attributes
    }
}
