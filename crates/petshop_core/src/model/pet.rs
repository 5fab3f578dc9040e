//! Pet entity record.

use serde::{Deserialize, Serialize};

/// Surrogate key of a `pets` row.
pub type PetId = i64;

/// One row of the `pets` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Species label, serialized as `type` to match the store column.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Pet {
    pub fn new(id: PetId, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
        }
    }
}
