//! Person entity record and its read/write projections.
//!
//! # Invariants
//! - `NewPerson` carries no id; the store assigns one on insert.
//! - `PersonWithPet` keeps pet fields optional so an owner without a pet is
//!   still representable.

use crate::model::pet::PetId;
use serde::{Deserialize, Serialize};

/// Surrogate key of a `people` row.
pub type PersonId = i64;

/// One row of the `people` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub pet_id: Option<PetId>,
}

/// Insert payload for a person.
///
/// Also the request body accepted by the person creator view, and echoed back
/// as envelope attributes after a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default)]
    pub pet_id: Option<PetId>,
}

impl NewPerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
        pet_id: Option<PetId>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            pet_id,
        }
    }

    /// Attaches the store-assigned id.
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            pet_id: self.pet_id,
        }
    }
}

/// Person projection joined with the referenced pet.
///
/// `pet_name` and `pet_type` are `None` when the person has no pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonWithPet {
    pub first_name: String,
    pub last_name: String,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
}
