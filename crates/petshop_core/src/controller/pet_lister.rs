//! Pet lister controller.

use crate::controller::envelope::Envelope;
use crate::controller::ControllerResult;
use crate::model::pet::{Pet, PetId};
use crate::repo::pets_repo::PetsRepository;
use serde::{Deserialize, Serialize};

const PETS_KIND: &str = "Pets";

/// Listed projection of a pet: name and id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetAttributes {
    pub name: String,
    pub id: PetId,
}

impl From<Pet> for PetAttributes {
    fn from(pet: Pet) -> Self {
        Self {
            name: pet.name,
            id: pet.id,
        }
    }
}

/// Lists every pet.
pub trait PetLister {
    fn list(&self) -> ControllerResult<Envelope<Vec<PetAttributes>>>;
}

/// Pet listing use-case over a pets repository.
pub struct PetListerController<R: PetsRepository> {
    repo: R,
}

impl<R: PetsRepository> PetListerController<R> {
    /// Creates a controller using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: PetsRepository> PetLister for PetListerController<R> {
    fn list(&self) -> ControllerResult<Envelope<Vec<PetAttributes>>> {
        let pets = self.repo.list_pets()?;
        Ok(Envelope::list(
            PETS_KIND,
            pets.into_iter().map(PetAttributes::from).collect(),
        ))
    }
}
