//! Pet deleter controller.

use crate::controller::ControllerResult;
use crate::repo::pets_repo::PetsRepository;
use log::debug;

/// Deletes pets by name.
pub trait PetDeleter {
    /// Deleting a name with no matching pet succeeds.
    fn delete(&self, name: &str) -> ControllerResult<()>;
}

/// Pet deletion use-case over a pets repository.
pub struct PetDeleterController<R: PetsRepository> {
    repo: R,
}

impl<R: PetsRepository> PetDeleterController<R> {
    /// Creates a controller using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: PetsRepository> PetDeleter for PetDeleterController<R> {
    fn delete(&self, name: &str) -> ControllerResult<()> {
        let deleted = self.repo.delete_pets(name)?;
        debug!("event=pet_delete module=controller status=ok deleted={deleted}");
        Ok(())
    }
}
