//! Person finder controller.

use crate::controller::envelope::Envelope;
use crate::controller::{ControllerError, ControllerResult};
use crate::model::person::{PersonId, PersonWithPet};
use crate::repo::people_repo::PeopleRepository;
use log::debug;

const PERSON_KIND: &str = "Person";

/// Finds one person by id.
pub trait PersonFinder {
    /// # Errors
    /// - `ControllerError::NotFound` when no person has `person_id`.
    /// - `ControllerError::Repo` for store failures.
    fn find(&self, person_id: PersonId) -> ControllerResult<Envelope<PersonWithPet>>;
}

/// Person lookup use-case over a people repository.
pub struct PersonFinderController<R: PeopleRepository> {
    repo: R,
}

impl<R: PeopleRepository> PersonFinderController<R> {
    /// Creates a controller using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: PeopleRepository> PersonFinder for PersonFinderController<R> {
    fn find(&self, person_id: PersonId) -> ControllerResult<Envelope<PersonWithPet>> {
        let Some(person) = self.repo.get_person(person_id)? else {
            debug!("event=person_find module=controller status=not_found person_id={person_id}");
            return Err(ControllerError::NotFound(person_id));
        };
        Ok(Envelope::single(PERSON_KIND, person))
    }
}
