//! Person creator controller.
//!
//! # Invariants
//! - Names are validated before the repository is touched.
//! - The envelope echoes the accepted payload as `attributes`.

use crate::controller::envelope::Envelope;
use crate::controller::{ControllerError, ControllerResult};
use crate::model::person::NewPerson;
use crate::repo::people_repo::PeopleRepository;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

const PERSON_KIND: &str = "Person";

static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid person name regex"));

/// Creates one person.
pub trait PersonCreator {
    /// # Errors
    /// - `ControllerError::InvalidName` when a name is rejected.
    /// - `ControllerError::Repo` when the insert failed and was rolled back.
    fn create(&self, person: NewPerson) -> ControllerResult<Envelope<NewPerson>>;
}

/// Person creation use-case over a people repository.
pub struct PersonCreatorController<R: PeopleRepository> {
    repo: R,
}

impl<R: PeopleRepository> PersonCreatorController<R> {
    /// Creates a controller using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: PeopleRepository> PersonCreator for PersonCreatorController<R> {
    fn create(&self, person: NewPerson) -> ControllerResult<Envelope<NewPerson>> {
        validate_name("first_name", &person.first_name)?;
        validate_name("last_name", &person.last_name)?;

        let created = self.repo.insert_person(&person)?;
        info!(
            "event=person_create module=controller status=ok person_id={}",
            created.id
        );
        Ok(Envelope::single(PERSON_KIND, person))
    }
}

fn validate_name(field: &'static str, value: &str) -> ControllerResult<()> {
    if PERSON_NAME_RE.is_match(value) {
        return Ok(());
    }
    warn!("event=person_create module=controller status=rejected field={field}");
    Err(ControllerError::InvalidName {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{PersonCreator, PersonCreatorController};
    use crate::controller::ControllerError;
    use crate::db::DbError;
    use crate::model::person::{NewPerson, Person, PersonId, PersonWithPet};
    use crate::repo::people_repo::PeopleRepository;
    use crate::repo::{RepoError, RepoResult};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPeopleRepository {
        inserted: RefCell<Vec<NewPerson>>,
        fail: bool,
    }

    impl PeopleRepository for RecordingPeopleRepository {
        fn insert_person(&self, person: &NewPerson) -> RepoResult<Person> {
            if self.fail {
                return Err(RepoError::Db(DbError::Sqlite(
                    rusqlite::Error::ExecuteReturnedResults,
                )));
            }
            self.inserted.borrow_mut().push(person.clone());
            Ok(person.clone().into_person(1))
        }

        fn get_person(&self, _person_id: PersonId) -> RepoResult<Option<PersonWithPet>> {
            unreachable!("creator never reads")
        }
    }

    #[test]
    fn create_inserts_once_and_echoes_payload() {
        let controller = PersonCreatorController::new(RecordingPeopleRepository::default());
        let payload = NewPerson::new("Harvey", "Specter", 30, Some(123));

        let response = controller.create(payload.clone()).unwrap();

        assert_eq!(response.kind(), "Person");
        assert_eq!(response.count(), 1);
        assert_eq!(response.attributes(), &payload);
        assert_eq!(controller.repo.inserted.borrow().as_slice(), &[payload]);
    }

    #[test]
    fn create_rejects_non_letter_names_without_touching_repository() {
        let controller = PersonCreatorController::new(RecordingPeopleRepository::default());

        for (first, last, field) in [
            ("Harvey123", "Specter", "first_name"),
            ("Harvey", "Spec ter", "last_name"),
            ("", "Specter", "first_name"),
        ] {
            let err = controller
                .create(NewPerson::new(first, last, 30, None))
                .unwrap_err();
            assert!(
                matches!(err, ControllerError::InvalidName { field: rejected, .. } if rejected == field)
            );
        }
        assert!(controller.repo.inserted.borrow().is_empty());
    }

    #[test]
    fn create_propagates_repository_failure() {
        let controller = PersonCreatorController::new(RecordingPeopleRepository {
            fail: true,
            ..RecordingPeopleRepository::default()
        });

        let err = controller
            .create(NewPerson::new("Mike", "Ross", 25, Some(456)))
            .unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Repo(RepoError::Db(DbError::Sqlite(
                rusqlite::Error::ExecuteReturnedResults
            )))
        ));
    }
}
