//! People repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert people rows with one-phase commit/rollback semantics.
//! - Read one person joined with the referenced pet.
//!
//! # Invariants
//! - `get_person` uses an outer join: a person without a pet is still found.
//! - A failed insert leaves no row behind and returns the store error as-is.

use crate::db::in_transaction;
use crate::model::person::{NewPerson, Person, PersonId, PersonWithPet};
use crate::repo::RepoResult;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};

const PERSON_WITH_PET_SQL: &str = "SELECT
    people.first_name AS first_name,
    people.last_name AS last_name,
    pets.name AS pet_name,
    pets.type AS pet_type
FROM people
LEFT OUTER JOIN pets ON pets.id = people.pet_id
WHERE people.id = ?1;";

/// Repository interface for people persistence.
pub trait PeopleRepository {
    /// Persists one person and returns it with its assigned id.
    fn insert_person(&self, person: &NewPerson) -> RepoResult<Person>;
    /// Finds one person by id, projected with pet name and type.
    ///
    /// Returns `Ok(None)` when no person has this id.
    fn get_person(&self, person_id: PersonId) -> RepoResult<Option<PersonWithPet>>;
}

/// SQLite-backed people repository.
pub struct SqlitePeopleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePeopleRepository<'conn> {
    /// Constructs a repository over a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PeopleRepository for SqlitePeopleRepository<'_> {
    fn insert_person(&self, person: &NewPerson) -> RepoResult<Person> {
        let id = in_transaction(self.conn, "insert_person", |tx| -> RepoResult<PersonId> {
            tx.execute(
                "INSERT INTO people (first_name, last_name, age, pet_id)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    person.first_name.as_str(),
                    person.last_name.as_str(),
                    person.age,
                    person.pet_id,
                ],
            )?;
            Ok(tx.last_insert_rowid())
        })?;

        info!("event=person_insert module=repo status=ok person_id={id}");
        Ok(person.clone().into_person(id))
    }

    fn get_person(&self, person_id: PersonId) -> RepoResult<Option<PersonWithPet>> {
        let found = in_transaction(self.conn, "get_person", |tx| -> RepoResult<Option<PersonWithPet>> {
            let row = tx
                .query_row(PERSON_WITH_PET_SQL, [person_id], |row| {
                    Ok(PersonWithPet {
                        first_name: row.get("first_name")?,
                        last_name: row.get("last_name")?,
                        pet_name: row.get("pet_name")?,
                        pet_type: row.get("pet_type")?,
                    })
                })
                .optional()?;
            Ok(row)
        })?;

        debug!(
            "event=person_get module=repo status=ok person_id={person_id} found={}",
            found.is_some()
        );
        Ok(found)
    }
}
