//! Pets repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_pets` returns rows in store order (ascending id).
//! - `delete_pets` removes every pet with the exact given name; no match is
//!   not an error.

use crate::db::in_transaction;
use crate::model::pet::Pet;
use crate::repo::RepoResult;
use log::{debug, info};
use rusqlite::Connection;

/// Repository interface for pets persistence.
pub trait PetsRepository {
    /// Lists all pets in store order.
    fn list_pets(&self) -> RepoResult<Vec<Pet>>;
    /// Deletes all pets named `name` and returns how many rows went away.
    fn delete_pets(&self, name: &str) -> RepoResult<usize>;
}

/// SQLite-backed pets repository.
pub struct SqlitePetsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetsRepository<'conn> {
    /// Constructs a repository over a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PetsRepository for SqlitePetsRepository<'_> {
    fn list_pets(&self) -> RepoResult<Vec<Pet>> {
        let pets = in_transaction(self.conn, "list_pets", |tx| -> RepoResult<Vec<Pet>> {
            let mut stmt = tx.prepare("SELECT id, name, type FROM pets ORDER BY id ASC;")?;
            let mut rows = stmt.query([])?;
            let mut pets = Vec::new();
            while let Some(row) = rows.next()? {
                pets.push(Pet {
                    id: row.get("id")?,
                    name: row.get("name")?,
                    kind: row.get("type")?,
                });
            }
            Ok(pets)
        })?;

        debug!("event=pets_list module=repo status=ok count={}", pets.len());
        Ok(pets)
    }

    fn delete_pets(&self, name: &str) -> RepoResult<usize> {
        let deleted = in_transaction(self.conn, "delete_pets", |tx| -> RepoResult<usize> {
            Ok(tx.execute("DELETE FROM pets WHERE name = ?1;", [name])?)
        })?;

        info!("event=pets_delete module=repo status=ok deleted={deleted}");
        Ok(deleted)
    }
}
