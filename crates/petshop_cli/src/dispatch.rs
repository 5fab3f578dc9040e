//! Routes commands to views and maps view errors to HTTP statuses.
//!
//! # Invariants
//! - Exactly one view handles each command.
//! - Error-to-status mapping lives here only; views never produce error
//!   statuses themselves.

use crate::cli::Command;
use log::error;
use petshop_core::{
    ControllerError, HttpRequest, HttpResponse, PersonCreatorController, PersonCreatorView,
    PersonFinderController, PersonFinderView, PetDeleterController, PetDeleterView,
    PetListerController, PetListerView, SqlitePeopleRepository, SqlitePetsRepository, ViewError,
    ViewResult,
};
use rusqlite::Connection;
use serde_json::json;

/// Handles one command and always yields a response.
pub fn dispatch(conn: &Connection, command: Command) -> HttpResponse {
    match route(conn, command) {
        Ok(response) => response,
        Err(err) => error_response(&err),
    }
}

fn route(conn: &Connection, command: Command) -> ViewResult<HttpResponse> {
    match command {
        Command::FindPerson { person_id } => {
            let people = SqlitePeopleRepository::new(conn);
            PersonFinderView::new(PersonFinderController::new(people))
                .handle(&HttpRequest::new().with_param("person_id", person_id))
        }
        Command::CreatePerson {
            first_name,
            last_name,
            age,
            pet_id,
        } => {
            let people = SqlitePeopleRepository::new(conn);
            let body = json!({
                "first_name": first_name,
                "last_name": last_name,
                "age": age,
                "pet_id": pet_id,
            });
            PersonCreatorView::new(PersonCreatorController::new(people))
                .handle(&HttpRequest::new().with_body(body))
        }
        Command::ListPets => {
            let pets = SqlitePetsRepository::new(conn);
            PetListerView::new(PetListerController::new(pets)).handle(&HttpRequest::new())
        }
        Command::DeletePet { name } => {
            let pets = SqlitePetsRepository::new(conn);
            PetDeleterView::new(PetDeleterController::new(pets))
                .handle(&HttpRequest::new().with_param("name", name))
        }
    }
}

/// Maps a view failure to an error status with a JSON error body.
pub fn error_response(err: &ViewError) -> HttpResponse {
    let (status_code, title) = match err {
        ViewError::MissingParam(_)
        | ViewError::InvalidParam { .. }
        | ViewError::MissingBody
        | ViewError::InvalidBody(_) => (400, "BadRequest"),
        ViewError::Controller(ControllerError::NotFound(_)) => (404, "NotFound"),
        ViewError::Controller(ControllerError::InvalidName { .. }) => (422, "UnprocessableEntity"),
        ViewError::Controller(ControllerError::Repo(_)) | ViewError::Encode(_) => {
            error!("event=dispatch module=cli status=error error={err}");
            (500, "InternalServerError")
        }
    };

    HttpResponse::new(
        status_code,
        Some(json!({
            "errors": [{ "title": title, "detail": err.to_string() }]
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::{dispatch, error_response};
    use crate::cli::Command;
    use petshop_core::db::open_db_in_memory;
    use petshop_core::{ControllerError, ViewError};

    #[test]
    fn error_response_maps_error_kinds_to_statuses() {
        assert_eq!(
            error_response(&ViewError::MissingParam("person_id")).status_code,
            400
        );
        assert_eq!(
            error_response(&ViewError::Controller(ControllerError::NotFound(9))).status_code,
            404
        );
        let invalid = error_response(&ViewError::Controller(ControllerError::InvalidName {
            field: "first_name",
            value: "Harvey123".to_string(),
        }));
        assert_eq!(invalid.status_code, 422);
        assert_eq!(
            invalid.body.unwrap()["errors"][0]["title"],
            "UnprocessableEntity"
        );
    }

    #[test]
    fn dispatch_creates_then_finds_person() {
        let conn = open_db_in_memory().unwrap();

        let created = dispatch(
            &conn,
            Command::CreatePerson {
                first_name: "Mike".to_string(),
                last_name: "Ross".to_string(),
                age: 25,
                pet_id: None,
            },
        );
        assert_eq!(created.status_code, 201);

        let found = dispatch(
            &conn,
            Command::FindPerson {
                person_id: "1".to_string(),
            },
        );
        assert_eq!(found.status_code, 200);
        assert_eq!(found.body.unwrap()["data"]["attributes"]["last_name"], "Ross");

        let missing = dispatch(
            &conn,
            Command::FindPerson {
                person_id: "2".to_string(),
            },
        );
        assert_eq!(missing.status_code, 404);
    }

    #[test]
    fn dispatch_delete_pet_is_204_even_without_match() {
        let conn = open_db_in_memory().unwrap();

        let response = dispatch(
            &conn,
            Command::DeletePet {
                name: String::new(),
            },
        );

        assert_eq!(response.status_code, 204);
        assert!(response.body.is_none());
    }
}
