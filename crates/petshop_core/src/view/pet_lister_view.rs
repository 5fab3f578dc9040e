//! Pet lister view: no input -> `list` -> `200` + envelope.

use crate::controller::pet_lister::PetLister;
use crate::view::http_types::{HttpRequest, HttpResponse, STATUS_OK};
use crate::view::{encode, ViewResult};
use log::debug;

/// HTTP adapter for pet listing.
pub struct PetListerView<C: PetLister> {
    controller: C,
}

impl<C: PetLister> PetListerView<C> {
    /// Creates a view that delegates to `controller`.
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    /// Answers `200` with every pet; the request is not inspected.
    pub fn handle(&self, _request: &HttpRequest) -> ViewResult<HttpResponse> {
        let envelope = self.controller.list()?;
        debug!(
            "event=view_handle module=view view=pet_lister status_code={STATUS_OK} count={}",
            envelope.count()
        );
        Ok(HttpResponse::new(STATUS_OK, Some(encode(&envelope)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::PetListerView;
    use crate::controller::envelope::Envelope;
    use crate::controller::pet_lister::{PetAttributes, PetLister};
    use crate::controller::{ControllerError, ControllerResult};
    use crate::db::DbError;
    use crate::repo::RepoError;
    use crate::view::http_types::HttpRequest;
    use crate::view::ViewError;
    use serde_json::json;

    struct MockPetLister {
        pets: Vec<PetAttributes>,
    }

    impl PetLister for MockPetLister {
        fn list(&self) -> ControllerResult<Envelope<Vec<PetAttributes>>> {
            Ok(Envelope::list("Pets", self.pets.clone()))
        }
    }

    struct FailingPetLister;

    impl PetLister for FailingPetLister {
        fn list(&self) -> ControllerResult<Envelope<Vec<PetAttributes>>> {
            Err(ControllerError::Repo(RepoError::Db(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            ))))
        }
    }

    fn pet(id: i64, name: &str) -> PetAttributes {
        PetAttributes {
            name: name.to_string(),
            id,
        }
    }

    #[test]
    fn handle_returns_200_with_every_pet() {
        let view = PetListerView::new(MockPetLister {
            pets: vec![pet(1, "Kurama"), pet(2, "Gobi"), pet(3, "Nibi")],
        });

        let response = view.handle(&HttpRequest::new()).unwrap();

        assert_eq!(response.status_code, 200);
        let body = response.body.unwrap();
        assert_eq!(body["data"]["type"], "Pets");
        assert_eq!(body["data"]["count"], 3);
        assert_eq!(body["data"]["attributes"][0], json!({ "name": "Kurama", "id": 1 }));
        assert_eq!(body["data"]["attributes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn handle_with_empty_list() {
        let view = PetListerView::new(MockPetLister { pets: Vec::new() });

        let response = view.handle(&HttpRequest::new()).unwrap();

        assert_eq!(response.status_code, 200);
        let body = response.body.unwrap();
        assert_eq!(body["data"]["count"], 0);
        assert_eq!(body["data"]["attributes"], json!([]));
    }

    #[test]
    fn handle_propagates_controller_error_unchanged() {
        let view = PetListerView::new(FailingPetLister);

        let err = view.handle(&HttpRequest::new()).unwrap_err();

        assert!(matches!(
            err,
            ViewError::Controller(ControllerError::Repo(RepoError::Db(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows
            ))))
        ));
    }
}
