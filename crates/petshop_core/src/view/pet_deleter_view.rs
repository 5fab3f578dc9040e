//! Pet deleter view: `name` param -> `delete` -> `204`, no body.

use crate::controller::pet_deleter::PetDeleter;
use crate::view::http_types::{HttpRequest, HttpResponse, STATUS_NO_CONTENT};
use crate::view::{string_param, ViewResult};
use log::debug;

const NAME_PARAM: &str = "name";

/// HTTP adapter for pet deletion.
pub struct PetDeleterView<C: PetDeleter> {
    controller: C,
}

impl<C: PetDeleter> PetDeleterView<C> {
    /// Creates a view that delegates to `controller`.
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    /// Reads the `name` param and answers `204` with no body.
    pub fn handle(&self, request: &HttpRequest) -> ViewResult<HttpResponse> {
        let name = string_param(request, NAME_PARAM)?;
        self.controller.delete(name)?;
        debug!("event=view_handle module=view view=pet_deleter status_code={STATUS_NO_CONTENT}");
        Ok(HttpResponse::new(STATUS_NO_CONTENT, None))
    }
}

#[cfg(test)]
mod tests {
    use super::PetDeleterView;
    use crate::controller::pet_deleter::PetDeleter;
    use crate::controller::{ControllerError, ControllerResult};
    use crate::db::DbError;
    use crate::repo::RepoError;
    use crate::view::http_types::HttpRequest;
    use crate::view::ViewError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockPetDeleter {
        names: RefCell<Vec<String>>,
    }

    impl PetDeleter for MockPetDeleter {
        fn delete(&self, name: &str) -> ControllerResult<()> {
            self.names.borrow_mut().push(name.to_string());
            Ok(())
        }
    }

    struct FailingPetDeleter;

    impl PetDeleter for FailingPetDeleter {
        fn delete(&self, _name: &str) -> ControllerResult<()> {
            Err(ControllerError::Repo(RepoError::Db(DbError::Sqlite(
                rusqlite::Error::InvalidQuery,
            ))))
        }
    }

    #[test]
    fn handle_returns_204_without_body_for_any_name() {
        let view = PetDeleterView::new(MockPetDeleter::default());

        for name in ["Kurama", "", "Kurama-2025", "Pet Inexistente"] {
            let response = view
                .handle(&HttpRequest::new().with_param("name", name))
                .unwrap();
            assert_eq!(response.status_code, 204);
            assert!(response.body.is_none());
        }

        assert_eq!(
            view.controller.names.borrow().as_slice(),
            &["Kurama", "", "Kurama-2025", "Pet Inexistente"]
        );
    }

    #[test]
    fn handle_propagates_controller_error_unchanged() {
        let view = PetDeleterView::new(FailingPetDeleter);

        let err = view
            .handle(&HttpRequest::new().with_param("name", "Kurama"))
            .unwrap_err();

        assert!(matches!(
            err,
            ViewError::Controller(ControllerError::Repo(RepoError::Db(DbError::Sqlite(
                rusqlite::Error::InvalidQuery
            ))))
        ));
    }
}
