//! Person creator view: body -> `create` -> `201` + envelope.

use crate::controller::person_creator::PersonCreator;
use crate::model::person::NewPerson;
use crate::view::http_types::{HttpRequest, HttpResponse, STATUS_CREATED};
use crate::view::{encode, ViewError, ViewResult};
use log::debug;
use serde::Deserialize;

/// HTTP adapter for person creation.
pub struct PersonCreatorView<C: PersonCreator> {
    controller: C,
}

impl<C: PersonCreator> PersonCreatorView<C> {
    /// Creates a view that delegates to `controller`.
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    /// Parses the JSON body as a new person and answers `201` with the created envelope.
    ///
    /// # Errors
    /// - `MissingBody`/`InvalidBody` when the body is absent or malformed.
    /// - `Controller` when validation or the insert fails.
    pub fn handle(&self, request: &HttpRequest) -> ViewResult<HttpResponse> {
        let body = request.body.as_ref().ok_or(ViewError::MissingBody)?;
        let person = NewPerson::deserialize(body).map_err(ViewError::InvalidBody)?;
        let envelope = self.controller.create(person)?;
        debug!("event=view_handle module=view view=person_creator status_code={STATUS_CREATED}");
        Ok(HttpResponse::new(STATUS_CREATED, Some(encode(&envelope)?)))
    }
}
