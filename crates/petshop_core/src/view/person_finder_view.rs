//! Person finder view: `person_id` param -> `find` -> `200` + envelope.

use crate::controller::person_finder::PersonFinder;
use crate::view::http_types::{HttpRequest, HttpResponse, STATUS_OK};
use crate::view::{encode, integer_param, ViewResult};
use log::debug;

const PERSON_ID_PARAM: &str = "person_id";

/// HTTP adapter for person lookup.
pub struct PersonFinderView<C: PersonFinder> {
    controller: C,
}

impl<C: PersonFinder> PersonFinderView<C> {
    /// Creates a view that delegates to `controller`.
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    /// Reads the `person_id` param and answers `200` with the person envelope.
    ///
    /// # Errors
    /// - `MissingParam`/`InvalidParam` for an absent or non-integer id.
    /// - `Controller` when the person is missing or the read fails.
    pub fn handle(&self, request: &HttpRequest) -> ViewResult<HttpResponse> {
        let person_id = integer_param(request, PERSON_ID_PARAM)?;
        let envelope = self.controller.find(person_id)?;
        debug!("event=view_handle module=view view=person_finder status_code={STATUS_OK}");
        Ok(HttpResponse::new(STATUS_OK, Some(encode(&envelope)?)))
    }
}
