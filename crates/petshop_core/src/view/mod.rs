//! Views: adapt HTTP-shaped requests to controller calls and back.
//!
//! # Responsibility
//! - Extract parameters or body from `HttpRequest`.
//! - Call exactly one controller operation.
//! - Build `HttpResponse` with the success status of the operation.
//!
//! # Invariants
//! - Views never translate errors into status codes; controller errors are
//!   returned as `ViewError::Controller` carrying the original value.

use crate::controller::ControllerError;
use crate::view::http_types::HttpRequest;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod http_types;
pub mod person_creator_view;
pub mod person_finder_view;
pub mod pet_deleter_view;
pub mod pet_lister_view;

pub type ViewResult<T> = Result<T, ViewError>;

/// Errors surfaced by view handlers.
#[derive(Debug)]
pub enum ViewError {
    /// Required path/query parameter is absent.
    MissingParam(&'static str),
    /// Parameter is present but has the wrong shape.
    InvalidParam { name: &'static str, value: Value },
    /// Request body is required but absent.
    MissingBody,
    /// Request body does not match the expected payload.
    InvalidBody(serde_json::Error),
    /// Controller result could not be encoded as JSON.
    Encode(serde_json::Error),
    /// Controller failure, unchanged.
    Controller(ControllerError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParam(name) => write!(f, "missing request parameter `{name}`"),
            Self::InvalidParam { name, value } => {
                write!(f, "invalid request parameter `{name}`: {value}")
            }
            Self::MissingBody => write!(f, "missing request body"),
            Self::InvalidBody(err) => write!(f, "invalid request body: {err}"),
            Self::Encode(err) => write!(f, "failed to encode response body: {err}"),
            Self::Controller(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBody(err) | Self::Encode(err) => Some(err),
            Self::Controller(err) => Some(err),
            Self::MissingParam(_) | Self::InvalidParam { .. } | Self::MissingBody => None,
        }
    }
}

impl From<ControllerError> for ViewError {
    fn from(value: ControllerError) -> Self {
        Self::Controller(value)
    }
}

fn required_param<'r>(request: &'r HttpRequest, name: &'static str) -> ViewResult<&'r Value> {
    request.param.get(name).ok_or(ViewError::MissingParam(name))
}

/// Reads an integer parameter given either as a JSON number or numeric text.
fn integer_param(request: &HttpRequest, name: &'static str) -> ViewResult<i64> {
    let value = required_param(request, name)?;
    let parsed = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ViewError::InvalidParam {
        name,
        value: value.clone(),
    })
}

fn string_param<'r>(request: &'r HttpRequest, name: &'static str) -> ViewResult<&'r str> {
    let value = required_param(request, name)?;
    value.as_str().ok_or_else(|| ViewError::InvalidParam {
        name,
        value: value.clone(),
    })
}

fn encode<T: Serialize>(payload: &T) -> ViewResult<Value> {
    serde_json::to_value(payload).map_err(ViewError::Encode)
}

#[cfg(test)]
mod tests {
    use super::{integer_param, string_param, ViewError};
    use crate::view::http_types::HttpRequest;
    use serde_json::json;

    #[test]
    fn integer_param_accepts_number_and_numeric_text() {
        let from_number = HttpRequest::new().with_param("person_id", 7);
        let from_text = HttpRequest::new().with_param("person_id", " 42 ");

        assert_eq!(integer_param(&from_number, "person_id").unwrap(), 7);
        assert_eq!(integer_param(&from_text, "person_id").unwrap(), 42);
    }

    #[test]
    fn integer_param_rejects_missing_and_malformed_values() {
        let missing = integer_param(&HttpRequest::new(), "person_id").unwrap_err();
        assert!(matches!(missing, ViewError::MissingParam("person_id")));

        let request = HttpRequest::new().with_param("person_id", "abc");
        let malformed = integer_param(&request, "person_id").unwrap_err();
        assert!(
            matches!(malformed, ViewError::InvalidParam { name: "person_id", value } if value == json!("abc"))
        );
    }

    #[test]
    fn string_param_rejects_non_text() {
        let request = HttpRequest::new().with_param("name", 12);
        let err = string_param(&request, "name").unwrap_err();
        assert!(matches!(err, ViewError::InvalidParam { name: "name", .. }));
    }
}
