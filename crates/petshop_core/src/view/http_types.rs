//! HTTP-shaped request and response values exchanged with the dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;

/// Inbound request as handed over by the dispatcher.
///
/// Path and query parameters are already merged into `param`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub param: BTreeMap<String, Value>,
}

impl HttpRequest {
    /// Empty request: no body, no params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds or replaces one named param.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.param.insert(name.into(), value.into());
        self
    }
}

/// Outbound response; `body` is omitted for `204 No Content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: Option<Value>) -> Self {
        Self { status_code, body }
    }
}
