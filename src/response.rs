use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The response shape expected by the HTTP-triggering layer,
/// e.g. API Gateway or a function URL.
/// Wrappers build it on their error paths and convert it into the JSON mapping
/// the rest of the chain operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl HttpResponse {
    /// A 200 response with the given body, no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
            headers: None,
        }
    }

    /// The fixed 400 response returned when a request body does not parse.
    pub fn bad_request() -> Self {
        Self {
            status_code: 400,
            body: "BAD REQUEST".to_owned(),
            headers: None,
        }
    }

    /// A 500 response carrying the error text as its body.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: message.into(),
            headers: None,
        }
    }

    /// Converts the envelope into the JSON mapping passed back through the wrapper chain.
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).expect("Failed to convert the response envelope to JSON")
    }
}
