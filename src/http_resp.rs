use crate::response::HttpResponse;
use lambda_runtime::{Context, Error};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Wraps the handler's whole return value into an HTTP JSON response.
///
/// The handler returns any serializable value and the caller receives
/// `{"statusCode": 200, "body": "<json>"}`. A value that cannot be serialized
/// produces a 500 carrying the error text instead. Errors raised by the handler
/// itself are not caught - only the serialization step is.
pub fn json_http_resp<H, T>(mut handler: H) -> impl FnMut(Value, Context) -> Result<Value, Error>
where
    H: FnMut(Value, Context) -> Result<T, Error>,
    T: Serialize,
{
    move |event, context| {
        let payload = handler(event, context)?;

        let response = match serde_json::to_string(&payload) {
            Ok(body) => HttpResponse::ok(body),
            Err(e) => {
                warn!("Failed to serialize the handler return value: {}", e);
                HttpResponse::server_error(e.to_string())
            }
        };

        Ok(response.into_value())
    }
}
