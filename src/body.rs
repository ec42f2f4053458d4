use crate::response::HttpResponse;
use lambda_runtime::{Context, Error};
use serde_json::Value;
use tracing::{debug, warn};

/// Parses a string `body` on the event into structured JSON before the handler runs.
///
/// The handler then reads `event["body"]` as a mapping without parsing it itself.
/// A body that does not parse short-circuits to `400 BAD REQUEST` and the handler
/// is never invoked. An absent or already-structured body passes through untouched.
pub fn load_json_body<H>(mut handler: H) -> impl FnMut(Value, Context) -> Result<Value, Error>
where
    H: FnMut(Value, Context) -> Result<Value, Error>,
{
    move |mut event, context| {
        let parsed = match event.get("body").and_then(Value::as_str) {
            None => None,
            Some(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("Rejecting request with unparseable body: {}", e);
                    return Ok(HttpResponse::bad_request().into_value());
                }
            },
        };

        if let Some(body) = parsed {
            event["body"] = body;
        } else {
            debug!("Event body is absent or already structured, passing through");
        }

        handler(event, context)
    }
}

/// Serializes the `body` of the handler's response mapping to a JSON string.
///
/// The handler keeps returning structured bodies; the wire format gets the string.
/// A body that cannot be serialized turns the whole response into a 500 carrying
/// the error text. Responses without a `body` key pass through untouched.
pub fn dump_json_body<H>(mut handler: H) -> impl FnMut(Value, Context) -> Result<Value, Error>
where
    H: FnMut(Value, Context) -> Result<Value, Error>,
{
    move |event, context| {
        let mut response = handler(event, context)?;

        let serialized = response.get("body").map(serde_json::to_string);

        match serialized {
            None => Ok(response),
            Some(Ok(body)) => {
                response["body"] = Value::String(body);
                Ok(response)
            }
            Some(Err(e)) => {
                warn!("Failed to serialize the response body: {}", e);
                Ok(HttpResponse::server_error(e.to_string()).into_value())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_context;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn string_body_is_parsed_before_the_handler_runs() {
        let mut wrapped = load_json_body(|event, _context| Ok(event["body"].clone()));

        let response = wrapped(json!({ "body": r#"{"name": "world"}"# }), test_context("req-1"))
            .expect("handler should succeed");

        assert_eq!(response, json!({ "name": "world" }));
    }

    #[test]
    fn unparseable_body_returns_400_without_calling_the_handler() {
        let calls = Cell::new(0u32);
        let mut wrapped = load_json_body(|_event, _context| {
            calls.set(calls.get() + 1);
            Ok(json!({}))
        });

        let response = wrapped(json!({ "body": "{not json" }), test_context("req-1"))
            .expect("the 400 short-circuit is a response, not an error");

        assert_eq!(response, json!({ "statusCode": 400, "body": "BAD REQUEST" }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn absent_body_passes_through_untouched() {
        let mut wrapped = load_json_body(|event, _context| Ok(event));

        let event = json!({ "headers": { "Host": "example.com" } });
        let response = wrapped(event.clone(), test_context("req-1")).expect("handler should succeed");

        assert_eq!(response, event);
    }

    #[test]
    fn structured_body_passes_through_untouched() {
        let mut wrapped = load_json_body(|event, _context| Ok(event));

        let event = json!({ "body": { "already": "parsed" } });
        let response = wrapped(event.clone(), test_context("req-1")).expect("handler should succeed");

        assert_eq!(response, event);
    }

    #[test]
    fn response_body_is_serialized_in_place() {
        let mut wrapped = dump_json_body(|_event, _context| {
            Ok(json!({ "statusCode": 200, "body": { "hello": "world" } }))
        });

        let response = wrapped(json!({}), test_context("req-1")).expect("handler should succeed");

        assert_eq!(response, json!({ "statusCode": 200, "body": r#"{"hello":"world"}"# }));
    }

    #[test]
    fn response_without_body_passes_through_untouched() {
        let mut wrapped = dump_json_body(|_event, _context| Ok(json!({ "statusCode": 204 })));

        let response = wrapped(json!({}), test_context("req-1")).expect("handler should succeed");

        assert_eq!(response, json!({ "statusCode": 204 }));
    }

    #[test]
    fn handler_errors_propagate() {
        let mut wrapped = dump_json_body(|_event, _context| Err(Error::from("handler exploded")));

        let err = wrapped(json!({}), test_context("req-1")).expect_err("handler error must propagate");

        assert!(err.to_string().contains("handler exploded"));
    }
}
