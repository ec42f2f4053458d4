use crate::error::WrapError;
use lambda_runtime::{Context, Error};
use serde_json::{Map, Value};

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Injects `Access-Control-Allow-Origin: *` into the response headers.
///
/// The headers mapping is created if the handler response does not carry one.
/// Use [`cors_origin`] to allow a specific origin instead of `*`.
pub fn cors<H>(handler: H) -> impl FnMut(Value, Context) -> Result<Value, Error>
where
    H: FnMut(Value, Context) -> Result<Value, Error>,
{
    cors_origin("*", handler)
}

/// Same as [`cors`] with an explicit allowed origin, e.g. `https://example.com`.
/// Any prior value of the header is overwritten.
pub fn cors_origin<H>(origin: impl Into<String>, mut handler: H) -> impl FnMut(Value, Context) -> Result<Value, Error>
where
    H: FnMut(Value, Context) -> Result<Value, Error>,
{
    let origin = origin.into();
    move |event, context| {
        let mut response = handler(event, context)?;

        let fields = response.as_object_mut().ok_or(WrapError::NonObjectResponse)?;

        // the headers mapping must exist before anything is written to it
        let headers = fields
            .entry("headers")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or(WrapError::NonObjectHeaders)?;

        headers.insert(ALLOW_ORIGIN.to_owned(), Value::String(origin.clone()));

        Ok(response)
    }
}
