//! Composable wrappers for AWS Lambda HTTP handlers.
//!
//! Each wrapper takes a handler with the `(event, context)` calling convention
//! and returns a new handler with the same shape, so wrappers stack by plain
//! nesting. The event is a `serde_json::Value` as delivered by API Gateway and
//! the context is the standard `lambda_runtime::Context`.
//!
//! ```rust
//! use lambda_runtime::{Context, Error};
//! use lambda_wrap::{cors, json_http_resp, load_json_body};
//! use serde_json::{json, Value};
//!
//! fn handler(event: Value, _context: Context) -> Result<Value, Error> {
//!     Ok(json!({ "hello": event["body"]["name"] }))
//! }
//!
//! // the platform calls the wrapped handler once per invocation
//! let wrapped = cors(json_http_resp(load_json_body(handler)));
//! # let _ = wrapped;
//! ```
//!
//! Included wrappers:
//! * [`async_handler`] - drives an async handler to completion behind the synchronous call contract
//! * [`cors`] / [`cors_origin`] - injection of `Access-Control-Allow-Origin` headers
//! * [`dump_json_body`] - serialization of the response body to JSON
//! * [`json_http_resp`] - serialization of the return value into an HTTP JSON response
//! * [`load_json_body`] - deserialization of the event body from JSON
//! * [`no_retry_on_failure`] - detect and stop retry attempts for scheduled lambdas

use std::env::var;
use std::str::FromStr;

mod async_handler;
mod body;
mod cors;
mod error;
mod http_resp;
mod response;
mod retry;

pub use crate::async_handler::async_handler;
pub use crate::body::{dump_json_body, load_json_body};
pub use crate::cors::{cors, cors_origin};
pub use crate::error::WrapError;
pub use crate::http_resp::json_http_resp;
pub use crate::response::HttpResponse;
pub use crate::retry::{no_retry_on_failure, RetryGuard};

pub use lambda_runtime::{Context, Error};

/// A standard routine for initializing a tracing provider for use in `main` and inside test functions.
/// * tracing_level: pass None if not known in advance and should be taken from an env var
pub fn init_tracing(tracing_level: Option<tracing::Level>) {
    // get the log level from an env var
    let tracing_level = match tracing_level {
        Some(v) => v,
        None => match var("LAMBDA_WRAP_TRACING_LEVEL") {
            Err(_) => tracing::Level::INFO,
            Ok(v) => tracing::Level::from_str(&v).expect("Invalid tracing level. Use trace, debug, error or info"),
        },
    };

    // init the logger with the specified level
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_ansi(false)
        .without_time()
        .init();
}

/// Builds a Context the same way the runtime does when it parses the invocation headers.
#[cfg(test)]
pub(crate) fn test_context(request_id: &str) -> Context {
    serde_json::from_value(serde_json::json!({
        "request_id": request_id,
        "deadline": 0,
        "invoked_function_arn": "arn:aws:lambda:us-east-1:000000000000:function:test",
        "env_config": {
            "function_name": "test",
            "memory": 128,
            "version": "$LATEST",
            "log_stream": "",
            "log_group": ""
        }
    }))
    .expect("Failed to build a test context")
}
