use lambda_runtime::{Context, Error};
use serde_json::Value;
use std::future::Future;

/// Bridges an async handler into the synchronous `(event, context)` call contract.
///
/// The wrapper builds one current-thread tokio runtime when the handler is
/// decorated and reuses it for every invocation: the handler's future is driven
/// to completion on it and the result is returned synchronously, so the caller
/// never observes suspension. Both the event and the context are forwarded into
/// the future. Errors coming out of the future propagate unchanged.
///
/// Do not call the wrapped handler from inside another async runtime - blocking
/// on a nested runtime panics. This wrapper exists for hosts with a strictly
/// synchronous call contract.
pub fn async_handler<H, Fut, T>(mut handler: H) -> impl FnMut(Value, Context) -> Result<T, Error>
where
    H: FnMut(Value, Context) -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build the tokio runtime for async_handler");

    move |event, context| runtime.block_on(handler(event, context))
}
