use crate::error::WrapError;
use lambda_runtime::{Context, Error};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;
use tracing::error;

/// Tracks the invocation ids seen by one decorated handler.
///
/// The set lives for the lifetime of the process and only ever grows - there is
/// no eviction. Suitable for infrequently invoked handlers such as scheduled
/// lambdas; do not put it in front of a high-traffic endpoint.
pub struct RetryGuard {
    seen: Mutex<HashSet<String>>,
}

impl RetryGuard {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Records the id and returns true the first time it is seen.
    /// A repeat of an already-recorded id returns false.
    pub fn check_and_record(&self, request_id: &str) -> bool {
        let mut seen = self.seen.lock().expect("poisoned retry guard mutex");
        seen.insert(request_id.to_owned())
    }
}

impl Default for RetryGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Fails fast when the platform retries an invocation this process already executed.
///
/// AWS retries scheduled lambdas that do not complete successfully. The wrapper
/// records request ids in memory via a [`RetryGuard`] owned by the decoration
/// site and returns [`WrapError::RetryDetected`] on a repeat, without calling
/// the handler. The error is deliberately fatal so the platform's failure and
/// alerting path picks it up instead of the work running twice.
pub fn no_retry_on_failure<H, T>(mut handler: H) -> impl FnMut(Value, Context) -> Result<T, Error>
where
    H: FnMut(Value, Context) -> Result<T, Error>,
{
    let guard = RetryGuard::new();
    move |event, context| {
        if !guard.check_and_record(&context.request_id) {
            error!("Retry attempt on request id {} detected", context.request_id);
            return Err(WrapError::RetryDetected(context.request_id.clone()).into());
        }
        handler(event, context)
    }
}
