use thiserror::Error;

/// Failures raised by the wrappers themselves.
/// Errors coming out of the wrapped handler are never converted into these - they
/// pass through every wrapper untouched.
#[derive(Debug, Error)]
pub enum WrapError {
    /// The retry guard saw an invocation id this process already executed.
    /// Deliberately fatal - the platform's failure path is expected to pick it up.
    #[error("Retry attempt on request id {0} detected")]
    RetryDetected(String),

    /// A wrapper had to write response headers but the handler returned
    /// something other than a JSON object.
    #[error("Handler response is not a JSON object")]
    NonObjectResponse,

    /// The response carries a `headers` key that is not a JSON object.
    #[error("Response headers are not a JSON object")]
    NonObjectHeaders,
}
