use thiserror::Error;

/// Faults that can occur while a service operation decodes its request
/// payload.
///
/// These never escape the service boundary: every operation converts them
/// into a well-formed response carrying the message on its natural error
/// channel (`diagnostics`, `rationale`, `result.message`, or `status`).
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("malformed request payload: {0}")]
    Payload(#[from] serde_json::Error),
}
