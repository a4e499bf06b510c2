use thiserror::Error;

/// Errors raised around a formatting call: preparing the request and reading
/// the service reply. Formatting itself never fails.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Please describe your symptoms before analyzing.")]
    EmptySymptoms,

    #[error("Failed to parse service reply: {source}")]
    MalformedReply { source: serde_json::Error },
}
