use serde::Deserialize;

use crate::error::RequestError;

/// Outcome of one call to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceReply {
    /// The generated text. A reply without a `result` field formats to
    /// nothing rather than failing.
    Success { result: Option<String> },
    /// A failure message to show instead of formatted output.
    Failure { error: String },
}

#[derive(Deserialize)]
struct ReplyBody {
    result: Option<String>,
    error: Option<String>,
}

impl ServiceReply {
    pub const UNKNOWN_ERROR: &'static str = "An unknown network error occurred.";

    /// Parses a JSON reply body: `{"result": "..."}` or `{"error": "..."}`.
    ///
    /// An `error` field wins over `result`; an empty error message is
    /// replaced by [`Self::UNKNOWN_ERROR`].
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        let body: ReplyBody = serde_json::from_str(body)
            .map_err(|source| RequestError::MalformedReply { source })?;

        Ok(match body.error {
            Some(error) if error.is_empty() => Self::Failure {
                error: Self::UNKNOWN_ERROR.to_string(),
            },
            Some(error) => Self::Failure { error },
            None => Self::Success {
                result: body.result,
            },
        })
    }
}
