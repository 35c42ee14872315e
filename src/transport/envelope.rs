use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the uniform `{status, message, data}` envelope.
pub fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<Envelope<T>, TransportError> {
    Ok(serde_json::from_str(json)?)
}

/// Best-effort extraction of the server-supplied `message` from a failure
/// body. SMS.IR usually wraps errors in the same envelope shape, but the
/// body is not guaranteed to be JSON.
pub fn extract_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|message| !message.trim().is_empty())
}
