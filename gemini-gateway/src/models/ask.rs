use serde::{de::Error as _, Deserialize, Serialize};

/// Body of `POST /api/ask`.
///
/// `question` is optional at the decode step so that `{}` and
/// `{"question": null}` reach the emptiness check instead of failing as
/// malformed JSON.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl AskRequest {
    /// Decode a request body. Only a JSON object is a request; serde would
    /// otherwise accept `["..."]` as a positional struct.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("request body must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// The question, if present and non-empty. Never trimmed.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}
