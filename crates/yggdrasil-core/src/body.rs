use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload returned by the authentication service on failure
///
/// Decoded from the JSON body of a failed response. Only JSON objects are
/// accepted. Fields are read by name and leniently: a missing, null or
/// non-string `error`/`errorMessage` reads as an empty string, which never
/// matches a classification rule, and a non-string `cause` reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawErrorBody {
    /// Short error name (e.g. `ForbiddenOperationException`)
    pub error: String,
    /// Human-readable message from the service
    pub error_message: String,
    /// Underlying cause, only sent for a few errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl RawErrorBody {
    /// Create a body with the given error name and message
    pub fn new(error: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_message: error_message.into(),
            cause: None,
        }
    }

    /// Set the cause field
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Read a body from a parsed JSON value, `None` unless it is an object
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| object.get(key).and_then(Value::as_str);

        Some(Self {
            error: text("error").unwrap_or_default().to_owned(),
            error_message: text("errorMessage").unwrap_or_default().to_owned(),
            cause: text("cause").map(str::to_owned),
        })
    }
}

impl<'de> Deserialize<'de> for RawErrorBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).ok_or_else(|| de::Error::custom("error body must be a JSON object"))
    }
}
