use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::ops::Deref;

/// Substituted whenever a failure carries no usable description.
pub const FALLBACK_MESSAGE: &str = "Unknown error occurred";

/// The diagnostic carried by [`TriState::Error`](crate::TriState::Error).
///
/// An `ErrorMessage` is never empty: every constructor routes through
/// [`ErrorMessage::new`], which substitutes [`FALLBACK_MESSAGE`] for an empty
/// description. Deserialization goes through the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ErrorMessage(String);

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self(FALLBACK_MESSAGE.to_string())
        } else {
            Self(message)
        }
    }

    /// Message for a failure that had nothing to say about itself.
    pub fn fallback() -> Self {
        Self(FALLBACK_MESSAGE.to_string())
    }

    /// Builds a message from an optional description.
    pub fn from_description(description: Option<impl Into<String>>) -> Self {
        match description {
            Some(text) => Self::new(text),
            None => Self::fallback(),
        }
    }

    /// Extracts a message from a panic payload.
    ///
    /// `panic!` with a literal yields `&'static str`, with format arguments a
    /// `String`. Anything else (e.g. `std::panic::panic_any`) has no
    /// description.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(text) = payload.downcast_ref::<&'static str>() {
            Self::new(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Self::new(text.as_str())
        } else {
            Self::fallback()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_MESSAGE
    }
}

impl Deref for ErrorMessage {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<ErrorMessage> for String {
    fn from(message: ErrorMessage) -> Self {
        message.0
    }
}
