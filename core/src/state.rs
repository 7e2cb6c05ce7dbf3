//! TriState - The Outcome of an Operation
//!
//! An operation is in exactly one of three states:
//! - `Idle`: not attempted yet, or still pending
//! - `Error`: attempted and failed, with a human-readable message
//! - `Content`: succeeded with a value
//!
//! # Example
//! ```rust
//! use tristate_core::TriState;
//!
//! let label = TriState::content(21)
//!     .map(|n| n * 2)
//!     .fold(
//!         |n| format!("answer: {n}"),
//!         |message| format!("failed: {message}"),
//!         || "loading".to_string(),
//!     );
//! assert_eq!(label, "answer: 42");
//! ```

use crate::message::ErrorMessage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tri-state result container.
///
/// Values are never mutated; every combinator consumes the receiver and
/// returns a new `TriState`. The `Error` payload is an [`ErrorMessage`],
/// which cannot be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState<T> {
    /// No result available yet
    Idle,
    /// The operation failed
    Error(ErrorMessage),
    /// The operation produced a value
    Content(T),
}

/// Variant tag of a [`TriState`], used as a log field and for dispatch
/// without touching the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Idle,
    Error,
    Content,
}

impl StateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKind::Idle => "idle",
            StateKind::Error => "error",
            StateKind::Content => "content",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> TriState<T> {
    /// Create an idle state
    pub fn idle() -> Self {
        TriState::Idle
    }

    /// Create an error state. An empty message is replaced by the fallback.
    pub fn error(message: impl Into<ErrorMessage>) -> Self {
        TriState::Error(message.into())
    }

    /// Create a content state
    pub fn content(data: T) -> Self {
        TriState::Content(data)
    }

    /// Monadic unit. Same as [`TriState::content`].
    pub fn pure(value: T) -> Self {
        TriState::Content(value)
    }

    pub fn kind(&self) -> StateKind {
        match self {
            TriState::Idle => StateKind::Idle,
            TriState::Error(_) => StateKind::Error,
            TriState::Content(_) => StateKind::Content,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TriState::Idle)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TriState::Error(_))
    }

    pub fn is_content(&self) -> bool {
        matches!(self, TriState::Content(_))
    }

    /// Map the content value. `transform` only runs for `Content`.
    pub fn map<R, F>(self, transform: F) -> TriState<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            TriState::Idle => TriState::Idle,
            TriState::Error(message) => TriState::Error(message),
            TriState::Content(data) => TriState::Content(transform(data)),
        }
    }

    /// Widen the content type, e.g. `TriState<u8>` into `TriState<u32>`.
    pub fn map_into<S>(self) -> TriState<S>
    where
        S: From<T>,
    {
        self.map(S::from)
    }

    /// Monadic bind. The result of `transform` is returned as is.
    pub fn flat_map<R, F>(self, transform: F) -> TriState<R>
    where
        F: FnOnce(T) -> TriState<R>,
    {
        match self {
            TriState::Idle => TriState::Idle,
            TriState::Error(message) => TriState::Error(message),
            TriState::Content(data) => transform(data),
        }
    }

    /// Total eliminator: exactly one handler runs.
    pub fn fold<R, C, E, I>(self, on_content: C, on_error: E, on_idle: I) -> R
    where
        C: FnOnce(T) -> R,
        E: FnOnce(String) -> R,
        I: FnOnce() -> R,
    {
        match self {
            TriState::Content(data) => on_content(data),
            TriState::Error(message) => on_error(message.into_string()),
            TriState::Idle => on_idle(),
        }
    }

    pub fn on_idle<F>(self, effect: F) -> Self
    where
        F: FnOnce(),
    {
        if let TriState::Idle = &self {
            effect();
        }
        self
    }

    pub fn on_error<F>(self, effect: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let TriState::Error(message) = &self {
            effect(message.as_str());
        }
        self
    }

    pub fn on_content<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let TriState::Content(data) = &self {
            effect(data);
        }
        self
    }

    /// Run the callback matching the current variant and hand the state back.
    pub fn on_each<I, E, C>(self, on_idle: I, on_error: E, on_content: C) -> Self
    where
        I: FnOnce(),
        E: FnOnce(&str),
        C: FnOnce(&T),
    {
        match &self {
            TriState::Idle => on_idle(),
            TriState::Error(message) => on_error(message.as_str()),
            TriState::Content(data) => on_content(data),
        }
        self
    }

    /// Borrow the content value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            TriState::Content(data) => Some(data),
            _ => None,
        }
    }

    /// Extract the content value, if any.
    pub fn into_content(self) -> Option<T> {
        match self {
            TriState::Content(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_or_default(self, default_value: T) -> T {
        match self {
            TriState::Content(data) => data,
            _ => default_value,
        }
    }

    /// Like [`TriState::get_or_default`], but the default is only computed
    /// for `Idle` and `Error`.
    pub fn get_or_else<F>(self, default_value: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            TriState::Content(data) => data,
            _ => default_value(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TriState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Heal an `Error` into `Content`.
    ///
    /// `Idle` is left alone: there is nothing to recover from an operation
    /// that never ran.
    pub fn recover<F>(self, transform: F) -> Self
    where
        F: FnOnce(String) -> T,
    {
        match self {
            TriState::Error(message) => TriState::Content(transform(message.into_string())),
            other => other,
        }
    }

    /// Replace an `Error` with whatever `transform` yields. `Idle` and
    /// `Content` pass through.
    pub fn recover_with<F>(self, transform: F) -> Self
    where
        F: FnOnce(String) -> TriState<T>,
    {
        match self {
            TriState::Error(message) => transform(message.into_string()),
            other => other,
        }
    }

    /// Pair two states. The receiver decides first; `other` only matters
    /// when the receiver is `Content`.
    pub fn zip<R>(self, other: TriState<R>) -> TriState<(T, R)> {
        self.flat_map(|left| other.map(|right| (left, right)))
    }

    /// [`TriState::zip`] with a right-hand side that is only produced when
    /// the receiver is `Content`.
    pub fn zip_lazy<R, F>(self, other: F) -> TriState<(T, R)>
    where
        F: FnOnce() -> TriState<R>,
    {
        self.flat_map(|left| other().map(|right| (left, right)))
    }

    /// Same evaluation order as [`TriState::zip`], merging both values
    /// through `transform`.
    pub fn combine<U, R, F>(self, other: TriState<U>, transform: F) -> TriState<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.flat_map(|left| other.map(|right| transform(left, right)))
    }

    pub fn as_ref(&self) -> TriState<&T> {
        match self {
            TriState::Idle => TriState::Idle,
            TriState::Error(message) => TriState::Error(message.clone()),
            TriState::Content(data) => TriState::Content(data),
        }
    }

    /// `Idle` becomes `Ok(None)`, `Content` becomes `Ok(Some(_))`.
    pub fn into_result(self) -> Result<Option<T>, ErrorMessage> {
        match self {
            TriState::Idle => Ok(None),
            TriState::Error(message) => Err(message),
            TriState::Content(data) => Ok(Some(data)),
        }
    }
}

impl<T> TriState<TriState<T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> TriState<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for TriState<T> {
    fn default() -> Self {
        TriState::Idle
    }
}

impl<T: fmt::Display> fmt::Display for TriState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Idle => f.write_str("idle"),
            TriState::Error(message) => write!(f, "error: {message}"),
            TriState::Content(data) => write!(f, "content: {data}"),
        }
    }
}
