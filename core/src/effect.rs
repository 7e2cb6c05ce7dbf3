//! Effect: adapting imperative actions into a `TriState`
//!
//! The only place where a failure is captured. `Err` values and unwinding
//! panics both become `Error`; only the top-level description survives,
//! any source chain or backtrace is dropped here.

use crate::config::EffectPolicy;
use crate::message::ErrorMessage;
use crate::state::TriState;
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// Translate a settled `Result` into a `TriState`.
pub fn from_result<T, E>(result: Result<T, E>, policy: &EffectPolicy) -> TriState<T>
where
    E: Display,
{
    match result {
        Ok(value) => TriState::pure(value),
        Err(err) => {
            let message = ErrorMessage::new(err.to_string());
            if policy.log_failures {
                tracing::debug!(error = %message, "Effect failed");
            }
            TriState::Error(message)
        }
    }
}

/// Translate a captured panic payload into a `TriState`.
///
/// When the policy does not capture panics the unwind is resumed with the
/// original payload.
pub fn from_panic<T>(payload: Box<dyn Any + Send>, policy: &EffectPolicy) -> TriState<T> {
    if !policy.capture_panics {
        panic::resume_unwind(payload);
    }
    let message = ErrorMessage::from_panic(payload.as_ref());
    if policy.log_failures {
        tracing::warn!(panic = %message, "Effect panicked, captured as error");
    }
    TriState::Error(message)
}

impl<T> TriState<T> {
    /// Run `action` now and adapt its outcome under the default policy.
    ///
    /// ```rust
    /// use tristate_core::TriState;
    ///
    /// let parsed = TriState::effect(|| "42".parse::<i32>());
    /// assert_eq!(parsed, TriState::content(42));
    ///
    /// let failed = TriState::effect(|| "x".parse::<i32>());
    /// assert_eq!(failed.error_message(), Some("invalid digit found in string"));
    /// ```
    pub fn effect<E, F>(action: F) -> Self
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        Self::effect_with(EffectPolicy::default(), action)
    }

    pub fn effect_with<E, F>(policy: EffectPolicy, action: F) -> Self
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        match panic::catch_unwind(AssertUnwindSafe(action)) {
            Ok(result) => from_result(result, &policy),
            Err(payload) => from_panic(payload, &policy),
        }
    }
}
