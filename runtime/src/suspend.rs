//! Suspend - Async Effect Adapter
//!
//! The async counterpart of `TriState::effect`. The producer future is
//! awaited in place, inside the caller's task: nothing is spawned and no
//! scheduling decision is made here.
//!
//! # Cancellation
//! Dropping the future returned by [`suspend_effect`] drops the producer with
//! it. The adapter never sees a cancelled producer, so cancellation is never
//! turned into an `Error`; whoever dropped the future keeps full control.

use futures_util::FutureExt;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tristate_core::effect::{from_panic, from_result};
use tristate_core::{EffectPolicy, TriState};

/// Await `action` and adapt its outcome under the default policy.
///
/// `Err(e)` becomes `Error(e.to_string())`, a panic while polling becomes
/// `Error` with the panic message.
pub async fn suspend_effect<T, E, F>(action: F) -> TriState<T>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    suspend_effect_with(EffectPolicy::default(), action).await
}

pub async fn suspend_effect_with<T, E, F>(policy: EffectPolicy, action: F) -> TriState<T>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    match AssertUnwindSafe(action).catch_unwind().await {
        Ok(result) => from_result(result, &policy),
        Err(payload) => from_panic(payload, &policy),
    }
}
