use std::fmt::Display;
use thiserror::Error;
use tokio::task::JoinHandle;
use tristate_core::effect::{from_panic, from_result};
use tristate_core::{EffectPolicy, TriState};

/// The joined task was cancelled before it produced a result.
///
/// Kept out of the `TriState` algebra so that the caller (or its scheduler)
/// can still see and react to the cancellation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Task was cancelled before producing a result")]
pub struct Cancelled;

/// Join a task the caller already spawned and adapt its result.
///
/// - finished with `Ok` / `Err`: same translation as `suspend_effect`
/// - panicked: `Error` with the panic message
/// - aborted: `Err(Cancelled)`
///
/// Dropping the returned future detaches the task, it does not abort it.
pub async fn join_effect<T, E>(handle: JoinHandle<Result<T, E>>) -> Result<TriState<T>, Cancelled>
where
    E: Display,
{
    join_effect_with(EffectPolicy::default(), handle).await
}

pub async fn join_effect_with<T, E>(
    policy: EffectPolicy,
    handle: JoinHandle<Result<T, E>>,
) -> Result<TriState<T>, Cancelled>
where
    E: Display,
{
    match handle.await {
        Ok(result) => Ok(from_result(result, &policy)),
        Err(err) => match err.try_into_panic() {
            Ok(payload) => Ok(from_panic(payload, &policy)),
            Err(_) => {
                tracing::debug!("Joined task was cancelled");
                Err(Cancelled)
            }
        },
    }
}
