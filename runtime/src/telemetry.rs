//! # Telemetry: Observability Decorators
//!
//! Wraps an async effect in a tracing span and reports which variant it
//! settled on.

use std::future::Future;
use tracing::{Instrument, info_span};
use tristate_core::TriState;

/// A wrapper that adds tracing to any future yielding a `TriState`.
///
/// ```rust,ignore
/// let profile = Traced::new(suspend_effect(fetch_profile(id)), "fetch_profile")
///     .run()
///     .await;
/// ```
#[derive(Clone)]
pub struct Traced<F> {
    inner: F,
    name: String,
}

impl<F> Traced<F> {
    pub fn new(inner: F, name: &str) -> Self {
        Self {
            inner,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<F, T> Traced<F>
where
    F: Future<Output = TriState<T>>,
{
    pub async fn run(self) -> TriState<T> {
        let span = info_span!("Effect", tristate.effect = %self.name);
        let inner = self.inner;

        async move {
            tracing::debug!("Entering effect");
            let start = std::time::Instant::now();

            let result = inner.await;

            let duration = start.elapsed();
            let kind = result.kind();
            match &result {
                TriState::Content(_) => {
                    tracing::info!(%kind, ?duration, "Effect completed: Content");
                }
                TriState::Idle => {
                    tracing::info!(%kind, ?duration, "Effect completed: Idle");
                }
                TriState::Error(message) => {
                    tracing::error!(%kind, error = %message, ?duration, "Effect failed: Error");
                }
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Shorthand for `Traced::new(future, name).run()`.
pub async fn traced<F, T>(name: &str, future: F) -> TriState<T>
where
    F: Future<Output = TriState<T>>,
{
    Traced::new(future, name).run().await
}
