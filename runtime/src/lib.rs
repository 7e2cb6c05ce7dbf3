//! TriState Runtime - Async Effect Adapters
//!
//! Adapts futures and spawned tokio tasks into the `TriState` algebra.
//! Cancellation is never folded into `Error`: a dropped future simply stops,
//! an aborted task surfaces as [`Cancelled`].

pub mod join;
pub mod suspend;
pub mod telemetry;

pub mod prelude {
    pub use crate::join::{Cancelled, join_effect, join_effect_with};
    pub use crate::suspend::{suspend_effect, suspend_effect_with};
    pub use crate::telemetry::{Traced, traced};
}

pub use join::{Cancelled, join_effect, join_effect_with};
pub use suspend::{suspend_effect, suspend_effect_with};
pub use telemetry::{Traced, traced};
