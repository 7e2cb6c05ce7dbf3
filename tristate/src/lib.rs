//! TriState facade crate.
//!
//! This crate re-exports the core algebra and the async runtime adapters
//! with a single entry point.

pub use tristate_core as core;
#[cfg(feature = "runtime")]
pub use tristate_runtime as runtime;

pub use tristate_core::{
    ConfigError, EffectPolicy, ErrorMessage, FALLBACK_MESSAGE, ParallelSequence, StateKind,
    TriState, parallel_sequence,
};
#[cfg(feature = "runtime")]
pub use tristate_runtime::{Cancelled, join_effect, suspend_effect};

pub mod prelude {
    pub use tristate_core::prelude::*;
    #[cfg(feature = "runtime")]
    pub use tristate_runtime::prelude::*;
}
