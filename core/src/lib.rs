//! TriState Core - Idle / Error / Content
//!
//! A closed, dependency-light result algebra for operations that may not
//! have run yet, may have failed, or may have produced a value.
//!
//! **IMPORTANT**: This layer is protocol-agnostic - no async runtime, no IO
//! beyond reading its own config file.

pub mod config;
pub mod conversions;
pub mod effect;
pub mod message;
pub mod sequence;
pub mod state;

pub use config::{ConfigError, EffectPolicy};
pub use message::{ErrorMessage, FALLBACK_MESSAGE};
pub use sequence::{ERROR_SEPARATOR, ParallelSequence, parallel_sequence};
pub use state::{StateKind, TriState};

pub mod prelude {
    pub use crate::config::EffectPolicy;
    pub use crate::message::ErrorMessage;
    pub use crate::sequence::{ParallelSequence, parallel_sequence};
    pub use crate::state::{StateKind, TriState};
}
