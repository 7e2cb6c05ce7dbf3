use crate::message::ErrorMessage;
use crate::state::TriState;
use std::fmt::Display;

impl<T, E: Display> From<Result<T, E>> for TriState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => TriState::Content(value),
            Err(err) => TriState::Error(ErrorMessage::new(err.to_string())),
        }
    }
}

/// `None` means "nothing yet", not a failure.
impl<T> From<Option<T>> for TriState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => TriState::Content(data),
            None => TriState::Idle,
        }
    }
}
