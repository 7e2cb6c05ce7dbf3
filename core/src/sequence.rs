//! Aggregation of many independent results into one.
//!
//! Policy, in order of precedence:
//! 1. any `Error` wins, and every error message is kept, joined with `"; "`
//!    in input order
//! 2. otherwise any `Idle` collapses the whole result to a single `Idle`
//! 3. otherwise all values are collected into `Content(Vec<_>)`
//!
//! An empty input is vacuously all-content and yields `Content(vec![])`.

use crate::state::TriState;

/// Separator placed between accumulated error messages.
pub const ERROR_SEPARATOR: &str = "; ";

/// Aggregate independent results, accumulating every failure.
pub fn parallel_sequence<T, I>(states: I) -> TriState<Vec<T>>
where
    I: IntoIterator<Item = TriState<T>>,
{
    let mut errors: Vec<String> = Vec::new();
    let mut values: Vec<T> = Vec::new();
    let mut pending = false;

    for state in states {
        match state {
            TriState::Error(message) => errors.push(message.into_string()),
            TriState::Idle => pending = true,
            TriState::Content(data) => {
                // Values stop mattering once an error has been seen.
                if errors.is_empty() {
                    values.push(data);
                }
            }
        }
    }

    if !errors.is_empty() {
        TriState::error(errors.join(ERROR_SEPARATOR))
    } else if pending {
        TriState::idle()
    } else {
        TriState::content(values)
    }
}

/// Method form of [`parallel_sequence`] for anything iterable.
pub trait ParallelSequence<T> {
    fn parallel_sequence(self) -> TriState<Vec<T>>;
}

impl<T, I> ParallelSequence<T> for I
where
    I: IntoIterator<Item = TriState<T>>,
{
    fn parallel_sequence(self) -> TriState<Vec<T>> {
        parallel_sequence(self)
    }
}

impl<T> FromIterator<TriState<T>> for TriState<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = TriState<T>>>(iter: I) -> Self {
        parallel_sequence(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_content() {
        let states = vec![
            TriState::content(1),
            TriState::content(2),
            TriState::content(3),
        ];
        assert_eq!(states.parallel_sequence(), TriState::content(vec![1, 2, 3]));
    }

    #[test]
    fn test_single_error() {
        let states = vec![
            TriState::content(1),
            TriState::error("bad"),
            TriState::content(3),
        ];
        assert_eq!(states.parallel_sequence(), TriState::error("bad"));
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let states: Vec<TriState<i32>> = vec![TriState::error("a"), TriState::error("b")];
        assert_eq!(states.parallel_sequence(), TriState::error("a; b"));

        let states: Vec<TriState<i32>> = vec![
            TriState::error("first"),
            TriState::idle(),
            TriState::content(2),
            TriState::error("second"),
            TriState::error("third"),
        ];
        assert_eq!(
            parallel_sequence(states),
            TriState::error("first; second; third")
        );
    }

    #[test]
    fn test_idle_collapses() {
        let states = vec![TriState::content(1), TriState::idle()];
        assert_eq!(states.parallel_sequence(), TriState::idle());

        let states: Vec<TriState<i32>> = vec![TriState::idle(), TriState::idle()];
        assert_eq!(states.parallel_sequence(), TriState::idle());
    }

    #[test]
    fn test_error_beats_idle() {
        let states: Vec<TriState<i32>> = vec![TriState::idle(), TriState::error("late")];
        assert_eq!(states.parallel_sequence(), TriState::error("late"));
    }

    #[test]
    fn test_empty_is_content() {
        let states: Vec<TriState<i32>> = Vec::new();
        assert_eq!(states.parallel_sequence(), TriState::content(vec![]));
    }

    #[test]
    fn test_collect() {
        let collected: TriState<Vec<usize>> = ["a", "bb", "ccc"]
            .iter()
            .map(|word| TriState::content(word.len()))
            .collect();
        assert_eq!(collected, TriState::content(vec![1, 2, 3]));
    }
}
