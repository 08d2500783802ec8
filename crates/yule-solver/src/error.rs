//! Error types for the solver

use thiserror::Error;
use yule_domain::PoolKind;

/// Errors that can occur while drawing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Every ordering of the pool was tried without reaching a valid assignment
    ///
    /// Retrying with the same input reproduces this failure; only a different
    /// roster or history can change the outcome.
    #[error("No valid solution for {pool}")]
    Unsatisfiable {
        /// The pool that could not be drawn
        pool: PoolKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_pool() {
        let adults = SolveError::Unsatisfiable {
            pool: PoolKind::Adults,
        };
        let kids = SolveError::Unsatisfiable {
            pool: PoolKind::Kids,
        };
        assert_eq!(adults.to_string(), "No valid solution for adults");
        assert_eq!(kids.to_string(), "No valid solution for kids");
    }
}
