//! Yule Pairing Solver
//!
//! Finds a complete giver → recipient assignment for a roster by
//! deterministic backtracking search. Adults and kids are drawn as separate
//! pools; within a pool every participant gives exactly once and receives
//! exactly once.
//!
//! A candidate pair is rejected when:
//! - giver and recipient are the same participant
//! - both belong to the same family
//! - the directed pair was drawn last time (see [`ForbiddenPairs`])
//! - the recipient already gives to this giver (no 2-cycles)
//!
//! The adult pool additionally caps every ordered family → family direction
//! at one edge; this is checked once a complete candidate exists.
//!
//! # Examples
//!
//! ```
//! use yule_domain::{ForbiddenPair, ForbiddenPairs, Participant};
//! use yule_solver::PairingSolver;
//!
//! let roster = vec![
//!     Participant::adult("Alice", "F1"),
//!     Participant::adult("Bob", "F2"),
//!     Participant::adult("Carol", "F3"),
//! ];
//! let forbidden: ForbiddenPairs = [ForbiddenPair::new("Alice", "Bob")].into_iter().collect();
//!
//! let assignment = PairingSolver::new(&forbidden).solve(&roster).unwrap();
//! assert_eq!(assignment.len(), 3);
//! assert_eq!(assignment.recipient_of(&roster[0]), Some(&roster[2]));
//! ```
//!
//! [`ForbiddenPairs`]: yule_domain::ForbiddenPairs

#![warn(missing_docs)]

pub mod constraints;
pub mod error;
pub mod solver;
pub mod stats;

pub use constraints::satisfies_direction_constraint;
pub use error::SolveError;
pub use solver::{solve, PairingSolver, SolveReport};
pub use stats::SolveStats;
