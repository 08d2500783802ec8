//! Yule Domain Layer
//!
//! This crate contains the domain model for the Yule gift exchange.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the solver, storage and CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Participant**: a person in the exchange, identified by name, family and age group
//! - **Pool**: the adult or kid partition; pairings never cross pools
//! - **Forbidden pair**: a directed giver → recipient combination disallowed this run
//! - **Assignment**: the ordered giver → recipient mapping produced by a draw
//! - **Pairing record**: the persisted snapshot of one assignment entry
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain logic only
//! - Persistence implementations live in `yule-store`
//! - The search itself lives in `yule-solver`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assignment;
pub mod forbidden;
pub mod participant;
pub mod pool;
pub mod record;
pub mod roster;
pub mod traits;

// Re-exports for convenience
pub use assignment::{Assignment, Pairing};
pub use forbidden::{ForbiddenPair, ForbiddenPairs};
pub use participant::Participant;
pub use pool::{PoolKind, Pools};
pub use record::PairingRecord;
pub use roster::{validate_roster, RosterError};
