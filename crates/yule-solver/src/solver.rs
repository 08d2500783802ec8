//! Deterministic backtracking search over one pool at a time

use crate::constraints::{is_valid_pair, satisfies_direction_constraint, PartialAssignment};
use crate::{SolveError, SolveStats};
use tracing::debug;
use yule_domain::{Assignment, ForbiddenPairs, Participant, PoolKind, Pools};

/// Result of a full draw together with per-pool search statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Merged assignment, adults first then kids
    pub assignment: Assignment,

    /// Statistics for the adult pool
    pub adults: SolveStats,

    /// Statistics for the kid pool
    pub kids: SolveStats,
}

/// Solver for the constrained gift exchange
///
/// Holds the read-only forbidden set for the duration of a draw. Each pool
/// solve owns its own partial assignment and recipient list.
#[derive(Debug, Clone, Copy)]
pub struct PairingSolver<'f> {
    forbidden: &'f ForbiddenPairs,
}

impl<'f> PairingSolver<'f> {
    /// Create a solver that avoids the given directed pairs
    pub fn new(forbidden: &'f ForbiddenPairs) -> Self {
        Self { forbidden }
    }

    /// Draw both pools and merge the results
    ///
    /// # Errors
    /// Returns [`SolveError::Unsatisfiable`] naming the first pool (adults
    /// are drawn first) that has no valid assignment.
    pub fn solve(&self, participants: &[Participant]) -> Result<Assignment, SolveError> {
        self.solve_with_report(participants)
            .map(|report| report.assignment)
    }

    /// Like [`PairingSolver::solve`], also returning search statistics
    pub fn solve_with_report(&self, participants: &[Participant]) -> Result<SolveReport, SolveError> {
        let pools = Pools::partition(participants);

        let (mut assignment, adults) = self.solve_pool_with_stats(&pools.adults, PoolKind::Adults)?;
        let (kid_assignment, kids) = self.solve_pool_with_stats(&pools.kids, PoolKind::Kids)?;
        assignment.merge(kid_assignment);

        Ok(SolveReport {
            assignment,
            adults,
            kids,
        })
    }

    /// Draw a single pool
    ///
    /// Pools with fewer than two participants yield an empty assignment
    /// without searching.
    pub fn solve_pool(&self, pool: &[Participant], kind: PoolKind) -> Result<Assignment, SolveError> {
        self.solve_pool_with_stats(pool, kind)
            .map(|(assignment, _)| assignment)
    }

    fn solve_pool_with_stats(
        &self,
        pool: &[Participant],
        kind: PoolKind,
    ) -> Result<(Assignment, SolveStats), SolveError> {
        let mut stats = SolveStats::default();

        if pool.len() < 2 {
            debug!(pool = %kind, size = pool.len(), "Pool too small to draw, skipping");
            return Ok((Assignment::new(), stats));
        }

        let givers: Vec<&Participant> = pool.iter().collect();
        let mut receivers = givers.clone();
        let mut current = PartialAssignment::with_capacity(pool.len());

        let solved = self.backtrack(&givers, &mut receivers, &mut current, kind, &mut stats);

        debug!(pool = %kind, size = pool.len(), solved, "Search finished: {}", stats);

        if !solved {
            return Err(SolveError::Unsatisfiable { pool: kind });
        }

        // Commit order is giver input order
        let assignment: Assignment = givers
            .iter()
            .filter_map(|giver| {
                current
                    .get(*giver)
                    .map(|recipient| ((*giver).clone(), (*recipient).clone()))
            })
            .collect();

        Ok((assignment, stats))
    }

    /// Try, recurse, undo on failure
    ///
    /// Givers are taken in fixed input order. Recipients are tried in the
    /// current order of `receivers`; an undone recipient goes back on the end.
    fn backtrack<'p>(
        &self,
        givers: &[&'p Participant],
        receivers: &mut Vec<&'p Participant>,
        current: &mut PartialAssignment<'p>,
        kind: PoolKind,
        stats: &mut SolveStats,
    ) -> bool {
        let Some((&giver, rest)) = givers.split_first() else {
            if kind.enforces_direction()
                && !satisfies_direction_constraint(current.iter().map(|(g, r)| (*g, *r)))
            {
                stats.direction_rejections += 1;
                return false;
            }
            return true;
        };

        let candidates = receivers.clone();
        for recipient in candidates {
            stats.candidates_tried += 1;
            if !is_valid_pair(self.forbidden, giver, recipient, current) {
                continue;
            }

            current.insert(giver, recipient);
            if let Some(position) = receivers.iter().position(|r| *r == recipient) {
                receivers.remove(position);
            }

            if self.backtrack(rest, receivers, current, kind, stats) {
                return true;
            }

            current.remove(giver);
            receivers.push(recipient);
            stats.backtracks += 1;
        }

        false
    }
}

/// Draw a full roster against a forbidden set
///
/// Convenience wrapper around [`PairingSolver::solve`].
pub fn solve(
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
) -> Result<Assignment, SolveError> {
    PairingSolver::new(forbidden).solve(participants)
}
