//! Search statistics

use std::fmt;

/// Counters collected while searching one pool
///
/// Purely observational; never consulted by the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Candidate recipients tested against the validity predicate
    pub candidates_tried: u64,

    /// Tentative pairs undone after their subtree failed
    pub backtracks: u64,

    /// Complete candidates thrown out by the family direction rule
    pub direction_rejections: u64,
}

impl SolveStats {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} candidates, {} backtracks, {} direction rejections",
            self.candidates_tried, self.backtracks, self.direction_rejections
        )
    }
}

impl fmt::Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
