use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every sweep over pairs of clauses made during a solve.
    pub sweeps: usize,

    /// A count of every (ordered) pair of clauses resolved.
    pub resolutions: usize,

    /// A count of literals removed from clauses through resolution.
    pub eliminated: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
