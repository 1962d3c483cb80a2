//! Reports on the result of a solve.

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A sweep over the clauses of the context left the count of clauses unchanged.
    ///
    /// Bindings in the substitution are the answer to the query, and any variable of the query which remains unbound is unproven.
    Fixpoint,

    /// The solve made the maximum count of sweeps allowed without reaching a fixpoint.
    SweepLimit,

    /// The solve did not reach a fixpoint within the time allowed.
    TimeUp,

    /// No solve has finished.
    Unknown,
}

impl Report {
    /// Whether a fixpoint was reached.
    pub fn converged(&self) -> bool {
        matches!(self, Self::Fixpoint)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixpoint => write!(f, "Fixpoint"),
            Self::SweepLimit => write!(f, "Sweep limit reached"),
            Self::TimeUp => write!(f, "Time limit reached"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
