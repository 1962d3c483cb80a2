//! Saturation of the clauses of a context, by repeated resolution.
//!
//! # Overview
//!
//! A solve is a sequence of *sweeps*.
//! In a sweep, for each ordered pair (*i*, *j*) of distinct slots which both hold a clause, the clauses are [resolved](crate::procedures::resolve) and the remainders are written back to slots *i* and *j*.
//! Remainders are written immediately, and so are seen by every later pair of the sweep.
//!
//! At the end of a sweep, empty slots are removed, and:
//! - If the count of clauses is unchanged by the sweep, a fixpoint has been reached and the solve ends.
//! - Otherwise, another sweep is made.
//!
//! ```none
//!         +-------+     clause count changed
//!   --+-->| sweep |---------------------------+
//!     ⌃   +-------+                           |
//!     |       |                               |
//!     |       | clause count unchanged        |
//!     |       ⌄                               |
//!     |    fixpoint                           |
//!     |                                       |
//!     +---------------------------------------+
//! ```
//!
//! Nothing guarantees a fixpoint is reached, and so a solve is bounded by the [configuration](crate::config) of a context.
//! When a bound is met the solve ends with a report distinct from [Fixpoint](Report::Fixpoint).
//!
//! The answer to a query is not the clauses which remain, but the [substitution](crate::db::substitution) built along the way.
//! Resolving the negation of a query against the facts of the context binds the variables of the query, and the bindings are read by name once the solve has finished.

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Saturates the clauses of the context, returning a report on how the solve ended.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            // A context is solving only within a call to solve.
            ContextState::Solving | ContextState::Saturated | ContextState::Exhausted => {
                return Err(err::StateError::ProofComplete.into())
            }
        }

        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;
        let mut previous_count = self.clauses.len();

        let report = 'solve_loop: loop {
            self.counters.time = total_time.elapsed();

            if self.counters.sweeps >= self.config.max_sweeps.value {
                log::warn!(target: targets::SATURATION, "No fixpoint after {} sweeps", self.counters.sweeps);
                break 'solve_loop Report::SweepLimit;
            }

            if let Some(limit) = self.config.time_limit.value {
                if self.counters.time >= limit {
                    log::warn!(target: targets::SATURATION, "No fixpoint within {limit:?}");
                    break 'solve_loop Report::TimeUp;
                }
            }

            self.counters.sweeps += 1;
            log::info!(target: targets::SATURATION, "Sweep {} over {previous_count} clauses", self.counters.sweeps);

            if let Err(e) = self.sweep() {
                self.state = ContextState::Exhausted;
                return Err(e);
            }

            self.clauses.retain(Option::is_some);
            log::info!(target: targets::SATURATION, "Sweep {} left {} clauses", self.counters.sweeps, self.clauses.len());

            if self.clauses.len() == previous_count {
                break 'solve_loop Report::Fixpoint;
            }
            previous_count = self.clauses.len();
        };

        self.counters.time = total_time.elapsed();
        self.state = match report {
            Report::Fixpoint => ContextState::Saturated,
            _ => ContextState::Exhausted,
        };
        self.report = report;

        log::info!(target: targets::SATURATION, "{report} with substitution {}", self.substitution);
        Ok(report)
    }

    /// A single sweep over every ordered pair of distinct present clauses.
    fn sweep(&mut self) -> Result<(), err::ErrorKind> {
        let slot_count = self.clauses.len();

        for i in 0..slot_count {
            for j in 0..slot_count {
                if i == j {
                    continue;
                }

                let (Some(a), Some(b)) = (&self.clauses[i], &self.clauses[j]) else {
                    continue;
                };

                let before = a.size() + b.size();
                let (a_remainder, b_remainder) = self.substitution.resolve(a, b)?;
                self.counters.resolutions += 1;

                let after = a_remainder.as_ref().map_or(0, |clause| clause.size())
                    + b_remainder.as_ref().map_or(0, |clause| clause.size());
                self.counters.eliminated += before - after;

                self.clauses[i] = a_remainder;
                self.clauses[j] = b_remainder;
            }
        }
        Ok(())
    }
}
