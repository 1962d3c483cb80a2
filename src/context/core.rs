use crate::{
    config::Config,
    db::substitution::Substitution,
    reports::Report,
    structures::{clause::Clause, term::Term},
    types::err::{self},
};

use super::{ContextState, Counters};

/// A context, within which a query is answered against some facts.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The clauses of the context, each in a slot.
    /// Slots are emptied during a sweep, and empty slots are removed at the end of each sweep.
    pub(crate) clauses: Vec<Option<Clause>>,

    /// Bindings made during the proof attempt.
    pub(crate) substitution: Substitution,

    /// The terms carried by answer markers of queries added to the context.
    pub(crate) answer_terms: Vec<Term>,

    /// The report of the most recent solve.
    pub(crate) report: Report,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            state: ContextState::Configuration,
            clauses: Vec::default(),
            substitution: Substitution::default(),
            answer_terms: Vec::default(),
            report: Report::Unknown,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        self.report
    }

    /// The substitution of the proof attempt.
    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// The value of the variable with the given name, if the variable is bound.
    ///
    /// After a solve, an unbound variable is unproven.
    pub fn value_of(&self, name: &str) -> Option<&Term> {
        self.substitution.value_of(name)
    }

    /// Pairs of answer marker terms and their values, in the order queries were added.
    ///
    /// The value of a constant is the constant, and an unbound variable has no value.
    pub fn answers(&self) -> impl Iterator<Item = (&Term, Option<&Term>)> {
        self.answer_terms.iter().map(|term| {
            let value = self.substitution.walk(term);
            match value {
                Term::Constant(_) => (term, Some(value)),
                Term::Variable(_) => (term, None),
            }
        })
    }

    /// An iterator over the (present) clauses of the context.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().flatten()
    }

    /// A count of the (present) clauses of the context.
    pub fn clause_count(&self) -> usize {
        self.clauses().count()
    }

    /// The clauses of the context, with variables read through the substitution.
    pub fn clause_strings(&self) -> Vec<String> {
        self.clauses()
            .map(|clause| clause.as_string(&self.substitution))
            .collect()
    }

    /// Sets the maximum count of sweeps made during a solve.
    pub fn set_max_sweeps(&mut self, sweeps: usize) -> Result<(), err::ConfigError> {
        self.config.max_sweeps.set(sweeps, &self.state)
    }

    /// Sets (or clears) the time limit of a solve.
    pub fn set_time_limit(
        &mut self,
        limit: Option<std::time::Duration>,
    ) -> Result<(), err::ConfigError> {
        self.config.time_limit.set(limit, &self.state)
    }
}
