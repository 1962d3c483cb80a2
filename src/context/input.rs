//! Methods for adding facts, formulas, and queries to a context.
//!
//! Each method reads its input as clauses and places the clauses in the context, after which the context allows no further configuration.
//! A formula is read as clauses by [flattening](crate::procedures::flatten), and so must be a disjunction tree or a (top-level) conjunction of disjunction trees.

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, literal::Literal},
    types::err::{self},
};

use super::{Context, ContextState};

impl Context {
    /// Adds a single literal as a (unit) clause.
    pub fn add_fact(&mut self, fact: impl Into<Literal>) -> Result<(), err::ErrorKind> {
        self.add_clause(Clause::from(fact.into()))
    }

    /// Adds a clause.
    pub fn add_clause(&mut self, clause: Clause) -> Result<(), err::ErrorKind> {
        self.ready_for_input()?;
        log::trace!(target: targets::CLAUSES, "Added: {clause}");
        self.clauses.push(Some(clause));
        Ok(())
    }

    /// Adds each clause of a formula.
    ///
    /// The formula is read in full before any clause is added, and so on error no clause is added.
    pub fn add_formula(&mut self, formula: &Formula) -> Result<(), err::ErrorKind> {
        self.ready_for_input()?;
        for clause in formula.clauses()? {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Adds the negation of a query, noting the terms of any answer markers in the query.
    ///
    /// The query holds exactly when the negation together with the other clauses of the context is contradictory.
    pub fn add_query(&mut self, query: impl Into<Formula>) -> Result<(), err::ErrorKind> {
        let query = query.into();
        let negation = query.negate();
        log::info!(target: targets::CLAUSES, "Query: {query}, negated to: {negation}");

        self.add_formula(&negation)?;

        for literal in query.literals() {
            if let Literal::Answer(term) = literal {
                self.answer_terms.push(term.clone());
            }
        }
        Ok(())
    }

    fn ready_for_input(&mut self) -> Result<(), err::StateError> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
                Ok(())
            }
            ContextState::Solving | ContextState::Saturated | ContextState::Exhausted => {
                Err(err::StateError::ProofComplete)
            }
        }
    }
}
