//! Clauses, aka. a sequence of literals, interpreted as the disjunction of those literals.
//!
//! A clause is obtained by [flattening](crate::procedures::flatten) a disjunction, and the order of the disjunction is kept.
//! Still, two clauses are [equivalent](crate::procedures::equality) when they contain the same literals as multisets, regardless of order.
//!
//! - There is no empty clause. A clause whose every literal has been resolved away is simply absent, and so the constructor [Clause::from_literals] returns an option.
//! - Duplicate literals are kept.
//!
//! ```rust
//! # use otter_fol::structures::clause::Clause;
//! # use otter_fol::structures::literal::Literal;
//! # use otter_fol::structures::term::Term;
//! let x = Literal::answer(Term::variable("X"));
//! let clause = Clause::from_literals(vec![x.clone(), x]).unwrap();
//! assert_eq!(clause.size(), 2);
//!
//! assert!(Clause::from_literals(vec![]).is_none());
//! ```

use crate::{
    db::substitution::Substitution,
    structures::{formula::Formula, literal::Literal},
};

/// A non-empty sequence of literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause of the given literals, if there is at least one literal.
    pub fn from_literals(literals: Vec<Literal>) -> Option<Self> {
        match literals.is_empty() {
            true => None,
            false => Some(Self { literals }),
        }
    }

    /// An iterator over the literals of the clause, in order.
    pub fn literals(&self) -> std::slice::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The clause as the left-fold disjunction of its literals.
    pub fn to_formula(&self) -> Formula {
        match self.literals.split_first() {
            Some((first, rest)) => rest
                .iter()
                .fold(Formula::from(first.clone()), |acc, literal| {
                    Formula::or(acc, literal.clone())
                }),

            None => unreachable!("A clause is never empty"),
        }
    }

    /// The clause with variables read through the given substitution.
    pub fn as_string(&self, substitution: &Substitution) -> String {
        self.literals
            .iter()
            .map(|literal| literal.as_string(substitution))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " | {literal}")?;
        }
        Ok(())
    }
}
