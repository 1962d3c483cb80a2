//! The complement of a literal, or formula.
//!
//! Negation of a formula follows De Morgan, and so the negation of a conjunction of literals is a disjunction of negated literals --- which is to say, a clause.
//! This is how a query joins the facts of a context: the query is negated, and [refutation](crate::procedures::saturate) of the negation is sought.
//!
//! - The negation of a predicate *p* is *-p*, and the negation of *-p* is *p*.
//! - An answer marker is its own negation.
//!
//! ```rust
//! # use otter_fol::structures::formula::Formula;
//! # use otter_fol::structures::literal::{Literal, Predicate};
//! # use otter_fol::structures::term::{Constant, Term};
//! let p = Literal::from(Predicate::new(Term::variable("X"), Constant::new("r"), Term::variable("Y")));
//! let marker = Literal::answer(Term::variable("X"));
//!
//! assert_eq!(p.negate().negate(), p);
//! assert_eq!(marker.negate(), marker);
//!
//! let query = Formula::and(Formula::or(marker.clone(), p.clone()), p.clone());
//! assert_eq!(query.negate().negate(), query);
//! ```

use crate::structures::{formula::Formula, literal::Literal};

impl Literal {
    /// The complement of the literal.
    pub fn negate(&self) -> Self {
        match self {
            Self::Predicate(predicate) => Self::Negation(predicate.clone()),
            Self::Negation(predicate) => Self::Predicate(predicate.clone()),
            Self::Answer(_) => self.clone(),
        }
    }
}

impl Formula {
    /// The De Morgan complement of the formula.
    pub fn negate(&self) -> Self {
        match self {
            Self::Literal(literal) => Self::Literal(literal.negate()),
            Self::And(a, b) => Self::or(a.negate(), b.negate()),
            Self::Or(a, b) => Self::and(a.negate(), b.negate()),
        }
    }
}
