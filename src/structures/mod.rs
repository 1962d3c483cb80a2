//! Key structures, such as terms, literals, formulas, and clauses.
//!
//! Structures are built once, from facts and a query, and are never mutated afterwards.
//! Instead, what is learnt about a variable during a proof attempt is recorded in a [substitution](crate::db::substitution), and read through the substitution whenever a structure is compared or rendered.
//!
//! # Terms
//!
//! A [term](term::Term) is either a [constant](term::Constant) or a [variable](term::Variable).
//! Both are identified by name, and two variables with the same name are the same variable.
//!
//! # Literals
//!
//! A [literal](literal::Literal) is one of:
//! - A [predicate](literal::Predicate), of the shape (subject relation object).
//! - The negation of a predicate.
//! - An answer marker, which carries a term whose binding is the answer to a query.
//!
//! # Formulas and clauses
//!
//! A [formula](formula::Formula) is a tree of conjunctions and disjunctions over literals.
//! Formulas exist only while input is being assembled, and are turned into [clauses](clause::Clause) when added to a [context](crate::context).
//!
//! A clause is a sequence of literals, interpreted as the disjunction of those literals.
//! Order is kept (to keep things reproducible), though a clause is compared as a multiset.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod term;
