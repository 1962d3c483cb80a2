//! Procedures of inference.
//!
//! For the most part these are methods on [structures](crate::structures), the [substitution](crate::db::substitution::Substitution), or a [context](crate::context::Context), and are primarily placed here for documentation.
//!
//! Leaves first:
//! - [equality], of structures read through a substitution.
//! - [negation], of literals and formulas.
//! - [flatten], to read formulas as clauses.
//! - [unify], to extend a substitution so two literals agree.
//! - [resolve], to remove complementary literals from a pair of clauses.
//! - [saturate], to resolve every pair of clauses until nothing changes.

pub mod equality;
pub mod flatten;
pub mod negation;
pub mod resolve;
pub mod saturate;
pub mod unify;
