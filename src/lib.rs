//! A library for answering queries against a fact base by refutation, with resolution and unification.
//!
//! otter_fol is a small first-order inference engine.
//! Facts relate a subject to an object, e.g. `(pushkin authored vystrel)`, and a query is a conjunction of such relations over variables, together with an answer marker noting the variable of interest.
//!
//! A query is answered by refutation:
//! - The query is negated, and the negation (a clause) is added to the facts.
//! - Every pair of clauses is resolved, repeatedly, until a fixpoint is reached.
//! - Along the way, unification binds the variables of the query, and these bindings are the answer.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), facts and a query are added, and a [solve](crate::procedures::saturate) saturates the clauses of the context.
//! The bindings made during the solve are held in a [substitution](crate::db::substitution), read by the name of a variable.
//!
//! Useful starting points, then, may be:
//! - The [saturation procedure](crate::procedures::saturate) to inspect the dynamics of a solve.
//! - The [unification](crate::procedures::unify) and [resolution](crate::procedures::resolve) procedures for the details of a single step.
//! - The [structures] to familiarise yourself with terms, literals, formulas, and clauses.
//!
//! # Example
//!
//! ```rust
//! # use otter_fol::config::Config;
//! # use otter_fol::context::Context;
//! # use otter_fol::reports::Report;
//! # use otter_fol::structures::formula::Formula;
//! # use otter_fol::structures::literal::{Literal, Predicate};
//! # use otter_fol::structures::term::{Constant, Term};
//! let authored = Constant::new("authored");
//! let main_actor = Constant::new("is_main_actor_of");
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let facts = [
//!     Predicate::new(Term::constant("pushkin"), authored.clone(), Term::constant("vystrel")),
//!     Predicate::new(Term::constant("silvio"), main_actor.clone(), Term::constant("vystrel")),
//! ];
//! for fact in facts {
//!     assert!(the_context.add_fact(fact).is_ok());
//! }
//!
//! // Who authored the work in which Silvio is the main actor?
//! let query = Formula::conjunction([
//!     Formula::from(Literal::answer(Term::variable("X"))),
//!     Formula::from(Predicate::new(Term::variable("X"), authored, Term::variable("W"))),
//!     Formula::from(Predicate::new(Term::constant("silvio"), main_actor, Term::variable("W"))),
//! ])
//! .unwrap();
//!
//! assert!(the_context.add_query(query).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Fixpoint));
//!
//! assert_eq!(the_context.value_of("W"), Some(&Term::constant("vystrel")));
//! assert_eq!(the_context.value_of("X"), Some(&Term::constant("pushkin")));
//! ```
//!
//! # Limits
//!
//! - Predicates are ternary (subject relation object), and there are no function symbols.
//! - Formulas are read as clauses only if each is a disjunction tree, or a conjunction of disjunction trees.
//! - Unification is deliberately weak: a variable is bound only when the remainder of its predicate already agrees with the other predicate.
//! - A solve explores a single line of bindings, and does not backtrack to find other answers.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Bindings can be traced with `RUST_LOG=substitution=trace …` or,
//! - The progress of sweeps can be found with `RUST_LOG=saturation=info …`

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
