/*!
The context --- to which facts and a query are added, and within which a solve takes place.

A context owns:
- A [configuration](crate::config).
- The clauses of the context, each held in a slot which may be emptied as clauses are resolved away.
- The [substitution](crate::db::substitution) of a proof attempt.
- [Counters] of the solve.

The substitution belongs to a single proof attempt, and so once a solve has finished no further clauses may be added to the context.
Though, as the context owns all state of a proof attempt, independent contexts are entirely independent.

# Example

```rust
# use otter_fol::config::Config;
# use otter_fol::context::Context;
# use otter_fol::reports::Report;
# use otter_fol::structures::formula::Formula;
# use otter_fol::structures::literal::{Literal, Predicate};
# use otter_fol::structures::term::{Constant, Term};
let authored = Constant::new("authored");
let mut the_context = Context::from_config(Config::default());

let fact = Predicate::new(Term::constant("pushkin"), authored.clone(), Term::constant("vystrel"));
assert!(the_context.add_fact(fact).is_ok());

let query = Formula::and(
    Literal::answer(Term::variable("X")),
    Predicate::new(Term::variable("X"), authored, Term::constant("vystrel")),
);
assert!(the_context.add_query(query).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Fixpoint));
assert_eq!(the_context.value_of("X"), Some(&Term::constant("pushkin")));
```
*/

mod core;
pub use self::core::Context;
mod counters;
pub use counters::Counters;
mod input;

/// The state of a context.
///
/// States are ordered by the progress of a context, and so configuration which may be changed up to some state may be changed at any earlier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// A solve reached a fixpoint.
    Saturated,

    /// A solve was stopped before reaching a fixpoint.
    Exhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Saturated => write!(f, "Saturated"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
