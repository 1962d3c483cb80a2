/*!
Formulas, aka. trees of conjunctions and disjunctions over literals.

Formulas are a convenience for assembling input.
A query is naturally written as a conjunction, and its [negation](crate::procedures::negation) is a disjunction which [flattens](crate::procedures::flatten) to a clause.

```rust
# use otter_fol::structures::formula::Formula;
# use otter_fol::structures::literal::{Literal, Predicate};
# use otter_fol::structures::term::{Constant, Term};
let authored = Constant::new("authored");
let p = Literal::from(Predicate::new(Term::variable("Y"), authored, Term::variable("Z")));
let marker = Literal::answer(Term::variable("Y"));

let query = Formula::and(marker, p);
assert_eq!(query.to_string(), "(answer(Y) & (Y authored Z))");
assert_eq!(query.negate().to_string(), "(answer(Y) | -(Y authored Z))");
```
*/

use crate::structures::literal::{Literal, Predicate};

/// A formula over literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    Literal(Literal),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The conjunction of two formulas.
    pub fn and(a: impl Into<Formula>, b: impl Into<Formula>) -> Self {
        Self::And(Box::new(a.into()), Box::new(b.into()))
    }

    /// The disjunction of two formulas.
    pub fn or(a: impl Into<Formula>, b: impl Into<Formula>) -> Self {
        Self::Or(Box::new(a.into()), Box::new(b.into()))
    }

    /// The left-fold conjunction of some formulas, if there is at least one formula.
    ///
    /// So, `[a, b, c]` is `((a & b) & c)`.
    pub fn conjunction(formulas: impl IntoIterator<Item = impl Into<Formula>>) -> Option<Self> {
        formulas
            .into_iter()
            .map(Into::into)
            .reduce(|acc, formula| Self::and(acc, formula))
    }

    /// The left-fold disjunction of some formulas, if there is at least one formula.
    ///
    /// So, `[a, b, c]` is `((a | b) | c)`.
    pub fn disjunction(formulas: impl IntoIterator<Item = impl Into<Formula>>) -> Option<Self> {
        formulas
            .into_iter()
            .map(Into::into)
            .reduce(|acc, formula| Self::or(acc, formula))
    }

    /// An iterator over every literal in the formula, from left to right.
    pub fn literals(&self) -> Box<dyn Iterator<Item = &Literal> + '_> {
        match self {
            Self::Literal(literal) => Box::new(std::iter::once(literal)),
            Self::And(a, b) | Self::Or(a, b) => Box::new(a.literals().chain(b.literals())),
        }
    }
}

impl From<Literal> for Formula {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Predicate> for Formula {
    fn from(predicate: Predicate) -> Self {
        Self::Literal(Literal::Predicate(predicate))
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::And(a, b) => write!(f, "({a} & {b})"),
            Self::Or(a, b) => write!(f, "({a} | {b})"),
        }
    }
}
