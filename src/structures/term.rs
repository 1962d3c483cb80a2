/*!
Terms, aka. the arguments of a predicate.

A term is either a [Constant] or a [Variable]:
- Constants are atomic values, e.g. an entity such as `pushkin`, and are equal exactly when their names are equal.
- Variables are named placeholders, and only ever take a value through a [substitution](crate::db::substitution::Substitution).

Names are shared, so cloning a term is cheap.

```rust
# use otter_fol::structures::term::{Constant, Term, Variable};
let pushkin = Term::from(Constant::new("pushkin"));
let x = Term::from(Variable::new("X"));

assert!(pushkin.is_constant());
assert!(x.is_variable());
assert_eq!(x, Term::variable("X"));
assert_ne!(pushkin, x);
```
*/

use std::{borrow::Borrow, sync::Arc};

/// An atomic symbolic value, identified by its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constant(Arc<str>);

impl Constant {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A named placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Arc<str>);

impl Variable {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

// Allows a substitution to be queried by the name of a variable.
impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A term, either a constant or a variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Constant(Constant),
    Variable(Variable),
}

impl Term {
    /// A constant term with the given name.
    pub fn constant(name: impl AsRef<str>) -> Self {
        Self::Constant(Constant::new(name))
    }

    /// A variable term with the given name.
    pub fn variable(name: impl AsRef<str>) -> Self {
        Self::Variable(Variable::new(name))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// The variable of the term, if the term is a variable.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Constant(_) => None,
            Self::Variable(variable) => Some(variable),
        }
    }
}

impl From<Constant> for Term {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::Variable(variable) => write!(f, "{variable}"),
        }
    }
}
