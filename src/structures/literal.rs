/*!
Literals, aka. predicates, negated predicates, and answer markers.

A [Predicate] relates a subject term to an object term, e.g. `(pushkin authored vystrel)`.

A [Literal] is a closed collection of shapes:
- A predicate.
- A negated predicate.
- An answer marker, which carries a term (typically a variable of a query) whose binding is the answer sought.

Answer markers are bookkeeping.
They are never resolved against anything, are their own [negation](crate::procedures::negation), and so survive every resolution step --- carrying the variable of interest with them.

```rust
# use otter_fol::structures::literal::{Literal, Predicate};
# use otter_fol::structures::term::{Constant, Term};
let authored = Constant::new("authored");
let fact = Predicate::new(Term::constant("pushkin"), authored, Term::constant("vystrel"));

let literal = Literal::from(fact.clone());
assert_eq!(literal.core(), Some(&fact));
assert_eq!(literal.to_string(), "(pushkin authored vystrel)");
assert_eq!(literal.negate().to_string(), "-(pushkin authored vystrel)");

let answer = Literal::answer(Term::variable("X"));
assert!(answer.core().is_none());
```
*/

use crate::{
    db::substitution::Substitution,
    structures::term::{Constant, Term},
};

/// A ternary fact shape, (subject relation object).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Predicate {
    /// The subject of the predicate.
    pub subject: Term,

    /// The relation between subject and object.
    pub relation: Constant,

    /// The object of the predicate.
    pub object: Term,

    /// Whether the relation is transitive.
    ///
    /// The flag is stored and compared, but no rule of inference consults it.
    pub transitive: bool,
}

impl Predicate {
    pub fn new(subject: impl Into<Term>, relation: Constant, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            relation,
            object: object.into(),
            transitive: false,
        }
    }

    /// The predicate, with the relation marked as transitive (or not).
    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    /// The predicate with subject and object read through the given substitution.
    pub fn as_string(&self, substitution: &Substitution) -> String {
        format!(
            "({} {} {})",
            substitution.walk(&self.subject),
            self.relation,
            substitution.walk(&self.object)
        )
    }
}

/// A literal, as a closed collection of shapes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// A predicate.
    Predicate(Predicate),

    /// The negation of a predicate.
    Negation(Predicate),

    /// A marker for the term whose binding answers a query.
    Answer(Term),
}

impl Literal {
    /// An answer marker for the given term.
    pub fn answer(term: impl Into<Term>) -> Self {
        Self::Answer(term.into())
    }

    /// The predicate of the literal, with any negation peeled off.
    ///
    /// Answer markers have no predicate.
    pub fn core(&self) -> Option<&Predicate> {
        match self {
            Self::Predicate(predicate) | Self::Negation(predicate) => Some(predicate),
            Self::Answer(_) => None,
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }

    /// The literal with variables read through the given substitution.
    pub fn as_string(&self, substitution: &Substitution) -> String {
        match self {
            Self::Predicate(predicate) => predicate.as_string(substitution),
            Self::Negation(predicate) => format!("-{}", predicate.as_string(substitution)),
            Self::Answer(term) => format!("answer({})", substitution.walk(term)),
        }
    }
}

impl From<Predicate> for Literal {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.subject, self.relation, self.object)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Predicate(predicate) => write!(f, "{predicate}"),
            Self::Negation(predicate) => write!(f, "-{predicate}"),
            Self::Answer(term) => write!(f, "answer({term})"),
        }
    }
}
