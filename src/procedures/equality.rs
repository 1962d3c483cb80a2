/*!
Structural equality and hashing, relative to a substitution.

Two structures are *equivalent* on a substitution when they have the same shape and each corresponding field is equal after each variable is replaced by (the end of the chain of) its binding.
So, `(X authored idiot)` and `(dostoevsky authored idiot)` are equivalent on any substitution which binds `X` to `dostoevsky`, and on no other substitution.

Clauses are equivalent when their literals are equivalent as multisets --- order is ignored, though duplicates are counted.

Hashing follows the same reading of variables, and so equivalent structures hash alike.
For clauses the hashes of literals are combined by (wrapping) summation, which respects multiset equivalence at the cost of being a weak combinator.

```rust
# use otter_fol::db::substitution::Substitution;
# use otter_fol::procedures::equality::Equivalent;
# use otter_fol::structures::literal::Predicate;
# use otter_fol::structures::term::{Constant, Term, Variable};
let authored = Constant::new("authored");
let open = Predicate::new(Term::variable("X"), authored.clone(), Term::constant("idiot"));
let fact = Predicate::new(Term::constant("dostoevsky"), authored, Term::constant("idiot"));

let mut substitution = Substitution::default();
assert!(!open.equivalent(&fact, &substitution));

assert!(substitution.bind(Variable::new("X"), Term::constant("dostoevsky")).is_ok());
assert!(open.equivalent(&fact, &substitution));
```
*/

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::{
    db::substitution::Substitution,
    structures::{
        clause::Clause,
        formula::Formula,
        literal::{Literal, Predicate},
        term::Term,
    },
};

/// Equality and hashing of structures, with variables read through a substitution.
pub trait Equivalent {
    /// Whether the structure is equivalent to `other` on the substitution.
    fn equivalent(&self, other: &Self, substitution: &Substitution) -> bool;

    /// Feeds the structure, read through the substitution, to the given hasher.
    fn structural_hash<H: Hasher>(&self, substitution: &Substitution, state: &mut H);
}

impl Equivalent for Term {
    fn equivalent(&self, other: &Self, substitution: &Substitution) -> bool {
        substitution.walk(self) == substitution.walk(other)
    }

    fn structural_hash<H: Hasher>(&self, substitution: &Substitution, state: &mut H) {
        substitution.walk(self).hash(state);
    }
}

impl Equivalent for Predicate {
    fn equivalent(&self, other: &Self, substitution: &Substitution) -> bool {
        self.relation == other.relation
            && self.transitive == other.transitive
            && self.subject.equivalent(&other.subject, substitution)
            && self.object.equivalent(&other.object, substitution)
    }

    fn structural_hash<H: Hasher>(&self, substitution: &Substitution, state: &mut H) {
        self.subject.structural_hash(substitution, state);
        self.relation.hash(state);
        self.object.structural_hash(substitution, state);
        self.transitive.hash(state);
    }
}

impl Equivalent for Literal {
    fn equivalent(&self, other: &Self, substitution: &Substitution) -> bool {
        match (self, other) {
            (Self::Predicate(a), Self::Predicate(b)) | (Self::Negation(a), Self::Negation(b)) => {
                a.equivalent(b, substitution)
            }

            (Self::Answer(a), Self::Answer(b)) => a.equivalent(b, substitution),

            _ => false,
        }
    }

    fn structural_hash<H: Hasher>(&self, substitution: &Substitution, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Predicate(predicate) | Self::Negation(predicate) => {
                predicate.structural_hash(substitution, state)
            }
            Self::Answer(term) => term.structural_hash(substitution, state),
        }
    }
}

impl Equivalent for Formula {
    fn equivalent(&self, other: &Self, substitution: &Substitution) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a.equivalent(b, substitution),

            (Self::And(a_one, a_two), Self::And(b_one, b_two))
            | (Self::Or(a_one, a_two), Self::Or(b_one, b_two)) => {
                a_one.equivalent(b_one, substitution) && a_two.equivalent(b_two, substitution)
            }

            _ => false,
        }
    }

    fn structural_hash<H: Hasher>(&self, substitution: &Substitution, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Literal(literal) => literal.structural_hash(substitution, state),
            Self::And(a, b) | Self::Or(a, b) => {
                a.structural_hash(substitution, state);
                b.structural_hash(substitution, state);
            }
        }
    }
}

impl Equivalent for Clause {
    fn equivalent(&self, other: &Self, substitution: &Substitution) -> bool {
        if self.size() != other.size() {
            return false;
        }

        // As equivalence (on a fixed substitution) is an equivalence relation, a greedy match suffices.
        let mut matched = vec![false; other.size()];
        'literal_loop: for literal in self.literals() {
            for (index, candidate) in other.literals().enumerate() {
                if !matched[index] && literal.equivalent(candidate, substitution) {
                    matched[index] = true;
                    continue 'literal_loop;
                }
            }
            return false;
        }
        true
    }

    fn structural_hash<H: Hasher>(&self, substitution: &Substitution, state: &mut H) {
        let sum = self.literals().fold(0_u64, |sum, literal| {
            let mut literal_state = DefaultHasher::new();
            literal.structural_hash(substitution, &mut literal_state);
            sum.wrapping_add(literal_state.finish())
        });
        self.size().hash(state);
        sum.hash(state);
    }
}
