/*!
Binary resolution of two clauses.

Given clauses *a* and *b*, each literal *f* of *a* is paired with each literal *s* of *b*, in order.
For each pair:
1. *f* and *s* are [unified](crate::procedures::unify), extending the substitution.
2. If *f* is (equivalent to) a literal already resolved during the call, the pair is skipped.
3. If *f* is [equivalent](crate::procedures::equality) to the [negation](crate::procedures::negation) of *s*, then *f* is noted as resolved.

As bindings are held in the substitution, a binding made from one pair is seen by every later pair.

The remainders of the clauses are then:
- For *a*, each literal not equivalent to some resolved literal.
- For *b*, each literal whose negation is not equivalent to some resolved literal.

Order is kept, and a remainder with no literals is absent.

Answer markers are skipped when pairing, and are never resolved.
So, an answer marker is kept in the remainder of its clause, and is carried from resolution to resolution until no other literal remains.

```rust
# use otter_fol::db::substitution::Substitution;
# use otter_fol::structures::clause::Clause;
# use otter_fol::structures::literal::{Literal, Predicate};
# use otter_fol::structures::term::{Constant, Term};
let earlier = Constant::new("lived_earlier_than");
let fact = Literal::from(Predicate::new(Term::constant("pushkin"), earlier.clone(), Term::constant("dostoevsky")));
let query = Clause::from_literals(vec![
    Literal::answer(Term::variable("X")),
    Literal::from(Predicate::new(Term::variable("X"), earlier, Term::constant("dostoevsky"))).negate(),
]).unwrap();

let mut substitution = Substitution::default();
let (fact_remainder, query_remainder) = substitution.resolve(&Clause::from(fact), &query).unwrap();

assert!(fact_remainder.is_none());
assert_eq!(query_remainder.unwrap().as_string(&substitution), "answer(pushkin)");
```
*/

use crate::{
    db::substitution::Substitution,
    misc::log::targets::{self},
    procedures::equality::Equivalent,
    structures::{clause::Clause, literal::Literal},
    types::err::{self},
};

/// The remainders of two clauses after resolution, where a remainder with no literals is absent.
pub type Remainders = (Option<Clause>, Option<Clause>);

impl Substitution {
    /// Resolves `a` with `b`, returning the remainder of each.
    pub fn resolve(&mut self, a: &Clause, b: &Clause) -> Result<Remainders, err::ErrorKind> {
        let mut resolved: Vec<&Literal> = Vec::default();

        for f in a.literals().filter(|literal| !literal.is_answer()) {
            for s in b.literals().filter(|literal| !literal.is_answer()) {
                self.unify(f, s)?;

                if resolved.iter().any(|r| f.equivalent(r, self)) {
                    continue;
                }

                if f.equivalent(&s.negate(), self) {
                    log::trace!(target: targets::RESOLUTION, "Resolved {} with {}", f.as_string(self), s.as_string(self));
                    resolved.push(f);
                }
            }
        }

        if resolved.is_empty() {
            return Ok((Some(a.clone()), Some(b.clone())));
        }

        let a_remainder = a
            .literals()
            .filter(|f| !resolved.iter().any(|r| f.equivalent(r, self)))
            .cloned()
            .collect();

        let b_remainder = b
            .literals()
            .filter(|s| {
                let complement = s.negate();
                !resolved.iter().any(|r| complement.equivalent(r, self))
            })
            .cloned()
            .collect();

        let remainders = (
            Clause::from_literals(a_remainder),
            Clause::from_literals(b_remainder),
        );

        log::debug!(target: targets::RESOLUTION,
            "Remainders: {} and {}",
            remainders.0.as_ref().map_or("⊥".to_string(), |clause| clause.as_string(self)),
            remainders.1.as_ref().map_or("⊥".to_string(), |clause| clause.as_string(self)),
        );

        Ok(remainders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        literal::Predicate,
        term::{Constant, Term},
    };

    fn authored(subject: Term, object: Term) -> Literal {
        Literal::from(Predicate::new(subject, Constant::new("authored"), object))
    }

    #[test]
    fn complementary_units_contract() {
        let mut substitution = Substitution::default();

        let p = authored(Term::constant("pushkin"), Term::constant("vystrel"));
        let a = Clause::from(p.clone());
        let b = Clause::from(p.negate());

        assert_eq!(substitution.resolve(&a, &b), Ok((None, None)));
        assert!(substitution.is_empty());
    }

    #[test]
    fn unrelated_clauses_untouched() {
        let mut substitution = Substitution::default();

        let a = Clause::from(authored(Term::constant("pushkin"), Term::constant("vystrel")));
        let b = Clause::from(authored(Term::constant("dostoevsky"), Term::constant("idiot")).negate());

        let (a_remainder, b_remainder) = substitution.resolve(&a, &b).unwrap();
        assert_eq!(a_remainder, Some(a));
        assert_eq!(b_remainder, Some(b));
    }

    #[test]
    fn same_polarity_untouched() {
        let mut substitution = Substitution::default();

        let p = authored(Term::constant("pushkin"), Term::constant("vystrel"));
        let a = Clause::from(p.clone());

        let (a_remainder, b_remainder) = substitution.resolve(&a, &a).unwrap();
        assert_eq!(a_remainder, Some(a.clone()));
        assert_eq!(b_remainder, Some(a));
    }

    #[test]
    fn answer_marker_survives() {
        let mut substitution = Substitution::default();

        let fact = Clause::from(authored(Term::constant("dostoevsky"), Term::constant("idiot")));
        let marker = Literal::answer(Term::variable("Y"));
        let query = Clause::from_literals(vec![
            marker.clone(),
            authored(Term::variable("Y"), Term::constant("idiot")).negate(),
        ])
        .unwrap();

        let (fact_remainder, query_remainder) = substitution.resolve(&fact, &query).unwrap();
        assert!(fact_remainder.is_none());
        assert_eq!(query_remainder, Some(Clause::from(marker.clone())));
        assert_eq!(substitution.value_of("Y"), Some(&Term::constant("dostoevsky")));

        // Only a marker remains, and so nothing more happens.
        let marker_clause = Clause::from(marker);
        let (marker_remainder, fact_remainder) = substitution
            .resolve(&marker_clause, &fact)
            .unwrap();
        assert_eq!(marker_remainder, Some(marker_clause));
        assert_eq!(fact_remainder, Some(fact));
    }

    #[test]
    fn duplicates_resolved_together() {
        let mut substitution = Substitution::default();

        let p = authored(Term::constant("pushkin"), Term::constant("vystrel"));
        let q = authored(Term::constant("dostoevsky"), Term::constant("idiot"));

        let a = Clause::from_literals(vec![p.clone(), q.clone(), p.clone()]).unwrap();
        let b = Clause::from(p.negate());

        let (a_remainder, b_remainder) = substitution.resolve(&a, &b).unwrap();
        assert_eq!(a_remainder, Some(Clause::from(q)));
        assert!(b_remainder.is_none());
    }
}
