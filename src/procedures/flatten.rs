/*!
Reading formulas as clauses.

A disjunction tree is flattened (or, *enrolled*) into the sequence of its literals, left to right.
Duplicates are kept, and so flattening the left-fold disjunction of some sequence of literals returns that very sequence.

A formula whose top is a conjunction is read as a collection of clauses, one for each conjunct.
Though, a conjunction beneath a disjunction is an error --- distributing the disjunction over the conjunction is conversion to clausal form, which is not supported.

```rust
# use otter_fol::structures::formula::Formula;
# use otter_fol::structures::literal::{Literal, Predicate};
# use otter_fol::structures::term::{Constant, Term};
# use otter_fol::types::err;
let r = Constant::new("r");
let p = Literal::from(Predicate::new(Term::constant("a"), r.clone(), Term::constant("b")));
let q = Literal::from(Predicate::new(Term::constant("b"), r, Term::constant("c")));

let clause = Formula::or(Formula::or(p.clone(), q.clone()), p.clone());
assert_eq!(clause.enroll(), Ok(vec![p.clone(), q.clone(), p.clone()]));

let two_clauses = Formula::and(p.clone(), Formula::or(q.clone(), p.clone()));
assert_eq!(two_clauses.clauses().map(|clauses| clauses.len()), Ok(2));

let nested = Formula::or(p.clone(), Formula::and(q, p));
assert_eq!(nested.enroll(), Err(err::FormulaError::NestedConjunction));
```
*/

use crate::{
    structures::{clause::Clause, formula::Formula, literal::Literal},
    types::err::{self},
};

impl Formula {
    /// The literals of a disjunction tree, in order.
    pub fn enroll(&self) -> Result<Vec<Literal>, err::FormulaError> {
        let mut literals = Vec::default();
        self.enroll_into(&mut literals)?;
        Ok(literals)
    }

    fn enroll_into(&self, literals: &mut Vec<Literal>) -> Result<(), err::FormulaError> {
        match self {
            Self::Literal(literal) => {
                literals.push(literal.clone());
                Ok(())
            }

            Self::Or(a, b) => {
                a.enroll_into(literals)?;
                b.enroll_into(literals)
            }

            Self::And(_, _) => Err(err::FormulaError::NestedConjunction),
        }
    }

    /// The clauses of the formula, read as a conjunction of disjunction trees.
    pub fn clauses(&self) -> Result<Vec<Clause>, err::FormulaError> {
        let mut clauses = Vec::default();
        self.clauses_into(&mut clauses)?;
        Ok(clauses)
    }

    fn clauses_into(&self, clauses: &mut Vec<Clause>) -> Result<(), err::FormulaError> {
        match self {
            Self::And(a, b) => {
                a.clauses_into(clauses)?;
                b.clauses_into(clauses)
            }

            _ => {
                // A disjunction tree always has some literal.
                if let Some(clause) = Clause::from_literals(self.enroll()?) {
                    clauses.push(clause);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::structures::{
        clause::Clause,
        formula::Formula,
        literal::{Literal, Predicate},
        term::{Constant, Term},
    };

    fn main_actor(subject: &str, object: &str) -> Literal {
        Literal::from(Predicate::new(
            Term::constant(subject),
            Constant::new("is_main_actor_of"),
            Term::constant(object),
        ))
    }

    #[test]
    fn flatten_rebuild() {
        let literals = vec![
            main_actor("silvio", "vystrel"),
            main_actor("mishkin", "idiot"),
            main_actor("silvio", "vystrel"),
            Literal::answer(Term::variable("X")),
        ];

        let disjunction = Formula::disjunction(literals.clone()).unwrap();
        assert_eq!(disjunction.enroll(), Ok(literals.clone()));

        let clause = Clause::from_literals(literals).unwrap();
        assert_eq!(clause.to_formula(), disjunction);
    }

    #[test]
    fn leaf_is_unit() {
        let leaf = main_actor("raskolnikov", "crime_and_punishment");
        assert_eq!(Formula::from(leaf.clone()).enroll(), Ok(vec![leaf]));
    }

    #[test]
    fn top_level_conjunction() {
        let p = main_actor("silvio", "vystrel");
        let q = main_actor("mishkin", "idiot");

        let formula = Formula::conjunction([
            Formula::from(p.clone()),
            Formula::or(p.clone(), q.clone()),
            Formula::from(q.clone()),
        ])
        .unwrap();

        let clauses = formula.clauses().unwrap();
        let sizes = clauses.iter().map(Clause::size).collect::<Vec<_>>();
        assert_eq!(sizes, vec![1, 2, 1]);
    }
}
