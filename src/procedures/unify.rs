/*!
Unification of (the predicates of) two literals.

Unification extends a substitution with bindings which make the arguments of two literals agree.
Negation is ignored, and so `(X authored idiot)` unifies with `-(dostoevsky authored idiot)`, by binding `X` to `dostoevsky`.

# Procedure

Unification is a pair of passes over the arguments of the two predicates.

For *a* toward *b*, and each position (subject, then object) of *a*:
- If the argument of *a* at the position is an unbound variable, and the argument of *a* at the *other* position is [equivalent](crate::procedures::equality) to the argument of *b* at the other position, then the variable is bound to the argument of *b* at the position.
- Otherwise, nothing happens.

And then, the same pass is made for *b* toward *a*, reading *a* through any bindings just made.

So, a variable is bound only when the remainder of the predicate already agrees.
In particular:
- A predicate with two unbound variables is untouched, unless the other predicate shares a variable.
- The relation of the predicates is not compared.
- A single call need not bind every variable which could be bound.
  Failing to bind is not an error, and a later call may succeed once other bindings have been made --- for which reason [saturation](crate::procedures::saturate) is repeated.

The order of the passes matters, and is kept.

```rust
# use otter_fol::db::substitution::Substitution;
# use otter_fol::structures::literal::{Literal, Predicate};
# use otter_fol::structures::term::{Constant, Term};
let authored = Constant::new("authored");
let open = Literal::from(Predicate::new(Term::variable("Y"), authored.clone(), Term::constant("idiot")));
let fact = Literal::from(Predicate::new(Term::constant("dostoevsky"), authored, Term::constant("idiot")));

let mut substitution = Substitution::default();
assert!(substitution.unify(&open.negate(), &fact).is_ok());
assert_eq!(substitution.value_of("Y"), Some(&Term::constant("dostoevsky")));
```
*/

use crate::{
    db::substitution::Substitution,
    misc::log::targets::{self},
    procedures::equality::Equivalent,
    structures::{literal::Literal, literal::Predicate, term::Term},
    types::err::{self},
};

impl Substitution {
    /// Extends the substitution with bindings which make the arguments of the two literals agree, so far as possible.
    ///
    /// An answer marker has no predicate to unify, and is an error.
    pub fn unify(&mut self, a: &Literal, b: &Literal) -> Result<(), err::ErrorKind> {
        let (Some(a_core), Some(b_core)) = (a.core(), b.core()) else {
            return Err(err::UnifyError::AnswerMarker.into());
        };

        self.unify_toward(a_core, b_core)?;
        self.unify_toward(b_core, a_core)?;
        Ok(())
    }

    /// A pass over the arguments of `from`, binding variables toward `to`.
    fn unify_toward(&mut self, from: &Predicate, to: &Predicate) -> Result<(), err::ErrorKind> {
        self.unify_argument(&from.subject, &from.object, &to.subject, &to.object)?;
        self.unify_argument(&from.object, &from.subject, &to.object, &to.subject)?;
        Ok(())
    }

    /// Binds `argument` to `target`, if `argument` is an unbound variable and `other` is equivalent to `target_other`.
    fn unify_argument(
        &mut self,
        argument: &Term,
        other: &Term,
        target: &Term,
        target_other: &Term,
    ) -> Result<(), err::ErrorKind> {
        let Term::Variable(variable) = argument else {
            return Ok(());
        };

        if self.is_bound(variable) || !other.equivalent(target_other, self) {
            return Ok(());
        }

        log::trace!(target: targets::UNIFY, "Unifying {variable} with {}", self.walk(target));
        self.bind(variable.clone(), target.clone())?;
        Ok(())
    }
}
