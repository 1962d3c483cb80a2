/*!
A database of bindings from variables to terms.

The substitution is append-only for the lifetime of a proof attempt:
- A binding, once made, is never removed.
- A bound variable is never rebound to some different term.

And, the substitution is *the* answer to a query, as after a solve the binding of each variable of the query may be read by the name of the variable.

Bindings may be made to a variable, in which case reads [walk](Substitution::walk) through the chain of bindings.
To keep chains finite, a binding is made to the end of the chain of the term given, and a binding of a variable to itself is ignored.

```rust
# use otter_fol::db::substitution::Substitution;
# use otter_fol::structures::term::{Term, Variable};
let mut substitution = Substitution::default();

assert!(substitution.bind(Variable::new("X"), Term::variable("Y")).is_ok());
assert!(substitution.bind(Variable::new("Y"), Term::constant("pushkin")).is_ok());

assert_eq!(substitution.value_of("X"), Some(&Term::constant("pushkin")));
assert!(substitution.bind(Variable::new("Y"), Term::constant("dostoevsky")).is_err());
assert_eq!(substitution.len(), 2);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::term::{Term, Variable},
    types::err::{self},
};

/// Bindings from variables to terms, with the order of binding kept.
#[derive(Clone, Debug, Default)]
pub struct Substitution {
    /// The term each bound variable is bound to.
    bindings: HashMap<Variable, Term>,

    /// Bound variables, in the order they were bound.
    order: Vec<Variable>,
}

impl Substitution {
    /// The term the variable is (directly) bound to, if the variable is bound.
    pub fn lookup(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    pub fn is_bound(&self, variable: &Variable) -> bool {
        self.bindings.contains_key(variable)
    }

    /// The term at the end of the chain of bindings from the given term.
    ///
    /// A constant, or unbound variable, is returned as is.
    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut current = term;
        while let Term::Variable(variable) = current {
            match self.bindings.get(variable) {
                Some(bound) => current = bound,
                None => break,
            }
        }
        current
    }

    /// The value of the variable with the given name, if the variable is bound.
    ///
    /// Chains of bindings are followed, and so the value may be an (unbound) variable only if some variable was bound to a variable.
    pub fn value_of(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name).map(|bound| self.walk(bound))
    }

    /// Binds a variable to (the end of the chain of bindings from) a term.
    ///
    /// - Binding a variable to itself has no effect.
    /// - Binding a bound variable to the term it is already bound to has no effect.
    /// - Binding a bound variable to any other term is an error.
    pub fn bind(&mut self, variable: Variable, term: Term) -> Result<(), err::SubstitutionError> {
        let term = self.walk(&term).clone();

        if term.as_variable() == Some(&variable) {
            return Ok(());
        }

        if let Some(existing) = self.bindings.get(&variable) {
            return match self.walk(existing) == &term {
                true => Ok(()),
                false => {
                    log::warn!(target: targets::SUBSTITUTION, "Refused to rebind {variable} to {term}");
                    Err(err::SubstitutionError::Rebind)
                }
            };
        }

        log::trace!(target: targets::SUBSTITUTION, "Bound {variable} to {term}");
        self.order.push(variable.clone());
        self.bindings.insert(variable, term);
        Ok(())
    }

    /// A count of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// An iterator over (variable, term) bindings, in the order bindings were made.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.order
            .iter()
            .filter_map(|variable| self.bindings.get(variable).map(|term| (variable, term)))
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (variable, term)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable}: {}", self.walk(term))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_and_lookup() {
        let mut substitution = Substitution::default();
        assert!(substitution.is_empty());

        assert!(substitution
            .bind(Variable::new("Z"), Term::constant("idiot"))
            .is_ok());

        assert!(substitution.is_bound(&Variable::new("Z")));
        assert_eq!(substitution.lookup("Z"), Some(&Term::constant("idiot")));
        assert_eq!(substitution.lookup("X"), None);
    }

    #[test]
    fn no_rebind() {
        let mut substitution = Substitution::default();
        let x = Variable::new("X");

        assert!(substitution.bind(x.clone(), Term::constant("pushkin")).is_ok());
        assert_eq!(
            substitution.bind(x.clone(), Term::constant("pushkin")),
            Ok(())
        );
        assert_eq!(
            substitution.bind(x, Term::constant("dostoevsky")),
            Err(err::SubstitutionError::Rebind)
        );
        assert_eq!(substitution.len(), 1);
        assert_eq!(substitution.value_of("X"), Some(&Term::constant("pushkin")));
    }

    #[test]
    fn self_binding_ignored() {
        let mut substitution = Substitution::default();

        assert!(substitution.bind(Variable::new("X"), Term::variable("X")).is_ok());
        assert!(substitution.is_empty());

        // X to Y, and then Y to X would close a loop.
        assert!(substitution.bind(Variable::new("X"), Term::variable("Y")).is_ok());
        assert!(substitution.bind(Variable::new("Y"), Term::variable("X")).is_ok());
        assert_eq!(substitution.len(), 1);
        assert_eq!(substitution.walk(&Term::variable("X")), &Term::variable("Y"));
    }

    #[test]
    fn order_kept() {
        let mut substitution = Substitution::default();
        for (name, value) in [("Z", "idiot"), ("Y", "dostoevsky"), ("X", "pushkin")] {
            assert!(substitution.bind(Variable::new(name), Term::constant(value)).is_ok());
        }

        let names = substitution
            .iter()
            .map(|(variable, _)| variable.name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Z", "Y", "X"]);
        assert_eq!(
            substitution.to_string(),
            "{Z: idiot, Y: dostoevsky, X: pushkin}"
        );
    }
}
