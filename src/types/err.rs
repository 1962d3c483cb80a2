//! Error types used in the library.
//!
//! - Most of these follow from malformed input --- e.g. a conjunction nested beneath a disjunction, which cannot be read as a clause without conversion to clausal form.
//! - Some guard invariants which the procedures of the library uphold, and so are unexpected --- e.g. an attempt to rebind a variable.
//! - Failure to find an answer is *not* an error.
//!   Rather, a variable of a query is unbound after a solve, and a solve which does not reach a fixpoint returns some [report](crate::reports::Report) to say so.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Formula(FormulaError),
    State(StateError),
    Substitution(SubstitutionError),
    Unify(UnifyError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config: {e:?}"),
            Self::Formula(e) => write!(f, "Formula: {e:?}"),
            Self::State(e) => write!(f, "State: {e:?}"),
            Self::Substitution(e) => write!(f, "Substitution: {e:?}"),
            Self::Unify(e) => write!(f, "Unify: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when configuring a context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value given for the named option is outside the bounds of the option.
    OutOfBounds(&'static str),

    /// The named option may no longer be changed, as the context has moved past configuration.
    InvalidState(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when reading a formula as clauses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A conjunction was found beneath a disjunction.
    ///
    /// Conjunctions are only read at the top of a formula, as a collection of clauses.
    NestedConjunction,
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors in the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A solve has finished, and the substitution now belongs to that proof attempt.
    ProofComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors in the substitution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubstitutionError {
    /// Some attempt was made to rebind a bound variable to a different term.
    /// The unifier only binds unbound variables, so this is unexpected.
    Rebind,
}

impl From<SubstitutionError> for ErrorKind {
    fn from(e: SubstitutionError) -> Self {
        ErrorKind::Substitution(e)
    }
}

/// Errors during unification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnifyError {
    /// An answer marker was given, though only a predicate (or negated predicate) may be unified.
    AnswerMarker,
}

impl From<UnifyError> for ErrorKind {
    fn from(e: UnifyError) -> Self {
        ErrorKind::Unify(e)
    }
}
