//! Databases of things learnt during a proof attempt.
//!
//! For the moment, this is only the [substitution] of terms for variables.

pub mod substitution;
