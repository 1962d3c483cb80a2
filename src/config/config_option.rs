use crate::{context::ContextState, types::err};

/// A configuration option, bounded, and fixed once a context has moved past some state.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: ContextState,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Whether the value lies within the (inclusive) bounds of the option.
    pub fn in_bounds(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Sets the value of the option, if the value is within bounds and the given state does not exceed the max state of the option.
    pub fn set(&mut self, value: T, state: &ContextState) -> Result<(), err::ConfigError> {
        if *state > self.max_state {
            return Err(err::ConfigError::InvalidState(self.name));
        }
        if !self.in_bounds(&value) {
            return Err(err::ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
