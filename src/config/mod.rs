/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each option is a [ConfigOption] which records bounds on the option and the last [state](crate::context::ContextState) of a context at which the option may be changed.

Saturation has no guarantee of termination, and so the configuration bounds a solve:
- By a count of sweeps over the clauses of a context.
- By time, optionally.

```rust
# use otter_fol::config::Config;
# use otter_fol::context::Context;
# use otter_fol::types::err;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.set_max_sweeps(16).is_ok());
assert_eq!(the_context.config.max_sweeps.value, 16);

assert_eq!(
    the_context.set_max_sweeps(0),
    Err(err::ConfigError::OutOfBounds("max_sweeps"))
);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The most sweeps over all pairs of clauses made during a solve.
    pub max_sweeps: ConfigOption<usize>,

    /// The time limit for a solve, if any.
    pub time_limit: ConfigOption<Option<Duration>>,
}

impl Default for Config {
    /// The default allows for ample sweeps on small problems, without a time limit.
    fn default() -> Self {
        Config {
            max_sweeps: ConfigOption {
                name: "max_sweeps",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Configuration,
                value: 1024,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(Duration::MAX),
                max_state: ContextState::Configuration,
                value: None,
            },
        }
    }
}
