/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unification](crate::procedures::unify)
    pub const UNIFY: &str = "unify";

    /// Logs related to [resolution](crate::procedures::resolve)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [saturation](crate::procedures::saturate)
    pub const SATURATION: &str = "saturation";

    /// Logs related to the [substitution](crate::db::substitution)
    pub const SUBSTITUTION: &str = "substitution";

    /// Logs related to adding clauses to a [context](crate::context)
    pub const CLAUSES: &str = "clauses";
}
