/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library
and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [setting up a turn](crate::procedures::restart)
    pub const RESTART: &str = "restart";

    /// Logs related to [flip steps](crate::procedures::solve)
    pub const FLIP: &str = "flip";

    /// Logs related to [scoring and sampling](crate::procedures::score)
    pub const SCORE: &str = "score";
}
