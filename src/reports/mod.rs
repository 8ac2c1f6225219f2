/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A valuation satisfying the formula of the context was found.
    Satisfiable,

    /// Satisfiability of the formula of the context is unknown, for some
    /// reason.
    ///
    /// In particular, exhausting the flip/turn budget reports unknown: a
    /// local search has no way to rule out the existence of a satisfying
    /// valuation.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Satisfied => Self::Satisfiable,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The diagnostic record of a run, emitted once at termination.
///
/// This is a side channel, not the primary result --- the primary result is
/// the assignment held by the context.
///
/// Displays as four space-separated integers:
/// `total_flips flip_budget best_satisfied clause_count`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SolveStats {
    /// A count of every flip step taken, across all turns.
    pub total_flips: usize,

    /// The theoretical maximum count of flip steps: `max_turns × max_flips`.
    pub flip_budget: usize,

    /// The largest count of simultaneously satisfied clauses observed.
    pub best_satisfied: usize,

    /// A count of the clauses of the formula.
    pub clause_count: usize,
}

impl std::fmt::Display for SolveStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.total_flips, self.flip_budget, self.best_satisfied, self.clause_count
        )
    }
}
