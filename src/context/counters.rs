/// Counts for various things which count, roughly.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of every flip step taken, across all turns.
    ///
    /// A flip step is counted when entered, and so the step which observes a
    /// satisfying valuation is counted though no flip is made.
    pub total_flips: usize,

    /// A count of turns begun.
    pub turns: usize,

    /// The largest count of simultaneously satisfied clauses observed on any
    /// valuation, across all turns.
    ///
    /// Non-decreasing over a run.
    pub best_satisfied: usize,
}
