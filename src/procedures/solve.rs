//! Searches for a valuation satisfying the formula of a context.
//!
//! # Overview
//!
//! [solve](crate::procedures::solve) runs the probSAT loop: a bounded number
//! of *turns*, each a bounded number of *flip steps* from a fresh random
//! valuation.
//!
//! A flip step:
//! - Checks the formula against the current valuation, and if every clause
//!   is satisfied the solve ends immediately --- the remaining flip and turn
//!   budget is simply abandoned.
//! - Otherwise, collects the falsified clauses, notes the valuation as the
//!   best seen if strictly more clauses are satisfied than ever before,
//!   picks one falsified clause uniformly at random, and flips the atom the
//!   [scorer](crate::procedures::score) samples from that clause.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!   +------------------>  random_restart
//!   |                           |
//!   |                           ⌄
//!   |   turns remain    +---------------+
//!   +-------------------|   flip step   |<----------------------+
//!   |                   +---------------+                       |
//!   |  no turns remain          |                               |
//!   |                           | formula satisfied?            |
//!   ⌄                           |                               |
//! budget                        +-----> yes: satisfied          |
//! exhausted                     |                               |
//!                               +-----> no: score, flip  -------+
//!                                           (flips remain)
//! ```
//!
//! # Best valuation tracking
//!
//! The best valuation is always a deep copy, taken at the moment of
//! improvement --- holding a reference to the live valuation would let the
//! record drift with later flips.
//! And, the copy is seeded from the initial valuation of the first turn, so
//! a run over a formula which never improves on zero satisfied clauses (an
//! empty formula, say) still returns a well-defined valuation.
//!
//! # Termination
//!
//! A solve always terminates: either some flip step finds the formula
//! satisfied, or `max_turns × max_flips` flip steps are consumed.
//! Exhausting the budget is not evidence of unsatisfiability --- the
//! search is incomplete, and the report in this case is
//! [Unknown](crate::reports::Report::Unknown).

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    reports::Report,
    structures::valuation::Valuation,
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Searches for a valuation satisfying the formula of the context,
    /// within the turn and flip budget of the configuration.
    ///
    /// Returns the report of the terminal state: `Satisfiable` if a
    /// satisfying valuation was found (and remains current on the context),
    /// and otherwise `Unknown`, with the best valuation observed available
    /// through [best_assignment](GenericContext::best_assignment).
    ///
    /// The configuration of the context is checked before anything else, and
    /// an out-of-bounds option is an error.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.config.validate()?;

        let max_turns = self.config.max_turns.value;
        let max_flips = self.config.max_flips.value;
        let clause_count = self.formula.clause_count();

        for turn in 0..max_turns {
            self.random_restart();

            if turn == 0 {
                self.best_valuation.clone_from(&self.valuation);
            }

            self.state = ContextState::Flipping;

            for _ in 0..max_flips {
                self.counters.total_flips += 1;

                if self.formula.satisfied_on(&self.valuation) {
                    self.counters.best_satisfied = clause_count;
                    self.best_valuation.clone_from(&self.valuation);
                    self.state = ContextState::Satisfied;

                    log::info!(target: targets::FLIP, "Satisfied after {} flips", self.counters.total_flips);
                    return Ok(self.report());
                }

                let unsatisfied = self.formula.unsatisfied_clauses(&self.valuation);

                let satisfied_count = clause_count - unsatisfied.len();
                if satisfied_count > self.counters.best_satisfied {
                    self.counters.best_satisfied = satisfied_count;
                    self.best_valuation.clone_from(&self.valuation);

                    log::trace!(target: targets::FLIP, "Best satisfied count now {satisfied_count}");
                }

                let clause_index = unsatisfied[self.rng.random_range(0..unsatisfied.len())];

                let atom = self.choose_flip_atom(clause_index);
                self.valuation.flip(atom);

                log::trace!(target: targets::FLIP, "Flipped atom {atom} for clause {clause_index}");
            }
        }

        self.state = ContextState::BudgetExhausted;
        Ok(self.report())
    }
}
