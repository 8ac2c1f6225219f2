//! Setting up a turn.
//!
//! Each turn of a solve begins from a fresh valuation, with the value of
//! every atom drawn independently from the rng of the context.
//! The probability of drawing `true` is
//! [polarity_lean](crate::config::Config::polarity_lean), and with the
//! default of ½ the turn begins from a uniformly random point of the search
//! space.
//!
//! Nothing of the previous turn survives a restart except the counters and
//! the best valuation record --- in particular, there is no notion of phase
//! saving across turns.

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Begins a turn: every atom of the valuation takes a fresh random
    /// value.
    pub fn random_restart(&mut self) {
        self.state = ContextState::Initializing;
        self.counters.turns += 1;

        let lean = self.config.polarity_lean.value;
        for value in self.valuation.iter_mut() {
            *value = self.rng.random_bool(lean);
        }

        log::trace!(target: targets::RESTART, "Turn {} begun", self.counters.turns);
    }
}
