use crate::{
    config::Config,
    reports::{Report, SolveStats},
    structures::{formula::Formula, valuation::CValuation},
    types::err::ErrorKind,
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng).
///
/// A context owns its valuations, counters, and rng exclusively: independent
/// contexts sharing a formula (by clone, or by running over clones of the
/// same formula) never observe one another's state.
///
/// # Example
///
/// ```rust
/// # use stoat_sat::config::Config;
/// # use stoat_sat::context::GenericContext;
/// # use stoat_sat::generic::random::MinimalPCG32;
/// # use stoat_sat::structures::formula::Formula;
/// # use stoat_sat::structures::literal::{CLiteral, Literal};
/// # use rand::SeedableRng;
/// let formula = Formula::new(1, vec![vec![CLiteral::new(1, true)]]);
/// let context = GenericContext::with_rng(
///     Config::default(),
///     formula,
///     MinimalPCG32::from_seed(7_u64.to_le_bytes()),
/// );
/// assert!(context.is_ok());
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The formula of the context.
    pub formula: Formula,

    /// The current valuation, mutated in place by flips.
    pub valuation: CValuation,

    /// A copy of the valuation with the largest observed count of satisfied
    /// clauses.
    ///
    /// Always an independent copy --- never a reference to the live
    /// valuation, which continues to mutate after the copy is made.
    pub best_valuation: CValuation,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericContext<R> {
    /// A context for the given formula, using the given configuration and
    /// source of randomness.
    ///
    /// The configuration is checked up front, and a context is only returned
    /// on a configuration whose every option is within bounds.
    pub fn with_rng(config: Config, formula: Formula, rng: R) -> Result<Self, ErrorKind> {
        config.validate()?;

        let valuation = formula.blank_valuation();
        let best_valuation = valuation.clone();

        Ok(GenericContext {
            config,
            counters: Counters::default(),
            formula,
            valuation,
            best_valuation,
            state: ContextState::Input,
            rng,
        })
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The formula of the context.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The assignment to report for the run: the current valuation if it
    /// satisfies the formula, and otherwise the best valuation observed.
    pub fn best_assignment(&self) -> &CValuation {
        match self.state {
            ContextState::Satisfied => &self.valuation,
            _ => &self.best_valuation,
        }
    }

    /// The diagnostic record of the run so far.
    pub fn stats(&self) -> SolveStats {
        SolveStats {
            total_flips: self.counters.total_flips,
            flip_budget: self.config.flip_budget(),
            best_satisfied: self.counters.best_satisfied,
            clause_count: self.formula.clause_count(),
        }
    }
}
