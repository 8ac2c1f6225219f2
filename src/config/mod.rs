/*!
Configuration of a context.

All the tunable parameters of a solve are contained in a [Config], fixed when
a context is created.
Nothing reads configuration from shared or global state --- to solve with
different parameters, build a different context.

Each parameter is a [ConfigOption] carrying a name and bounds along with its
value, and [validate](Config::validate) checks every value against its bounds
before a solve touches any search state.
In particular a zero turn or flip budget and a non-positive `epsilon` are
rejected rather than allowed to produce degenerate behaviour.
*/

mod config_option;
pub use config_option::ConfigOption;

mod rng;
pub use rng::PolarityLean;

use crate::types::err::ConfigError;

/// Representation for the make/break exponents of the scoring function.
pub type ScoreExponent = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The exponent applied to the make count when scoring a flip.
    ///
    /// With the default of zero the numerator of every score is constant
    /// (`0^0 = 1` under IEEE `powf`) and scoring degenerates to pure break
    /// minimisation --- the intended default of the heuristic.
    pub make_exponent: ConfigOption<ScoreExponent>,

    /// The exponent applied to the (epsilon-shifted) break count when
    /// scoring a flip.
    pub break_exponent: ConfigOption<ScoreExponent>,

    /// The shift added to the break count before exponentiation, keeping
    /// every score strictly positive.
    pub epsilon: ConfigOption<f64>,

    /// The number of turns, where each turn restarts the search from a fresh
    /// random valuation.
    pub max_turns: ConfigOption<usize>,

    /// The number of flips made during a turn before the turn is abandoned.
    pub max_flips: ConfigOption<usize>,

    /// The probability of assigning positive polarity to an atom when
    /// setting up the valuation of a turn.
    pub polarity_lean: ConfigOption<PolarityLean>,
}

impl Default for Config {
    /// The default configuration mirrors the canonical probSAT break-only
    /// parameterisation: cm = 0, cb = 2.3, ε = 10⁻⁴, one turn of three
    /// hundred flips, and an even polarity lean.
    fn default() -> Self {
        Config {
            make_exponent: ConfigOption {
                name: "make_exponent",
                min: 0.0,
                max: ScoreExponent::MAX,
                value: 0.0,
            },

            break_exponent: ConfigOption {
                name: "break_exponent",
                min: 0.0,
                max: ScoreExponent::MAX,
                value: 2.3,
            },

            epsilon: ConfigOption {
                name: "epsilon",
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: 1e-4,
            },

            max_turns: ConfigOption {
                name: "max_turns",
                min: 1,
                max: usize::MAX,
                value: 1,
            },

            max_flips: ConfigOption {
                name: "max_flips",
                min: 1,
                max: usize::MAX,
                value: 300,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },
        }
    }
}

impl Config {
    /// Ok, if the value of every option falls within the bounds of the
    /// option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.make_exponent.check()?;
        self.break_exponent.check()?;
        self.epsilon.check()?;
        self.max_turns.check()?;
        self.max_flips.check()?;
        self.polarity_lean.check()?;
        Ok(())
    }

    /// The flip budget of a full run: `max_turns × max_flips`.
    pub fn flip_budget(&self) -> usize {
        self.max_turns.value.saturating_mul(self.max_flips.value)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_in_bounds() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_budgets_rejected() {
        let mut config = Config::default();
        config.max_flips.value = 0;
        assert_eq!(
            config.validate(),
            Err(crate::types::err::ConfigError::OutOfBounds("max_flips"))
        );

        let mut config = Config::default();
        config.max_turns.value = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_epsilon_rejected() {
        let mut config = Config::default();
        config.epsilon.value = 0.0;
        assert!(config.validate().is_err());

        config.epsilon.value = -1.0;
        assert!(config.validate().is_err());
    }
}
