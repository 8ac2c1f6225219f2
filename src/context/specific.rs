use crate::{
    config::Config, generic::random::MinimalPCG32, structures::formula::Formula,
    types::err::ErrorKind,
};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context for the given formula from some given
    /// configuration, with a fixed rng seed.
    ///
    /// Runs with the same formula and configuration are deterministic ---
    /// for varied runs see [from_config_seeded](Context::from_config_seeded).
    pub fn from_config(config: Config, formula: Formula) -> Result<Self, ErrorKind> {
        Self::from_config_seeded(config, formula, 0)
    }

    /// As [from_config](Context::from_config), with the rng seeded as given.
    pub fn from_config_seeded(
        config: Config,
        formula: Formula,
        seed: u64,
    ) -> Result<Self, ErrorKind> {
        Self::with_rng(config, formula, MinimalPCG32::from_seed(seed.to_le_bytes()))
    }
}
