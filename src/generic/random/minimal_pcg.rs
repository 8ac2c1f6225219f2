//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32
//! implementation from <https://www.pcg-random.org/> implemented to satisfy
//! the [RngCore](rand_core::RngCore) trait.[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it
//! is simple, fast, and has some nice supporting documentation.
//!
//! Every random draw of a solve --- the valuation of a turn, the pick of an
//! unsatisfied clause, the weighted sample of a literal --- routes through
//! the single rng stored in a [context](crate::context).
//! The context is parameterised to anything which satisfies [Rng](rand::Rng),
//! so revising the paramater is all that's needed for a different source of
//! rng.
//!
//! [^note]: At the time of writing, the C implementation is at the top of
//! the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Odd, as the increment of a PCG must be.
        /// Otherwise, entirely unmotivated.
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(2_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn distinct_seeds_distinct_sequences() {
        let mut a = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(73_u64.to_le_bytes());

        let from_a = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let from_b = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();

        assert_ne!(from_a, from_b);
    }
}
