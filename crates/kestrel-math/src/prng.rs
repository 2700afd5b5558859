// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::random::RandomSource;

/// Fallback state word used when both seeds are zero (xoroshiro's only bad state).
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Scale mapping the top 53 bits of a `u64` onto `[0, 1)`.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Seedable `xoroshiro128+` generator for reproducible gameplay randomness.
///
/// * Not cryptographically secure.
/// * Matching seeds yield identical sequences on every supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a generator from two 64-bit seed words.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    /// Constructs a generator from a single seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(GOLDEN_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let a = splitmix64(&mut sm_state);
        let b = splitmix64(&mut sm_state);
        Self::from_seed(a, b)
    }

    /// Seeds from OS-backed entropy. The seed is logged at `debug` so a run
    /// can be replayed with [`Prng::from_seed_u64`].
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        debug!(seed, "seeding prng from entropy");
        Self::from_seed_u64(seed)
    }

    /// Returns the next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }
}

impl RandomSource for Prng {
    #[allow(clippy::cast_precision_loss)]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }
}
