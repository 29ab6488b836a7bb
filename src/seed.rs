use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Game numbers known to have no solution, ascending.
pub const UNSOLVABLE_SEEDS: [u32; 8] = [
    11_982, 146_692, 186_216, 455_889, 495_505, 512_118, 517_776, 781_948,
];

/// A game number in `0..=999_999`. It is both the shuffle seed and the
/// number shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Seed(u32);

impl Seed {
    pub const MAX: u32 = 999_999;

    pub fn new(seed: u32) -> Result<Self, EngineError> {
        if seed > Self::MAX {
            return Err(EngineError::InvalidSeed { seed });
        }
        Ok(Self(seed))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Uniformly random game number.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..=Self::MAX))
    }

    /// The following game number, staying at the last game.
    #[inline]
    pub fn next(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// The preceding game number, staying at game 0.
    #[inline]
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    #[inline]
    pub fn is_solvable(self) -> bool {
        is_solvable(self.0)
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for Seed {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Seed::new(value)
    }
}

impl From<Seed> for u32 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// True unless `seed` is one of the known unsolvable deals.
#[inline]
pub fn is_solvable(seed: u32) -> bool {
    UNSOLVABLE_SEEDS.binary_search(&seed).is_err()
}
