use crate::cards::{Card, DECK, DECK_SIZE};

const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;
const RAND_MAX_32: u32 = 0x7FFF_FFFF;

/// The classic 31-bit linear congruential generator behind the
/// historical numbered FreeCell deals.
///
/// State is carried by value; every shuffle builds its own generator.
/// Arithmetic wraps at 32 bits, which leaves the masked low 31 bits
/// identical to the wide-integer recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicRng {
    state: u32,
}

impl ClassicRng {
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return a value in 0..=32767.
    #[inline]
    pub fn draw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & RAND_MAX_32;
        self.state >> 16
    }
}

impl Iterator for ClassicRng {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.draw())
    }
}

/// Shuffle `ordered` for game `seed`.
///
/// Each draw picks `j = draw % remainder` from a working array of ids,
/// deals `work[j]`, then fills the hole with the last live entry. The
/// draw/compaction order must not change: it reproduces the published deals.
pub fn shuffle(seed: u32, ordered: &[Card; DECK_SIZE]) -> [Card; DECK_SIZE] {
    let mut rng = ClassicRng::new(seed);
    let mut work: [usize; DECK_SIZE] = std::array::from_fn(|i| i);
    let mut dealt = [0usize; DECK_SIZE];

    let mut remainder = DECK_SIZE;
    for slot in dealt.iter_mut() {
        let j = rng.draw() as usize % remainder;
        *slot = work[j];
        remainder -= 1;
        work[j] = work[remainder];
    }

    dealt.map(|id| ordered[id])
}

/// Shuffle the standard deck for `seed`.
#[inline]
pub fn deal_for_seed(seed: u32) -> [Card; DECK_SIZE] {
    shuffle(seed, &DECK)
}
