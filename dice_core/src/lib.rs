//! dice_core - Die rolls behind an injectable abstraction
//!
//! Everything random in the workspace goes through [`DiceRoller`]: a uniform
//! integer draw in `[1, sides]`. Any `rand` source implements it via a
//! blanket impl, so production code can hand in `thread_rng()` while tests
//! use a seeded ChaCha stream ([`rng_from_seed`]) or a fully scripted
//! [`FixedRolls`] sequence.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Supplies uniformly distributed die rolls.
///
/// `sides` must be at least 1; the result is always in `[1, sides]`.
pub trait DiceRoller {
    fn roll(&mut self, sides: u32) -> u32;
}

/// Every `rand` generator is a die roller.
impl<R: RngCore> DiceRoller for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.gen_range(1..=sides.max(1))
    }
}

/// Roll `count` dice of the given size and sum them.
pub fn roll_sum(dice: &mut (impl DiceRoller + ?Sized), count: u32, sides: u32) -> u32 {
    (0..count).map(|_| dice.roll(sides)).sum()
}

/// A reproducible generator for a given seed.
pub fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A scripted roller that returns a fixed sequence of results.
///
/// Used by tests that need exact outcomes (forced natural 20s, chosen
/// initiative winners). Panics if asked for more rolls than were scripted,
/// so a test that under-provisions its script fails loudly.
#[derive(Debug, Clone, Default)]
pub struct FixedRolls {
    rolls: VecDeque<u32>,
}

impl FixedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        FixedRolls {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceRoller for FixedRolls {
    fn roll(&mut self, sides: u32) -> u32 {
        let roll = self
            .rolls
            .pop_front()
            .expect("FixedRolls ran out of scripted rolls");
        assert!(
            roll >= 1 && roll <= sides,
            "scripted roll {} does not fit a d{}",
            roll,
            sides
        );
        roll
    }
}
