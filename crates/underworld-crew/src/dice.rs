//! Injectable randomness.
//!
//! Every probabilistic rule draws through a [`RollSource`] instead of a
//! global generator, so tests can script the exact rolls a scenario needs.
//! Rolls are uniform in `[0, 1)` at basis-point resolution.

use std::collections::VecDeque;

use rand::Rng;
use rust_decimal::Decimal;

/// Number of distinct roll values (basis points).
pub const ROLL_RESOLUTION: u32 = 10_000;

/// Decimal scale matching [`ROLL_RESOLUTION`].
const ROLL_SCALE: u32 = 4;

/// A source of uniform random draws.
pub trait RollSource {
    /// A uniform draw in `[0, 1)`.
    fn roll(&mut self) -> Decimal;

    /// A uniform index in `[0, len)`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RollSource`].
#[derive(Debug, Clone)]
pub struct RngRolls<R> {
    rng: R,
}

impl<R: Rng> RngRolls<R> {
    /// Wrap a generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for RngRolls<R> {
    fn roll(&mut self) -> Decimal {
        let bp: u32 = self.rng.random_range(0..ROLL_RESOLUTION);
        Decimal::new(i64::from(bp), ROLL_SCALE)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of rolls and picks.
///
/// When the queue runs dry, rolls return `0` and picks return `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<Decimal>,
    picks: VecDeque<usize>,
}

impl ScriptedRolls {
    /// Script the given rolls, in order.
    pub fn new(rolls: impl IntoIterator<Item = Decimal>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: VecDeque::new(),
        }
    }

    /// Also script index picks, in order.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks = picks.into_iter().collect();
        self
    }

    /// Rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> Decimal {
        self.rolls.pop_front().unwrap_or(Decimal::ZERO)
    }

    fn pick(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().unwrap_or(0);
        if index < len { index } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rng_rolls_stay_in_unit_interval() {
        let mut rolls = RngRolls::new(SmallRng::seed_from_u64(42));
        for _ in 0..1000 {
            let roll = rolls.roll();
            assert!(roll >= Decimal::ZERO);
            assert!(roll < Decimal::ONE);
        }
    }

    #[test]
    fn rng_rolls_are_reproducible() {
        let mut a = RngRolls::new(SmallRng::seed_from_u64(7));
        let mut b = RngRolls::new(SmallRng::seed_from_u64(7));
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
            assert_eq!(a.pick(6), b.pick(6));
        }
    }

    #[test]
    fn pick_of_empty_range_is_zero() {
        let mut rolls = RngRolls::new(SmallRng::seed_from_u64(1));
        assert_eq!(rolls.pick(0), 0);
    }

    #[test]
    fn scripted_rolls_replay_then_fall_back_to_zero() {
        let mut rolls = ScriptedRolls::new([dec!(0.95), dec!(0.05)]);
        assert_eq!(rolls.remaining(), 2);
        assert_eq!(rolls.roll(), dec!(0.95));
        assert_eq!(rolls.roll(), dec!(0.05));
        assert_eq!(rolls.roll(), Decimal::ZERO);
    }

    #[test]
    fn scripted_picks_ignore_out_of_range_indices() {
        let mut rolls = ScriptedRolls::default().with_picks([2, 9]);
        assert_eq!(rolls.pick(4), 2);
        assert_eq!(rolls.pick(4), 0);
        assert_eq!(rolls.pick(4), 0);
    }
}
