//! Placeholder game math for the daily draw and weekly jackpot.
//!
//! This is a simulation, not a fairness guarantee: winners come from a
//! plain `StdRng` seeded from OS entropy. The eventual VRF/on-chain draw
//! is an external system this module deliberately does not model.

use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Winners per daily draw.
pub const DAILY_WINNERS: usize = 8;

/// Daily entry fee: 1 VMF, tracked in cents.
pub const ENTRY_FEE_CENTS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub winners: Vec<String>,
    /// Prize per winner in cents, parallel to `winners`. The split
    /// remainder goes to the first-drawn winner so no cent is lost.
    pub prizes: Vec<u64>,
    #[serde(rename = "poolCents")]
    pub pool_cents: u64,
    /// What each entrant paid to be in this draw.
    #[serde(rename = "entryFeeCents")]
    pub entry_fee_cents: u64,
}

/// Draws winners and splits pools. Owns its RNG behind a mutex so one
/// instance can be shared through `AppState`.
pub struct GameSimulator {
    rng: Mutex<StdRng>,
}

impl Default for GameSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSimulator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed seed for reproducible draws in tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run one daily draw over `entrants` with `pool_cents` at stake.
    /// With at most [`DAILY_WINNERS`] entrants, everyone wins.
    pub fn daily_draw(&self, entrants: &[String], pool_cents: u64) -> DrawOutcome {
        let winners: Vec<String> = {
            let mut rng = self.rng.lock();
            entrants
                .choose_multiple(&mut *rng, DAILY_WINNERS.min(entrants.len()))
                .cloned()
                .collect()
        };
        let prizes = split_pool(pool_cents, winners.len());
        DrawOutcome {
            winners,
            prizes,
            pool_cents,
            entry_fee_cents: ENTRY_FEE_CENTS,
        }
    }

    /// Simulated topping count for one player, 0..=3 per day played.
    pub fn toppings_earned(&self, days_played: u32) -> u32 {
        let mut rng = self.rng.lock();
        (0..days_played).map(|_| rng.gen_range(0..=3)).sum()
    }
}

/// Split `pool_cents` evenly across `winners`, remainder to the first.
pub fn split_pool(pool_cents: u64, winners: usize) -> Vec<u64> {
    if winners == 0 {
        return Vec::new();
    }
    let share = pool_cents / winners as u64;
    let remainder = pool_cents % winners as u64;
    let mut prizes = vec![share; winners];
    prizes[0] += remainder;
    prizes
}

/// Weekly jackpot share proportional to toppings held.
pub fn jackpot_share(pool_cents: u64, toppings: u64, total_toppings: u64) -> u64 {
    if total_toppings == 0 {
        return 0;
    }
    // u128 intermediate keeps large pools from overflowing.
    ((pool_cents as u128 * toppings as u128) / total_toppings as u128) as u64
}
