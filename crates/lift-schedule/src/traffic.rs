//! Seeded random passenger traffic.
//!
//! `RandomTraffic` turns a seed into a [`CallScript`] of floor calls with
//! uniformly jittered gaps.  The same seed always yields the same script, so
//! a traffic-driven run is as reproducible as a hand-written one.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::{Command, Tick};

use crate::CallScript;

/// Generator for random floor calls.
#[derive(Clone, Debug)]
pub struct RandomTraffic {
    /// Calls are drawn uniformly from `1..=floor_count`.
    pub floor_count: u8,
    /// Mean gap between consecutive calls.  Actual gaps are uniform in
    /// `[mean / 2, mean * 3 / 2]`.
    pub mean_gap_ms: u64,
    /// Probability that a call targets the ground floor regardless of the
    /// uniform draw (lobby-heavy traffic).
    pub ground_bias: f64,
    pub seed:        u64,
}

impl RandomTraffic {
    pub fn new(floor_count: u8, mean_gap_ms: u64, seed: u64) -> Self {
        Self {
            floor_count,
            mean_gap_ms,
            ground_bias: 0.0,
            seed,
        }
    }

    pub fn with_ground_bias(mut self, p: f64) -> Self {
        self.ground_bias = p.clamp(0.0, 1.0);
        self
    }

    /// Generate calls in `[from, until)`.
    pub fn generate(&self, from: Tick, until: Tick) -> CallScript {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut script = CallScript::empty();
        if self.floor_count == 0 {
            return script;
        }

        let lo = (self.mean_gap_ms / 2).max(1);
        let hi = (self.mean_gap_ms * 3 / 2).max(lo);
        let mut at = from + rng.gen_range(lo..=hi);

        while at < until {
            let floor = if rng.gen_bool(self.ground_bias) {
                1
            } else {
                rng.gen_range(1..=self.floor_count as u32)
            };
            script.push(at, Command::Submit(floor));
            at = at + rng.gen_range(lo..=hi);
        }
        script
    }
}
