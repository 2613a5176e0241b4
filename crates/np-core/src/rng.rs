//! Deterministic simulation RNG.
//!
//! Every random choice in a run (initial node placement, velocities, spawn
//! jitter, endpoint sampling, colour mix) draws from one `SimRng` seeded from
//! `MeshConfig::seed`, so the same seed always replays the same animation.
//! Path search itself never touches the RNG.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Used only from the single-threaded tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Pick two distinct indices uniformly from `0..n`.
    ///
    /// Returns `None` when `n < 2`.  The second index is drawn from the
    /// remaining `n - 1` slots, so no rejection loop is needed.
    pub fn distinct_pair(&mut self, n: usize) -> Option<(usize, usize)> {
        if n < 2 {
            return None;
        }
        let a = self.0.gen_range(0..n);
        let mut b = self.0.gen_range(0..n - 1);
        if b >= a {
            b += 1;
        }
        Some((a, b))
    }
}
