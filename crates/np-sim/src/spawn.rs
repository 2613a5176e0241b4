//! Jittered spawn trigger.
//!
//! The trigger only decides *when* a spawn is attempted.  Each time it fires
//! it draws the next delay uniformly from
//! `[spawn_period_min_ticks, spawn_period_max_ticks]` (at least one tick), so
//! spawns never fall into lock-step with the tick cadence.  A firing that is
//! suppressed (hidden, disabled) is dropped and the next one is scheduled
//! from the current tick; missed spawns are never queued or caught up.

use np_core::{SimRng, Tick, TransmissionId};

/// What happened at a tick with respect to spawning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The trigger was not due.
    NotDue,
    /// Due, but the host is hidden or transmissions are disabled.
    Suppressed,
    /// Due, but fewer than two nodes exist.
    TooFewNodes,
    /// Due, but the sampled endpoints are not connected right now.
    NoPath,
    /// A transmission was spawned.
    Spawned(TransmissionId),
}

/// Next-due tick plus the jitter bounds.
#[derive(Clone, Debug)]
pub struct SpawnTrigger {
    min_ticks: u64,
    max_ticks: u64,
    next_due:  Tick,
}

impl SpawnTrigger {
    /// A trigger that first fires at `first_due`.  `min_ticks <= max_ticks`
    /// is checked by `MeshConfig::validate`.
    pub fn new(min_ticks: u64, max_ticks: u64, first_due: Tick) -> Self {
        Self { min_ticks, max_ticks, next_due: first_due }
    }

    pub fn next_due(&self) -> Tick {
        self.next_due
    }

    #[inline]
    pub fn is_due(&self, now: Tick) -> bool {
        now >= self.next_due
    }

    /// Draw the next delay and schedule relative to `now`.
    pub fn reschedule(&mut self, now: Tick, rng: &mut SimRng) -> Tick {
        let delay = rng.gen_range(self.min_ticks..=self.max_ticks).max(1);
        self.next_due = now.offset(delay);
        self.next_due
    }
}
