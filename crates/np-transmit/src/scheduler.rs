//! The set of in-flight transmissions and its per-tick update.

use np_core::{NodeId, TransmissionId};

use crate::{Transmission, TransmitError, TransmitResult};

/// What one [`TransmissionScheduler::tick`] did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickOutcome {
    /// Transmissions whose active segment moved this tick.
    pub advanced: usize,
    /// Transmissions removed this tick, in spawn order.
    pub completed: Vec<TransmissionId>,
}

/// Owns every in-flight [`Transmission`].
///
/// Transmissions are kept in spawn order.  Ids are allocated from a
/// monotonic counter and never reused, so a reaped id can never reappear.
#[derive(Debug, Clone)]
pub struct TransmissionScheduler {
    speed: f32,
    active: Vec<Transmission>,
    next_id: u64,
    spawned_total: u64,
    completed_total: u64,
}

impl TransmissionScheduler {
    /// Create an empty scheduler advancing `speed` progress units per tick.
    ///
    /// # Errors
    /// [`TransmitError::InvalidSpeed`] unless `speed` is positive and finite.
    pub fn new(speed: f32) -> TransmitResult<Self> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(TransmitError::InvalidSpeed(speed));
        }
        Ok(Self {
            speed,
            active: Vec::new(),
            next_id: 0,
            spawned_total: 0,
            completed_total: 0,
        })
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start animating `path`.  `mix` is stored for the renderer.
    ///
    /// # Errors
    /// [`TransmitError::PathTooShort`] for paths of fewer than two nodes; the
    /// scheduler is left unchanged.
    pub fn spawn(&mut self, path: &[NodeId], mix: f32) -> TransmitResult<TransmissionId> {
        let id = TransmissionId(self.next_id);
        let transmission =
            Transmission::new(id, path, mix).ok_or(TransmitError::PathTooShort(path.len()))?;
        self.next_id += 1;
        self.spawned_total += 1;
        self.active.push(transmission);
        Ok(id)
    }

    /// Move the active segment of every transmission forward by one step.
    ///
    /// Returns how many transmissions moved.  Completed-but-unreaped
    /// transmissions are left alone.
    pub fn advance(&mut self) -> usize {
        let speed = self.speed;
        self.active.iter_mut().map(|t| t.advance(speed)).filter(|&moved| moved).count()
    }

    /// Remove every transmission whose last segment has reached 100.
    ///
    /// Returns the removed ids in spawn order.
    pub fn reap(&mut self) -> Vec<TransmissionId> {
        let mut done = Vec::new();
        self.active.retain(|t| {
            if t.is_complete() {
                done.push(t.id());
                false
            } else {
                true
            }
        });
        self.completed_total += done.len() as u64;
        done
    }

    /// One simulation step: [`advance`](Self::advance) then
    /// [`reap`](Self::reap).
    pub fn tick(&mut self) -> TickOutcome {
        let advanced = self.advance();
        let completed = self.reap();
        TickOutcome { advanced, completed }
    }

    /// Drop every in-flight transmission without counting it as completed.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn iter(&self) -> impl Iterator<Item = &Transmission> {
        self.active.iter()
    }

    pub fn get(&self, id: TransmissionId) -> Option<&Transmission> {
        self.active.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Transmissions spawned since construction.
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Transmissions reaped since construction.
    pub fn completed_total(&self) -> u64 {
        self.completed_total
    }
}
