//! Plain data row types written by output backends.

/// One in-flight transmission at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionSnapshotRow {
    pub transmission_id: u64,
    pub tick:            u64,
    /// Index of the hop being traversed (1-based segment index).
    pub hop:             u32,
    pub hop_count:       u32,
    pub from_node:       u32,
    pub to_node:         u32,
    /// Progress along the active hop in `[0, 1)`.
    pub fraction:        f32,
    /// Marker position.
    pub x:               f32,
    pub y:               f32,
    pub opacity:         f32,
    pub mix:             f32,
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub elapsed_ms: u64,
    pub visible:    bool,
    pub active:     u64,
    pub advanced:   u64,
    pub completed:  u64,
    /// `TransmissionId::INVALID.0` unless a transmission was spawned this tick.
    pub spawned_id: u64,
}
