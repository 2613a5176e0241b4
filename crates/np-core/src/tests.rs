//! Unit tests for np-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, TransmissionId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(TransmissionId(100) > TransmissionId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(TransmissionId::INVALID.0, u64::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn squared_distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.squared_distance(b), 25.0);
        assert_eq!(b.squared_distance(a), 25.0);
        assert_eq!(a.squared_distance(a), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 5.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{Tick, TickClock};

    #[test]
    fn tick_offset() {
        assert_eq!(Tick(3).offset(2), Tick(5));
        assert_eq!(Tick::ZERO.offset(0), Tick::ZERO);
    }

    #[test]
    fn clock_advances_and_reports_ms() {
        let mut clock = TickClock::new(10);
        for _ in 0..250 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(250));
        assert_eq!(clock.elapsed_ms(), 2_500);
        assert_eq!(clock.to_string(), "T250 (2.500 s)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u64> = (0..16).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn distinct_pair_never_repeats() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let (a, b) = rng.distinct_pair(3).unwrap();
            assert_ne!(a, b);
            assert!(a < 3 && b < 3);
        }
    }

    #[test]
    fn distinct_pair_needs_two() {
        let mut rng = SimRng::new(1);
        assert!(rng.distinct_pair(0).is_none());
        assert!(rng.distinct_pair(1).is_none());
        assert_eq!(rng.distinct_pair(2).map(|(a, b)| a + b), Some(1));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, MeshConfig};

    #[test]
    fn defaults_are_valid() {
        let c = MeshConfig::default();
        c.validate().unwrap();
        assert_eq!(c.ticks_per_hop(), 50);
    }

    #[test]
    fn ticks_per_hop_rounds_up() {
        let c = MeshConfig { transmission_speed: 40.0, ..MeshConfig::default() };
        assert_eq!(c.ticks_per_hop(), 3);
    }

    #[test]
    fn rejects_zero_threshold() {
        let c = MeshConfig { max_conn_distance: 0.0, ..MeshConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_negative_speed() {
        let c = MeshConfig { transmission_speed: -1.0, ..MeshConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_inverted_spawn_bounds() {
        let c = MeshConfig {
            spawn_period_min_ticks: 10,
            spawn_period_max_ticks: 5,
            ..MeshConfig::default()
        };
        let err = c.validate().unwrap_err().to_string();
        assert!(err.contains("spawn-period-min-ticks"), "got {err}");
    }

    #[test]
    fn rejects_zero_fade_in() {
        let c = MeshConfig { fade_in_ticks: 0, ..MeshConfig::default() };
        assert!(c.validate().is_err());
    }
}
