//! Unit tests for lift-motion.

use lift_core::{Direction, Floor, Tick, TripId};

use crate::{MotionEngine, MotionError, MotionPhase};

// ── Trip timing ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod trip {
    use super::*;

    #[test]
    fn duration_is_distance_times_speed() {
        let mut engine = MotionEngine::new(Floor(1));
        let trip = engine.begin_trip(Floor(4), Tick(0), 1_000).unwrap();
        assert_eq!(trip.distance(), 3);
        assert_eq!(trip.duration_ms(), 3_000);
        assert_eq!(trip.arrives_at, Tick(3_000));
        assert_eq!(trip.direction, Direction::Up);
    }

    #[test]
    fn progress_clamped() {
        let mut engine = MotionEngine::new(Floor(5));
        let trip = engine.begin_trip(Floor(1), Tick(1_000), 500).unwrap();
        assert_eq!(trip.progress(Tick(0)), 0.0);
        assert_eq!(trip.progress(Tick(2_000)), 0.5);
        assert_eq!(trip.progress(Tick(10_000)), 1.0);
    }

    #[test]
    fn position_interpolates_downwards() {
        let mut engine = MotionEngine::new(Floor(5));
        engine.begin_trip(Floor(1), Tick(0), 1_000).unwrap();
        assert_eq!(engine.position(Tick(0)), 5.0);
        assert_eq!(engine.position(Tick(2_000)), 3.0);
        assert_eq!(engine.position(Tick(4_000)), 1.0);
    }
}

// ── Phase transitions ─────────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut engine = MotionEngine::new(Floor(1));
        let trip = engine.begin_trip(Floor(3), Tick(0), 1_000).unwrap();
        assert!(engine.car().moving);
        assert_eq!(engine.car().target_floor, Some(Floor(3)));
        assert_eq!(engine.car().current_floor, Floor(1));

        let arrived = engine.arrive(trip.id).unwrap();
        assert_eq!(arrived.to, Floor(3));
        assert_eq!(engine.car().current_floor, Floor(3));
        assert!(!engine.car().moving);
        assert!(matches!(engine.phase(), MotionPhase::Dwelling(_)));
        // Direction persists through the dwell.
        assert_eq!(engine.car().direction, Direction::Up);

        assert!(engine.finish_dwell(trip.id));
        assert_eq!(*engine.phase(), MotionPhase::Idle);
        engine.park();
        assert_eq!(engine.car().direction, Direction::Idle);
    }

    #[test]
    fn cannot_start_while_moving() {
        let mut engine = MotionEngine::new(Floor(1));
        let trip = engine.begin_trip(Floor(3), Tick(0), 1_000).unwrap();
        assert_eq!(
            engine.begin_trip(Floor(5), Tick(10), 1_000),
            Err(MotionError::AlreadyMoving(trip.id))
        );
    }

    #[test]
    fn can_start_from_dwelling() {
        let mut engine = MotionEngine::new(Floor(1));
        let first = engine.begin_trip(Floor(3), Tick(0), 1_000).unwrap();
        engine.arrive(first.id);
        let second = engine.begin_trip(Floor(2), Tick(2_500), 1_000).unwrap();
        assert_eq!(second.direction, Direction::Down);
        // The first trip's dwell timer is now stale.
        assert!(!engine.finish_dwell(first.id));
        assert!(engine.is_moving());
    }

    #[test]
    fn zero_distance_rejected() {
        let mut engine = MotionEngine::new(Floor(2));
        assert_eq!(
            engine.begin_trip(Floor(2), Tick(0), 1_000),
            Err(MotionError::ZeroDistance(Floor(2)))
        );
        assert!(!engine.car().moving);
    }

    #[test]
    fn trip_ids_increase() {
        let mut engine = MotionEngine::new(Floor(1));
        let a = engine.begin_trip(Floor(2), Tick(0), 1_000).unwrap();
        engine.arrive(a.id);
        let b = engine.begin_trip(Floor(1), Tick(2_000), 1_000).unwrap();
        assert!(b.id > a.id);
    }
}

// ── Halt and stale guards ─────────────────────────────────────────────────────

#[cfg(test)]
mod halt {
    use super::*;

    #[test]
    fn halt_mid_trip_stays_at_departure() {
        let mut engine = MotionEngine::new(Floor(1));
        let trip = engine.begin_trip(Floor(5), Tick(0), 1_000).unwrap();
        assert_eq!(engine.halt(), Some(trip));
        assert_eq!(engine.car().current_floor, Floor(1));
        assert_eq!(engine.car().direction, Direction::Idle);
        assert!(!engine.car().moving);
        assert_eq!(engine.car().target_floor, None);

        // The original arrival timer fires later and must not move the car.
        assert_eq!(engine.arrive(trip.id), None);
        assert_eq!(engine.car().current_floor, Floor(1));
    }

    #[test]
    fn halt_while_dwelling_makes_dwell_stale() {
        let mut engine = MotionEngine::new(Floor(1));
        let trip = engine.begin_trip(Floor(2), Tick(0), 1_000).unwrap();
        engine.arrive(trip.id);
        assert_eq!(engine.halt(), None);
        assert!(!engine.finish_dwell(trip.id));
    }

    #[test]
    fn unknown_trip_is_ignored() {
        let mut engine = MotionEngine::new(Floor(1));
        engine.begin_trip(Floor(2), Tick(0), 1_000).unwrap();
        assert_eq!(engine.arrive(TripId(999)), None);
        assert!(engine.is_moving());
    }

    #[test]
    fn reset_keeps_trip_counter() {
        let mut engine = MotionEngine::new(Floor(1));
        let before = engine.begin_trip(Floor(4), Tick(0), 1_000).unwrap();
        engine.reset(Floor(1));
        let after = engine.begin_trip(Floor(4), Tick(0), 1_000).unwrap();
        assert_ne!(before.id, after.id);
        assert_eq!(engine.arrive(before.id), None);
    }
}
