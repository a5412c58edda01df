//! Unit tests for lift-dispatch.

use lift_core::{Direction, Floor, Mode, Modes, Rejection, Tick};
use lift_motion::MotionEngine;

use crate::{Admission, DirectionalScan, DispatchPolicy, Dispatcher, RequestQueue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn admission(current: u8) -> Admission {
    Admission {
        current_floor: Floor(current),
        floor_count:   6,
        modes:         Modes::default(),
    }
}

fn floors(ns: &[u8]) -> Vec<Floor> {
    ns.iter().map(|&n| Floor(n)).collect()
}

// ── RequestQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn admit_records_time() {
        let mut q = RequestQueue::new();
        let req = q.admit(4, &admission(1), Tick(250)).unwrap();
        assert_eq!(req.floor, Floor(4));
        assert_eq!(req.requested_at, Tick(250));
        assert_eq!(q.get(Floor(4)), Some(&req));
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut q = RequestQueue::new();
        q.admit(4, &admission(1), Tick(0)).unwrap();
        assert_eq!(q.admit(4, &admission(1), Tick(500)), Err(Rejection::AlreadyQueued(Floor(4))));
        assert_eq!(q.len(), 1);
        // First timestamp is kept.
        assert_eq!(q.get(Floor(4)).unwrap().requested_at, Tick(0));
    }

    #[test]
    fn current_floor_is_rejected() {
        let mut q = RequestQueue::new();
        assert_eq!(q.admit(3, &admission(3), Tick(0)), Err(Rejection::AlreadyAtFloor(Floor(3))));
        assert!(q.is_empty());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut q = RequestQueue::new();
        assert!(q.admit(0, &admission(1), Tick(0)).unwrap_err().is_invalid_floor());
        assert!(q.admit(7, &admission(1), Tick(0)).unwrap_err().is_invalid_floor());
        assert!(q.is_empty());
    }

    #[test]
    fn mode_rejects_before_anything_else() {
        let mut q = RequestQueue::new();
        let ctx = Admission {
            modes: Modes { emergency: false, maintenance: true },
            ..admission(1)
        };
        // Even an out-of-range floor reports the mode.
        assert_eq!(q.admit(99, &ctx, Tick(0)), Err(Rejection::SuppressedByMode(Mode::Maintenance)));
        assert!(q.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut q = RequestQueue::new();
        q.admit(2, &admission(1), Tick(0)).unwrap();
        q.admit(5, &admission(1), Tick(0)).unwrap();
        assert!(q.remove(Floor(2)).is_some());
        assert!(q.remove(Floor(2)).is_none());
        assert_eq!(q.clear(), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut q = RequestQueue::new();
        for f in [5, 2, 4] {
            q.admit(f, &admission(1), Tick(0)).unwrap();
        }
        assert_eq!(q.peek_ordered(&DirectionalScan, Direction::Down), floors(&[5, 4, 2]));
        assert_eq!(q.floors(), floors(&[2, 4, 5]));
    }
}

// ── DirectionalScan ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;

    #[test]
    fn up_and_idle_ascend() {
        let pending = floors(&[5, 1, 3]);
        assert_eq!(DirectionalScan.order(&pending, Direction::Up), floors(&[1, 3, 5]));
        assert_eq!(DirectionalScan.order(&pending, Direction::Idle), floors(&[1, 3, 5]));
    }

    #[test]
    fn down_descends() {
        let pending = floors(&[2, 6, 4]);
        assert_eq!(DirectionalScan.order(&pending, Direction::Down), floors(&[6, 4, 2]));
    }

    #[test]
    fn order_is_monotonic_for_every_subset() {
        // Every subset of floors 1..=6.
        for mask in 0u32..64 {
            let pending: Vec<Floor> = (1..=6u8).filter(|f| mask & (1 << (f - 1)) != 0).map(Floor).collect();
            let up = DirectionalScan.order(&pending, Direction::Up);
            assert!(up.windows(2).all(|w| w[0] <= w[1]), "up {up:?}");
            let down = DirectionalScan.order(&pending, Direction::Down);
            assert!(down.windows(2).all(|w| w[0] >= w[1]), "down {down:?}");
        }
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn scan_order_not_arrival_order() {
        let mut q = RequestQueue::new();
        q.admit(5, &admission(1), Tick(0)).unwrap();
        q.admit(2, &admission(1), Tick(10)).unwrap();
        let mut engine = MotionEngine::new(Floor(1));
        let trip = Dispatcher::<DirectionalScan>::default()
            .dispatch(&q, &mut engine, Modes::default(), Tick(10), 1_000)
            .unwrap();
        assert_eq!(trip.to, Floor(2));
        assert!(engine.is_moving());
    }

    #[test]
    fn no_op_while_moving() {
        let mut q = RequestQueue::new();
        q.admit(5, &admission(1), Tick(0)).unwrap();
        let mut engine = MotionEngine::new(Floor(1));
        let d = Dispatcher::new(DirectionalScan);
        let first = d.dispatch(&q, &mut engine, Modes::default(), Tick(0), 1_000).unwrap();
        q.admit(3, &admission(1), Tick(5)).unwrap();
        assert_eq!(d.dispatch(&q, &mut engine, Modes::default(), Tick(5), 1_000), None);
        assert_eq!(engine.current_trip(), Some(&first));
    }

    #[test]
    fn no_op_when_empty_or_mode_on() {
        let d = Dispatcher::new(DirectionalScan);
        let mut engine = MotionEngine::new(Floor(1));
        let empty = RequestQueue::new();
        assert_eq!(d.dispatch(&empty, &mut engine, Modes::default(), Tick(0), 1_000), None);

        let mut q = RequestQueue::new();
        q.admit(4, &admission(1), Tick(0)).unwrap();
        let emergency = Modes { emergency: true, maintenance: false };
        assert_eq!(d.dispatch(&q, &mut engine, emergency, Tick(0), 1_000), None);
        assert!(!engine.is_moving());
    }

    #[test]
    fn follows_down_direction_after_descending_trip() {
        let d = Dispatcher::new(DirectionalScan);
        let mut engine = MotionEngine::new(Floor(6));
        let trip = engine.begin_trip(Floor(4), Tick(0), 1_000).unwrap();
        engine.arrive(trip.id);

        let mut q = RequestQueue::new();
        q.admit(5, &admission(4), Tick(0)).unwrap();
        q.admit(1, &admission(4), Tick(0)).unwrap();
        q.admit(3, &admission(4), Tick(0)).unwrap();
        assert_eq!(d.next_target(&q, &engine, Modes::default()), Some(Floor(5)));
    }
}
