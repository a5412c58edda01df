//! Unit tests for lift-schedule.

use std::io::Cursor;

use lift_core::{Command, Direction, Tick};

use crate::{CallScript, RandomTraffic, TimerQueue, load_script_reader};

// ── TimerQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer_queue {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Ev {
        Arrive(u8),
        Dwell,
        Tick,
    }

    #[test]
    fn fires_in_tick_order() {
        let mut q = TimerQueue::new();
        q.schedule(Tick(0), 3_000, Ev::Arrive(4));
        q.schedule(Tick(0), 1_000, Ev::Dwell);
        assert_eq!(q.pop_due(Tick(999)), None);
        assert_eq!(q.pop_due(Tick(10_000)), Some((Tick(1_000), Ev::Dwell)));
        assert_eq!(q.pop_due(Tick(10_000)), Some((Tick(3_000), Ev::Arrive(4))));
        assert_eq!(q.pop_due(Tick(10_000)), None);
        assert!(q.is_empty());
    }

    #[test]
    fn same_tick_is_fifo() {
        let mut q = TimerQueue::new();
        q.schedule(Tick(0), 500, Ev::Arrive(1));
        q.schedule(Tick(0), 500, Ev::Arrive(2));
        q.schedule(Tick(0), 500, Ev::Arrive(3));
        let order: Vec<_> = std::iter::from_fn(|| q.pop_due(Tick(500))).map(|(_, e)| e).collect();
        assert_eq!(order, vec![Ev::Arrive(1), Ev::Arrive(2), Ev::Arrive(3)]);
    }

    #[test]
    fn not_due_yet_stays_queued() {
        let mut q = TimerQueue::new();
        q.schedule(Tick(0), 1_000, Ev::Dwell);
        assert_eq!(q.pop_due(Tick(999)), None);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn periodic_rearms_after_firing() {
        let mut q = TimerQueue::new();
        q.schedule_periodic(Tick(0), 500, Ev::Tick);
        let fired: Vec<Tick> = std::iter::from_fn(|| q.pop_due(Tick(2_000))).map(|(t, _)| t).collect();
        assert_eq!(fired, vec![Tick(500), Tick(1_000), Tick(1_500), Tick(2_000)]);
        // Still armed for the next interval.
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_due(Tick(2_499)), None);
        assert_eq!(q.pop_due(Tick(2_500)), Some((Tick(2_500), Ev::Tick)));
    }

    #[test]
    fn zero_interval_does_not_spin() {
        let mut q = TimerQueue::new();
        q.schedule_periodic(Tick(0), 0, Ev::Tick);
        assert_eq!(q.pop_due(Tick(1)), Some((Tick(1), Ev::Tick)));
        assert_eq!(q.pop_due(Tick(1)), None);
    }
}

// ── CallScript ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod call_script {
    use super::*;

    #[test]
    fn push_keeps_order_and_fifo_on_ties() {
        let mut s = CallScript::empty();
        s.push(Tick(1_000), Command::Submit(5));
        s.push(Tick(0), Command::Submit(3));
        s.push(Tick(1_000), Command::Submit(2));
        let cmds: Vec<_> = s.entries().iter().map(|e| e.command.clone()).collect();
        assert_eq!(cmds, vec![Command::Submit(3), Command::Submit(5), Command::Submit(2)]);
        assert_eq!(s.last_tick(), Some(Tick(1_000)));
    }

    #[test]
    fn merge_interleaves() {
        let mut a = CallScript::empty();
        a.push(Tick(0), Command::Submit(4));
        a.push(Tick(2_000), Command::ToggleEmergency);
        let mut b = CallScript::empty();
        b.push(Tick(1_000), Command::Submit(2));
        let merged = a.merge(b);
        let ticks: Vec<_> = merged.entries().iter().map(|e| e.at).collect();
        assert_eq!(ticks, vec![Tick(0), Tick(1_000), Tick(2_000)]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const SCRIPT: &str = "\
at_ms,action,value,extra\n\
2500,emergency,,\n\
0,call,4,\n\
500,call,2,\n\
4000,maintenance,,\n\
6000,speed,750,\n\
9000,reset,10,1000\n\
";

    #[test]
    fn loads_and_sorts() {
        let script = load_script_reader(Cursor::new(SCRIPT)).unwrap();
        assert_eq!(script.len(), 6);
        let first = &script.entries()[0];
        assert_eq!(first.at, Tick(0));
        assert_eq!(first.command, Command::Submit(4));
        assert_eq!(script.entries()[2].command, Command::ToggleEmergency);
        assert_eq!(script.entries()[3].command, Command::ToggleMaintenance);
        assert_eq!(script.entries()[4].command, Command::SetSpeed(750));
        assert_eq!(
            script.entries()[5].command,
            Command::Reset { floor_count: 10, ms_per_floor: 1_000 }
        );
    }

    #[test]
    fn unknown_action_errors() {
        let csv = "at_ms,action,value,extra\n0,teleport,3,\n";
        let err = load_script_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("teleport"), "got {err}");
    }

    #[test]
    fn call_without_floor_errors() {
        let csv = "at_ms,action,value,extra\n0,call,,\n";
        assert!(load_script_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn reset_without_speed_errors() {
        let csv = "at_ms,action,value,extra\n0,reset,8,\n";
        assert!(load_script_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn hall_calls_keep_direction() {
        let csv = "at_ms,action,value,extra\n0,up,1,\n100,down,5,\n";
        let script = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            script.entries()[0].command,
            Command::Call { floor: 1, direction: Direction::Up }
        );
        assert_eq!(
            script.entries()[1].command,
            Command::Call { floor: 5, direction: Direction::Down }
        );
    }

    #[test]
    fn out_of_range_floor_still_loads() {
        let csv = "at_ms,action,value,extra\n0,call,99,\n";
        let script = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(script.entries()[0].command, Command::Submit(99));
    }
}

// ── RandomTraffic ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use super::*;

    #[test]
    fn same_seed_same_script() {
        let traffic = RandomTraffic::new(10, 2_000, 7);
        assert_eq!(traffic.generate(Tick(0), Tick(60_000)), traffic.generate(Tick(0), Tick(60_000)));
    }

    #[test]
    fn calls_stay_in_building_and_window() {
        let script = RandomTraffic::new(8, 1_000, 42).generate(Tick(5_000), Tick(50_000));
        assert!(!script.is_empty());
        for entry in script.entries() {
            assert!(entry.at >= Tick(5_000) && entry.at < Tick(50_000));
            match entry.command {
                Command::Submit(f) => assert!((1..=8).contains(&f)),
                ref other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn full_ground_bias_calls_lobby() {
        let script = RandomTraffic::new(8, 1_000, 3)
            .with_ground_bias(1.0)
            .generate(Tick(0), Tick(20_000));
        assert!(script.entries().iter().all(|e| e.command == Command::Submit(1)));
    }
}
