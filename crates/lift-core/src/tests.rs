//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor};

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(1).distance(Floor(5)), 4);
        assert_eq!(Floor(5).distance(Floor(1)), 4);
        assert_eq!(Floor(3).distance(Floor(3)), 0);
    }

    #[test]
    fn direction_between() {
        assert_eq!(Direction::between(Floor(1), Floor(4)), Direction::Up);
        assert_eq!(Direction::between(Floor(4), Floor(1)), Direction::Down);
        assert_eq!(Direction::between(Floor(2), Floor(2)), Direction::Idle);
    }

    #[test]
    fn idle_scans_ascending() {
        assert!(Direction::Up.scans_ascending());
        assert!(Direction::Idle.scans_ascending());
        assert!(!Direction::Down.scans_ascending());
    }

    #[test]
    fn default_floor_is_ground() {
        assert_eq!(Floor::default(), Floor::GROUND);
        assert_eq!(Floor::GROUND.to_string(), "1");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(1_000);
        assert_eq!(t + 500, Tick(1_500));
        assert_eq!(Tick(u64::MAX - 1) + 5, Tick(u64::MAX));
        assert_eq!(Tick(1_500) - Tick(1_000), 500u64);
        assert_eq!(Tick(10).since(Tick(20)), 0);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut clock = SimClock::new(0);
        clock.advance_to(Tick(3_000));
        clock.advance_to(Tick(1_000));
        assert_eq!(clock.now(), Tick(3_000));
    }

    #[test]
    fn clock_display_formats_hms() {
        let mut clock = SimClock::new(0);
        clock.advance_to(Tick(3_723_045));
        assert_eq!(clock.to_string(), "T3723045 (01:02:03.045)");
    }

    #[test]
    fn unix_ms_includes_start() {
        assert_eq!(Tick(250).unix_ms(10), 10_250);
        assert_eq!(Tick(0).unix_ms(1_700_000_000), 1_700_000_000_000);
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, Floor, LiftConfig, Rejection, validate_floor_count};

    #[test]
    fn default_is_valid() {
        assert!(LiftConfig::default().validate().is_ok());
    }

    #[test]
    fn floor_count_bounds() {
        assert_eq!(validate_floor_count(5), Ok(5));
        assert_eq!(validate_floor_count(20), Ok(20));
        assert_eq!(validate_floor_count(4), Err(ConfigError::FloorCount(4)));
        assert_eq!(validate_floor_count(25), Err(ConfigError::FloorCount(25)));
    }

    #[test]
    fn zero_speed_rejected() {
        let cfg = LiftConfig { ms_per_floor: 0, ..LiftConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::Speed(0)));
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = LiftConfig { frame_interval_ms: 0, ..LiftConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroInterval("frame_interval_ms")));
    }

    #[test]
    fn floor_resolution() {
        let cfg = LiftConfig::default(); // 6 floors
        assert_eq!(cfg.floor(1), Ok(Floor(1)));
        assert_eq!(cfg.floor(6), Ok(Floor(6)));
        assert_eq!(
            cfg.floor(0),
            Err(Rejection::FloorOutOfRange { floor: 0, floor_count: 6 })
        );
        assert!(cfg.floor(7).unwrap_err().is_invalid_floor());
    }

    #[test]
    fn config_error_message() {
        assert_eq!(ConfigError::FloorCount(25).to_string(), "floor count 25 is outside 5..=20");
    }
}

#[cfg(test)]
mod mode {
    use crate::{Mode, Modes};

    #[test]
    fn toggles_are_independent() {
        let mut modes = Modes::default();
        assert!(!modes.any_active());
        assert!(modes.toggle(Mode::Emergency));
        assert!(modes.toggle(Mode::Maintenance));
        assert!(modes.emergency && modes.maintenance);
        assert!(!modes.toggle(Mode::Emergency));
        assert!(modes.is_on(Mode::Maintenance));
        assert!(modes.any_active());
    }

    #[test]
    fn emergency_blocks_first() {
        let modes = Modes { emergency: true, maintenance: true };
        assert_eq!(modes.blocking(), Some(Mode::Emergency));
        let modes = Modes { emergency: false, maintenance: true };
        assert_eq!(modes.blocking(), Some(Mode::Maintenance));
        assert_eq!(Modes::default().blocking(), None);
    }
}
