//! Fluent builder for constructing a [`Sim`].

use log::info;

use lift_core::{Floor, LiftConfig, SimClock, Tick};
use lift_dispatch::{DirectionalScan, DispatchPolicy, Dispatcher, RequestQueue};
use lift_metrics::{SpeedGauge, Stats};
use lift_motion::MotionEngine;
use lift_schedule::TimerQueue;

use crate::{Journal, LogEntry, ModeController, Sim, SimError, SimEvent, SimResult, TimerEvent};

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default            |
/// |--------------------|--------------------|
/// | `.policy(p)`       | `DirectionalScan`  |
/// | `.start_floor(n)`  | floor 1            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(LiftConfig { floor_count: 10, ..LiftConfig::default() })
///     .start_floor(1)
///     .build()?;
/// sim.submit_request(7).ok();
/// sim.run_until_idle(60_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<P: DispatchPolicy = DirectionalScan> {
    config:      LiftConfig,
    policy:      P,
    start_floor: u32,
}

impl SimBuilder<DirectionalScan> {
    pub fn new(config: LiftConfig) -> Self {
        Self {
            config,
            policy:      DirectionalScan,
            start_floor: Floor::GROUND.0 as u32,
        }
    }
}

impl<P: DispatchPolicy> SimBuilder<P> {
    /// Replace the dispatch ordering.
    pub fn policy<Q: DispatchPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:      self.config,
            policy,
            start_floor: self.start_floor,
        }
    }

    /// Park the car somewhere other than the ground floor.  A reset always
    /// returns it to floor 1.
    pub fn start_floor(mut self, floor: u32) -> Self {
        self.start_floor = floor;
        self
    }

    /// Validate the configuration and assemble the [`Sim`].
    ///
    /// Arms the three periodic timers (metrics, speed gauge, position frames)
    /// and records the "System initialized" log line at tick 0.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] for an out-of-bounds configuration;
    /// [`SimError::StartFloor`] if the start floor is outside the building.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        let start = self.config.floor(self.start_floor).map_err(SimError::StartFloor)?;

        let clock = SimClock::new(self.config.start_unix_secs);
        let now = clock.now();

        let mut timers = TimerQueue::new();
        timers.schedule_periodic(now, self.config.metrics_interval_ms, TimerEvent::MetricsTick);
        timers.schedule_periodic(now, self.config.speed_interval_ms, TimerEvent::SpeedTick);
        timers.schedule_periodic(now, self.config.frame_interval_ms, TimerEvent::Frame);

        let mut journal = Journal::new(self.config.log_capacity);
        let entry = LogEntry { at: Tick::ZERO, message: "System initialized".to_string() };
        info!("{} floors, {} ms per floor: {}", self.config.floor_count, self.config.ms_per_floor, entry.message);
        journal.push(entry.clone());

        Ok(Sim {
            stats:       Stats::new(now),
            config:      self.config,
            clock,
            queue:       RequestQueue::new(),
            motion:      MotionEngine::new(start),
            dispatcher:  Dispatcher::new(self.policy),
            modes:       ModeController::new(),
            gauge:       SpeedGauge::default(),
            timers,
            journal,
            events:      vec![SimEvent::Log(entry)],
            stale_fires: 0,
        })
    }
}
