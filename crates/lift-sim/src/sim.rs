//! The `Sim` struct and its event loop.

use log::{Level, debug, log, trace};

use lift_core::{
    Command, Direction, Floor, LiftConfig, Mode, Modes, Rejection, SimClock, Tick, TripId,
    validate_floor_count, validate_speed,
};
use lift_dispatch::{Admission, DirectionalScan, DispatchPolicy, Dispatcher, RequestQueue};
use lift_metrics::{SpeedGauge, Stats, estimate_wait_secs};
use lift_motion::{CarState, MotionEngine, MotionPhase};
use lift_schedule::{CallScript, TimerQueue};

use crate::{
    Journal, LogEntry, ModeChange, ModeController, PendingRequest, SimEvent, SimObserver, Snapshot,
    Status, TripRecord,
};

// ── Timers ────────────────────────────────────────────────────────────────────

/// Everything the simulator can schedule.
///
/// Trip timers carry the id of the trip that armed them so a fire can be
/// matched against the car's current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Arrival(TripId),
    Dwell(TripId),
    MetricsTick,
    SpeedTick,
    Frame,
}

/// Outcome counts for [`Sim::run_script`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied:  usize,
    pub rejected: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The elevator simulator.
///
/// `Sim<P>` owns every piece of mutable state: the request queue, the motion
/// engine, the mode flags, the statistics, and the timer queue.  There is no
/// interior mutability and no shared ownership; commands and timer fires are
/// applied one at a time in the order they happen.
///
/// Time only moves through [`advance_to`][Self::advance_to] (and the
/// `run_*` helpers built on it).  Commands applied between two advances take
/// effect at the current tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy = DirectionalScan> {
    pub(crate) config:      LiftConfig,
    pub(crate) clock:       SimClock,
    pub(crate) queue:       RequestQueue,
    pub(crate) motion:      MotionEngine,
    pub(crate) dispatcher:  Dispatcher<P>,
    pub(crate) modes:       ModeController,
    pub(crate) stats:       Stats,
    pub(crate) gauge:       SpeedGauge,
    pub(crate) timers:      TimerQueue<TimerEvent>,
    pub(crate) journal:     Journal,
    /// Buffered until the next `flush`.
    pub(crate) events:      Vec<SimEvent>,
    pub(crate) stale_fires: u64,
}

impl<P: DispatchPolicy> Sim<P> {
    // ── Commands ──────────────────────────────────────────────────────────

    /// Apply one external command at the current tick.
    ///
    /// Mode toggles never fail.  Every rejection is also recorded in the
    /// journal; callers are free to ignore the returned error.
    pub fn apply(&mut self, command: Command) -> Result<(), Rejection> {
        match command {
            Command::Submit(floor) => self.submit_request(floor),
            Command::Call { floor, direction } => self.call_elevator(floor, direction),
            Command::ToggleEmergency => {
                self.toggle_emergency();
                Ok(())
            }
            Command::ToggleMaintenance => {
                self.toggle_maintenance();
                Ok(())
            }
            Command::Reset { floor_count, ms_per_floor } => self.reset(floor_count, ms_per_floor),
            Command::SetSpeed(ms) => self.set_speed(ms),
        }
    }

    /// [`apply`][Self::apply] and deliver the resulting events to `observer`.
    pub fn execute<O: SimObserver>(&mut self, command: Command, observer: &mut O) -> Result<(), Rejection> {
        let result = self.apply(command);
        self.flush(observer);
        result
    }

    /// Ask the car to visit `floor`.
    ///
    /// Rejected while a mode is on, for floors outside the building, for the
    /// car's current floor, and for floors already pending.  On success the
    /// car is dispatched straight away if it is not already moving.
    pub fn submit_request(&mut self, floor: u32) -> Result<(), Rejection> {
        match self.enqueue(floor) {
            Ok(()) => {
                self.note(Level::Info, format!("Floor {floor} requested"));
                self.try_dispatch();
                Ok(())
            }
            Err(rejection) => {
                self.note(Level::Debug, format!("Request for floor {floor} ignored: {rejection}"));
                Err(rejection)
            }
        }
    }

    /// Press the hall button at `floor` for `direction`.
    ///
    /// Admitted exactly like a car request.  The ground floor has no Down
    /// button and the top floor no Up button; `Idle` is never a button.
    pub fn call_elevator(&mut self, floor: u32, direction: Direction) -> Result<(), Rejection> {
        let config = &self.config;
        let button = match self.modes.modes().blocking() {
            Some(mode) => Err(Rejection::SuppressedByMode(mode)),
            None => config.floor(floor).and_then(|f| {
                let exists = match direction {
                    Direction::Up   => f.0 < config.floor_count,
                    Direction::Down => f != Floor::GROUND,
                    Direction::Idle => false,
                };
                if exists { Ok(()) } else { Err(Rejection::NoHallButton { floor: f, direction }) }
            }),
        };
        let label = direction.to_string().to_lowercase();
        match button.and_then(|()| self.enqueue(floor)) {
            Ok(()) => {
                self.note(Level::Info, format!("Call from floor {floor} ({label})"));
                self.try_dispatch();
                Ok(())
            }
            Err(rejection) => {
                self.note(Level::Debug, format!("Call from floor {floor} ({label}) ignored: {rejection}"));
                Err(rejection)
            }
        }
    }

    pub fn toggle_emergency(&mut self) -> ModeChange {
        self.toggle_mode(Mode::Emergency)
    }

    pub fn toggle_maintenance(&mut self) -> ModeChange {
        self.toggle_mode(Mode::Maintenance)
    }

    /// Return to a fresh building of `floor_count` floors at `ms_per_floor`.
    ///
    /// Both values are validated first; if either is out of bounds nothing
    /// changes.  The journal, the clock, and the periodic timers survive a
    /// reset.  Trip timers armed before it become stale.
    pub fn reset(&mut self, floor_count: u32, ms_per_floor: u64) -> Result<(), Rejection> {
        let checked = validate_floor_count(floor_count)
            .and_then(|n| validate_speed(ms_per_floor).map(|ms| (n, ms)));
        let (floor_count, ms_per_floor) = match checked {
            Ok(values) => values,
            Err(e) => {
                self.note(Level::Warn, format!("Reset rejected: {e}"));
                return Err(e.into());
            }
        };

        let now = self.now();
        let resized = floor_count != self.config.floor_count;
        self.config.floor_count = floor_count;
        self.config.ms_per_floor = ms_per_floor;

        self.queue.clear();
        self.modes.clear();
        self.motion.reset(Floor::GROUND);
        self.stats = Stats::new(now);
        self.gauge.stop();

        self.note(Level::Info, "System reset completed".to_string());
        if resized {
            self.note(Level::Info, format!("Building updated to {floor_count} floors"));
        }
        Ok(())
    }

    /// Change travel time per floor.  Trips already under way keep the
    /// timing they started with.
    pub fn set_speed(&mut self, ms_per_floor: u64) -> Result<(), Rejection> {
        match validate_speed(ms_per_floor) {
            Ok(ms) => {
                self.config.ms_per_floor = ms;
                self.note(Level::Info, format!("Speed updated to {ms} ms per floor"));
                Ok(())
            }
            Err(e) => {
                self.note(Level::Warn, format!("Speed change rejected: {e}"));
                Err(e.into())
            }
        }
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Fire every timer due at or before `until`, in tick order, then move the
    /// clock to `until` and flush events to `observer`.
    pub fn advance_to<O: SimObserver>(&mut self, until: Tick, observer: &mut O) {
        while let Some((at, event)) = self.timers.pop_due(until) {
            self.clock.advance_to(at);
            self.handle_timer(event);
        }
        self.clock.advance_to(until);
        self.flush(observer);
    }

    /// Advance by `ms` milliseconds.
    pub fn run_for<O: SimObserver>(&mut self, ms: u64, observer: &mut O) {
        let until = self.now() + ms;
        self.advance_to(until, observer);
    }

    /// Fire timers until the queue is empty and the car is idle, giving up
    /// after `limit_ms` of simulated time.
    ///
    /// Returns `true` if the car went idle.  The clock is left at the tick of
    /// the last timer fired (or at the deadline on timeout).
    pub fn run_until_idle<O: SimObserver>(&mut self, limit_ms: u64, observer: &mut O) -> bool {
        let deadline = self.now() + limit_ms;
        let idle = loop {
            if self.is_idle() {
                break true;
            }
            match self.timers.pop_due(deadline) {
                Some((at, event)) => {
                    self.clock.advance_to(at);
                    self.handle_timer(event);
                }
                None => {
                    self.clock.advance_to(deadline);
                    break false;
                }
            }
        };
        self.flush(observer);
        idle
    }

    /// Replay a timed command script.
    ///
    /// The clock is advanced to each entry's tick before it is applied;
    /// entries scheduled in the past apply immediately.  Stops after the last
    /// entry, so trips still under way keep going on the next advance.
    pub fn run_script<O: SimObserver>(&mut self, script: CallScript, observer: &mut O) -> ScriptReport {
        let mut report = ScriptReport::default();
        for entry in script {
            if entry.at > self.now() {
                self.advance_to(entry.at, observer);
            }
            match self.apply(entry.command) {
                Ok(())  => report.applied += 1,
                Err(_)  => report.rejected += 1,
            }
        }
        self.flush(observer);
        report
    }

    /// Deliver buffered events to `observer`, oldest first.
    pub fn flush<O: SimObserver>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            event.deliver(observer);
        }
    }

    /// Take buffered events without an observer.
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Views ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &LiftConfig {
        &self.config
    }

    #[inline]
    pub fn car(&self) -> &CarState {
        self.motion.car()
    }

    #[inline]
    pub fn phase(&self) -> &MotionPhase {
        self.motion.phase()
    }

    #[inline]
    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    #[inline]
    pub fn modes(&self) -> Modes {
        self.modes.modes()
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[inline]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    #[inline]
    pub fn timers(&self) -> &TimerQueue<TimerEvent> {
        &self.timers
    }

    /// Timer fires discarded because their guard no longer held.
    #[inline]
    pub fn stale_timer_fires(&self) -> u64 {
        self.stale_fires
    }

    pub fn status(&self) -> Status {
        let modes = self.modes.modes();
        if modes.emergency {
            Status::Emergency
        } else if modes.maintenance {
            Status::Maintenance
        } else if self.motion.car().moving {
            Status::Moving
        } else {
            Status::Idle
        }
    }

    /// A consistent view of everything, taken at the current tick.
    pub fn snapshot(&self) -> Snapshot {
        let now = self.now();
        let car = *self.motion.car();
        let modes = self.modes.modes();

        let queue_floors = self.queue.peek_ordered(&self.dispatcher.policy, car.direction);
        let pending = queue_floors
            .iter()
            .filter_map(|&floor| self.queue.get(floor))
            .map(|req| PendingRequest {
                floor:        req.floor,
                waiting_secs: now.since(req.requested_at) / 1_000,
            })
            .collect();

        Snapshot {
            at:            now,
            floor_count:   self.config.floor_count,
            ms_per_floor:  self.config.ms_per_floor,
            current_floor: car.current_floor,
            target_floor:  car.target_floor,
            direction:     car.direction,
            moving:        car.moving,
            status:        self.status(),
            position:      self.motion.position(now),
            queue_floors,
            pending,
            modes,
            stats:         self.stats.clone(),
            average_wait_secs: self.stats.average_wait_secs(),
            energy_display:    self.stats.energy_rounded(),
            estimated_wait_secs: estimate_wait_secs(
                &self.queue,
                &self.motion,
                modes,
                self.config.ms_per_floor,
                &self.dispatcher.policy,
            ),
            speed_floors_per_minute: if car.moving { self.gauge.floors_per_minute() } else { 0 },
            uptime_minutes: self.stats.uptime_minutes(now),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn is_idle(&self) -> bool {
        self.queue.is_empty() && matches!(self.motion.phase(), MotionPhase::Idle)
    }

    fn toggle_mode(&mut self, mode: Mode) -> ModeChange {
        let change = self.modes.toggle(mode, &mut self.queue, &mut self.motion);
        if change.active {
            self.gauge.stop();
            if let Some(trip) = change.interrupted {
                debug!("{mode} halted {} ({} → {})", trip.id, trip.from, trip.to);
            }
            if change.flushed > 0 {
                debug!("{mode} flushed {} pending request(s)", change.flushed);
            }
        }
        let level = if change.active && mode == Mode::Emergency { Level::Warn } else { Level::Info };
        self.note(level, change.message());
        change
    }

    /// Admit `floor` into the queue and count the request.
    fn enqueue(&mut self, floor: u32) -> Result<(), Rejection> {
        let ctx = Admission {
            current_floor: self.motion.car().current_floor,
            floor_count:   self.config.floor_count,
            modes:         self.modes.modes(),
        };
        self.queue.admit(floor, &ctx, self.now())?;
        self.stats.record_request();
        Ok(())
    }

    /// Start a trip if the dispatcher finds one, arming its arrival timer.
    fn try_dispatch(&mut self) {
        let now = self.now();
        let Some(trip) = self.dispatcher.dispatch(
            &self.queue,
            &mut self.motion,
            self.modes.modes(),
            now,
            self.config.ms_per_floor,
        ) else {
            return;
        };

        self.stats.record_departure(trip.distance());
        self.timers.schedule(now, trip.duration_ms(), TimerEvent::Arrival(trip.id));

        let heading = match trip.direction {
            Direction::Down => "down",
            _ => "up",
        };
        self.note(Level::Info, format!("Moving {heading} to floor {}", trip.to));
        self.events.push(SimEvent::TripStarted(trip));
        self.events.push(SimEvent::Position {
            at:       now,
            progress: 0.0,
            position: trip.from.0 as f32,
        });
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        let now = self.now();
        match event {
            TimerEvent::Arrival(id) => {
                if self.modes.modes().any_active() {
                    return self.stale("arrival", id);
                }
                let Some(trip) = self.motion.arrive(id) else {
                    return self.stale("arrival", id);
                };

                let wait_ms = self.queue.remove(trip.to).map(|req| now.since(req.requested_at));
                self.stats.record_arrival(wait_ms);
                self.gauge.stop();

                self.events.push(SimEvent::Position {
                    at:       now,
                    progress: 1.0,
                    position: trip.to.0 as f32,
                });
                self.events.push(SimEvent::Arrived { at: now, floor: trip.to });
                self.events.push(SimEvent::TripCompleted(TripRecord {
                    trip,
                    arrived_at: now,
                    wait_ms,
                }));
                self.note(Level::Info, format!("Arrived at floor {}", trip.to));

                self.timers.schedule(now, self.config.dwell_ms, TimerEvent::Dwell(id));
            }

            TimerEvent::Dwell(id) => {
                if self.modes.modes().any_active() || !self.motion.finish_dwell(id) {
                    return self.stale("dwell", id);
                }
                if self.queue.is_empty() {
                    self.motion.park();
                } else {
                    self.try_dispatch();
                }
            }

            TimerEvent::MetricsTick => {
                trace!("metrics tick at {now}");
                let snapshot = self.snapshot();
                self.events.push(SimEvent::Metrics(Box::new(snapshot)));
            }

            TimerEvent::SpeedTick => {
                self.gauge.sample(self.motion.is_moving(), self.config.ms_per_floor);
            }

            TimerEvent::Frame => {
                if let Some(trip) = self.motion.current_trip() {
                    self.events.push(SimEvent::Position {
                        at:       now,
                        progress: trip.progress(now),
                        position: trip.position(now),
                    });
                }
            }
        }
    }

    fn stale(&mut self, timer: &'static str, trip: TripId) {
        self.stale_fires += 1;
        debug!("{}", Rejection::StaleTimer { timer, trip });
    }

    /// Record an operator-visible message in the journal, the `log` facade,
    /// and the event stream.
    fn note(&mut self, level: Level, message: String) {
        log!(level, "{message}");
        let entry = LogEntry { at: self.now(), message };
        self.journal.push(entry.clone());
        self.events.push(SimEvent::Log(entry));
    }
}
