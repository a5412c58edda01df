//! The motion state machine.

use lift_core::{Direction, Floor, Tick, TripId};

use crate::{CarState, MotionError, MotionPhase, MotionResult, Trip};

/// Owns the [`CarState`] and enforces the legal phase transitions.
///
/// ```text
///   Idle ──begin_trip──▶ Moving ──arrive──▶ Dwelling ──finish_dwell──▶ Idle
///                          ▲                   │
///                          └────begin_trip─────┘
///   any ──halt──▶ Idle
/// ```
#[derive(Debug, Clone)]
pub struct MotionEngine {
    car:       CarState,
    phase:     MotionPhase,
    /// Id handed to the most recent trip.  Never reset, so timers armed
    /// before a reset can never match a trip started after it.
    last_trip: TripId,
}

impl MotionEngine {
    /// An idle car at `floor`.
    pub fn new(floor: Floor) -> Self {
        Self {
            car:       CarState::parked(floor),
            phase:     MotionPhase::Idle,
            last_trip: TripId::default(),
        }
    }

    #[inline]
    pub fn car(&self) -> &CarState {
        &self.car
    }

    #[inline]
    pub fn phase(&self) -> &MotionPhase {
        &self.phase
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, MotionPhase::Moving(_))
    }

    /// The trip in flight, if any.
    pub fn current_trip(&self) -> Option<&Trip> {
        match &self.phase {
            MotionPhase::Moving(trip) => Some(trip),
            _ => None,
        }
    }

    /// Start a trip to `target`.  Allowed from `Idle` and `Dwelling` only.
    pub fn begin_trip(&mut self, target: Floor, now: Tick, ms_per_floor: u64) -> MotionResult<Trip> {
        if let MotionPhase::Moving(trip) = &self.phase {
            return Err(MotionError::AlreadyMoving(trip.id));
        }
        let from = self.car.current_floor;
        if from == target {
            return Err(MotionError::ZeroDistance(target));
        }

        self.last_trip = self.last_trip.next();
        let distance = from.distance(target) as u64;
        let trip = Trip {
            id:          self.last_trip,
            from,
            to:          target,
            direction:   Direction::between(from, target),
            departed_at: now,
            arrives_at:  now + distance.saturating_mul(ms_per_floor),
        };

        self.car.target_floor = Some(target);
        self.car.direction = trip.direction;
        self.car.moving = true;
        self.phase = MotionPhase::Moving(trip);
        Ok(trip)
    }

    /// Complete trip `id`: the car reaches its target and starts dwelling.
    ///
    /// Returns `None` (and changes nothing) if `id` is not the trip in flight.
    pub fn arrive(&mut self, id: TripId) -> Option<Trip> {
        let trip = match self.phase {
            MotionPhase::Moving(trip) if trip.id == id => trip,
            _ => return None,
        };
        self.car.current_floor = trip.to;
        self.car.target_floor = None;
        self.car.moving = false;
        self.phase = MotionPhase::Dwelling(trip);
        Some(trip)
    }

    /// End the dwell that followed trip `id`.
    ///
    /// Returns `false` (and changes nothing) if the car is not dwelling after
    /// that trip.  Direction is left as-is; call [`park`][Self::park] if
    /// nothing is pending.
    pub fn finish_dwell(&mut self, id: TripId) -> bool {
        match self.phase {
            MotionPhase::Dwelling(trip) if trip.id == id => {
                self.phase = MotionPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Clear the travel direction of a car with no work left.
    pub fn park(&mut self) {
        if !self.is_moving() {
            self.car.direction = Direction::Idle;
        }
    }

    /// Freeze the car where it stands, from any phase.
    ///
    /// A car halted mid-trip stays at its departure floor.  Returns the
    /// interrupted trip, if there was one.
    pub fn halt(&mut self) -> Option<Trip> {
        let interrupted = self.current_trip().copied();
        self.car.target_floor = None;
        self.car.direction = Direction::Idle;
        self.car.moving = false;
        self.phase = MotionPhase::Idle;
        interrupted
    }

    /// Put an idle car at `floor`, abandoning any trip or dwell.
    pub fn reset(&mut self, floor: Floor) {
        self.car = CarState::parked(floor);
        self.phase = MotionPhase::Idle;
    }

    /// Interpolated car position as a fractional floor.
    pub fn position(&self, now: Tick) -> f32 {
        match self.current_trip() {
            Some(trip) => trip.position(now),
            None => self.car.current_floor.0 as f32,
        }
    }
}
