//! The pending-request set.

use std::collections::BTreeMap;

use lift_core::{Direction, Floor, Modes, Rejection, Tick};

use crate::DispatchPolicy;

/// A pending call to a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub floor:        Floor,
    pub requested_at: Tick,
}

/// What `RequestQueue::admit` needs to know about the rest of the system.
#[derive(Debug, Clone, Copy)]
pub struct Admission {
    pub current_floor: Floor,
    pub floor_count:   u8,
    pub modes:         Modes,
}

/// At most one [`Request`] per floor.
///
/// Keyed by floor, so iteration is ascending and dedup is a map lookup.
/// Ordering for dispatch is always computed on a copy; the queue itself is
/// never reordered.
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    pending: BTreeMap<Floor, Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw floor number and queue it.
    ///
    /// Checks, in order: override modes, building bounds, the car's current
    /// floor, and an existing request for the same floor.  On any failure
    /// the queue is unchanged.
    pub fn admit(&mut self, floor: u32, ctx: &Admission, now: Tick) -> Result<Request, Rejection> {
        if let Some(mode) = ctx.modes.blocking() {
            return Err(Rejection::SuppressedByMode(mode));
        }
        if floor == 0 || floor > ctx.floor_count as u32 {
            return Err(Rejection::FloorOutOfRange { floor, floor_count: ctx.floor_count });
        }
        let floor = Floor(floor as u8);
        if floor == ctx.current_floor {
            return Err(Rejection::AlreadyAtFloor(floor));
        }
        self.insert(floor, now)
    }

    /// Queue `floor` unless it is already pending.
    pub fn insert(&mut self, floor: Floor, now: Tick) -> Result<Request, Rejection> {
        if self.pending.contains_key(&floor) {
            return Err(Rejection::AlreadyQueued(floor));
        }
        let request = Request { floor, requested_at: now };
        self.pending.insert(floor, request);
        Ok(request)
    }

    pub fn remove(&mut self, floor: Floor) -> Option<Request> {
        self.pending.remove(&floor)
    }

    /// Drop every pending request.  Returns how many there were.
    pub fn clear(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn get(&self, floor: Floor) -> Option<&Request> {
        self.pending.get(&floor)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.pending.contains_key(&floor)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending requests in ascending floor order.
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.pending.values()
    }

    /// Pending floors ascending.
    pub fn floors(&self) -> Vec<Floor> {
        self.pending.keys().copied().collect()
    }

    /// Pending floors in the order `policy` would serve them heading
    /// `direction`.  Does not mutate the queue.
    pub fn peek_ordered<P: DispatchPolicy + ?Sized>(&self, policy: &P, direction: Direction) -> Vec<Floor> {
        policy.order(&self.floors(), direction)
    }
}
