//! `TimerQueue`: delayed and periodic events keyed by simulation tick.
//!
//! # Ordering
//!
//! Timers fire in tick order.  Timers due at the same tick fire in the order
//! they were scheduled, so a run is fully determined by its inputs.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! pending ticks.  The elevator never has more than a handful outstanding
//! (one arrival, one dwell, three periodic ticks), so the constant is tiny.

use std::collections::{BTreeMap, VecDeque};

use lift_core::Tick;

struct Timer<E> {
    event:  E,
    /// `Some(interval)` for periodic timers, re-armed every time they fire.
    period: Option<u64>,
}

/// A priority queue mapping simulation ticks → events that fire at that tick.
pub struct TimerQueue<E> {
    inner: BTreeMap<Tick, VecDeque<Timer<E>>>,
    /// Cached total timer count for O(1) `len()`.
    total: usize,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay` ms after `now`.
    pub fn schedule(&mut self, now: Tick, delay: u64, event: E) -> Tick {
        let at = now + delay;
        self.push(at, Timer { event, period: None });
        at
    }

    /// Fire `event` every `interval` ms, first at `now + interval`.
    ///
    /// An interval of zero is treated as one millisecond so the run loop can
    /// never spin on the same tick.
    pub fn schedule_periodic(&mut self, now: Tick, interval: u64, event: E) -> Tick {
        let interval = interval.max(1);
        let at = now + interval;
        self.push(at, Timer { event, period: Some(interval) });
        at
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// Periodic timers are re-armed one interval after the tick they fired at
    /// before the event is returned.
    pub fn pop_due(&mut self, until: Tick) -> Option<(Tick, E)> {
        let mut entry = self.inner.first_entry()?;
        let at = *entry.key();
        if at > until {
            return None;
        }
        let timer = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.total -= 1;

        if let Some(period) = timer.period {
            self.push(at + period, Timer { event: timer.event.clone(), period: Some(period) });
        }
        Some((at, timer.event))
    }

    /// Total number of pending timers, periodic ones included.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn push(&mut self, at: Tick, timer: Timer<E>) {
        self.inner.entry(at).or_default().push_back(timer);
        self.total += 1;
    }
}
