//! Floors and travel direction.

use std::fmt;

/// A 1-based floor number.
///
/// Floors are always validated against the configured floor count before a
/// `Floor` is constructed from external input; see
/// [`LiftConfig::floor`][crate::LiftConfig::floor].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    /// The ground floor.  Every run starts (and every reset returns) here.
    pub const GROUND: Floor = Floor(1);

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0) as u32
    }
}

impl Default for Floor {
    fn default() -> Self {
        Floor::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Direction of travel of the car.  `Idle` when it has nothing to do.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Direction of a trip from `from` to `to`.  `Idle` when they are equal.
    pub fn between(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// `true` for `Up` and `Idle`, the two directions that scan ascending.
    #[inline]
    pub fn scans_ascending(self) -> bool {
        !matches!(self, Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up   => "Up",
            Direction::Down => "Down",
            Direction::Idle => "Idle",
        };
        f.write_str(s)
    }
}
