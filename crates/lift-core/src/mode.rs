//! Emergency and maintenance override flags.

use std::fmt;

/// One of the two override modes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Emergency,
    Maintenance,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Emergency   => f.write_str("emergency"),
            Mode::Maintenance => f.write_str("maintenance"),
        }
    }
}

/// The two independent override flags.
///
/// Both may be on at once; nothing here makes them mutually exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modes {
    pub emergency:   bool,
    pub maintenance: bool,
}

impl Modes {
    /// `true` if either flag is on.
    #[inline]
    pub fn any_active(&self) -> bool {
        self.emergency || self.maintenance
    }

    /// The mode suppressing dispatch, emergency first.
    pub fn blocking(&self) -> Option<Mode> {
        if self.emergency {
            Some(Mode::Emergency)
        } else if self.maintenance {
            Some(Mode::Maintenance)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_on(&self, mode: Mode) -> bool {
        match mode {
            Mode::Emergency   => self.emergency,
            Mode::Maintenance => self.maintenance,
        }
    }

    /// Flip `mode` and return its new value.
    pub fn toggle(&mut self, mode: Mode) -> bool {
        let flag = match mode {
            Mode::Emergency   => &mut self.emergency,
            Mode::Maintenance => &mut self.maintenance,
        };
        *flag = !*flag;
        *flag
    }
}
