//! Commands accepted by the simulator.

use crate::Direction;

/// Every external mutation of the simulator is one of these.
///
/// Presentation layers, call scripts, and the random traffic generator all
/// speak this vocabulary; `Sim::apply` is the only place that interprets it.
/// Values are raw (unvalidated) so that rejection happens in one place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Car button: ride to a floor.
    Submit(u32),

    /// Hall button: summon the car to `floor` to travel in `direction`.
    Call { floor: u32, direction: Direction },

    ToggleEmergency,

    ToggleMaintenance,

    /// Reconfigure the building and restart the run.
    Reset {
        floor_count:  u32,
        ms_per_floor: u64,
    },

    /// Change travel time per floor for future trips.
    SetSpeed(u64),
}
