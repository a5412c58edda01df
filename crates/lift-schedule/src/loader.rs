//! CSV call-script loader.
//!
//! # CSV format
//!
//! One row per command, in any order (rows are sorted by `at_ms` on load).
//!
//! ```csv
//! at_ms,action,value,extra
//! 0,call,4,
//! 500,call,2,
//! 800,up,1,
//! 1200,down,5,
//! 2500,emergency,,
//! 4000,emergency,,
//! 6000,speed,750,
//! 9000,reset,10,1000
//! ```
//!
//! **`action`** field:
//!
//! | Value         | Command                                  | Fields used      |
//! |---------------|------------------------------------------|------------------|
//! | `call`        | `Command::Submit(value)`                 | `value`          |
//! | `up`          | `Command::Call { value, Up }`            | `value`          |
//! | `down`        | `Command::Call { value, Down }`          | `value`          |
//! | `emergency`   | `Command::ToggleEmergency`               | —                |
//! | `maintenance` | `Command::ToggleMaintenance`             | —                |
//! | `speed`       | `Command::SetSpeed(value)`               | `value`          |
//! | `reset`       | `Command::Reset { value, extra }`        | `value`, `extra` |
//!
//! Numeric values are not range-checked here: out-of-range floors or speeds
//! load fine and are rejected by the simulator when replayed, the same as
//! they would be from any other caller.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Command, Direction, Tick};

use crate::{CallScript, ScheduleError, ScriptedCommand};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    at_ms:  u64,
    action: String,
    value:  Option<u64>,
    extra:  Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CallScript`] from a CSV file.
pub fn load_script_csv(path: &Path) -> Result<CallScript, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scripts embedded in
/// a binary with `include_str!`.
pub fn load_script_reader<R: Read>(reader: R) -> Result<CallScript, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for (line, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let command = parse_command(&row)
            .map_err(|msg| ScheduleError::Parse(format!("row {}: {msg}", line + 1)))?;
        entries.push(ScriptedCommand { at: Tick(row.at_ms), command });
    }

    Ok(CallScript::new(entries))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_command(row: &ScriptRecord) -> Result<Command, String> {
    let value = |name: &str| {
        row.value.ok_or_else(|| format!("action {name:?} needs a value"))
    };
    match row.action.trim() {
        "call"        => Ok(Command::Submit(to_u32(value("call")?)?)),
        "up"          => Ok(Command::Call { floor: to_u32(value("up")?)?, direction: Direction::Up }),
        "down"        => Ok(Command::Call { floor: to_u32(value("down")?)?, direction: Direction::Down }),
        "emergency"   => Ok(Command::ToggleEmergency),
        "maintenance" => Ok(Command::ToggleMaintenance),
        "speed"       => Ok(Command::SetSpeed(value("speed")?)),
        "reset"       => {
            let floor_count = to_u32(value("reset")?)?;
            let ms_per_floor = row
                .extra
                .ok_or_else(|| "action \"reset\" needs extra (ms per floor)".to_string())?;
            Ok(Command::Reset { floor_count, ms_per_floor })
        }
        other => Err(format!(
            "invalid action {other:?}: expected call, up, down, emergency, maintenance, speed, or reset"
        )),
    }
}

fn to_u32(v: u64) -> Result<u32, String> {
    u32::try_from(v).map_err(|_| format!("value {v} does not fit a floor number"))
}
