//! Timed command scripts.

use lift_core::{Command, Tick};

/// One command and the tick at which it is issued.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptedCommand {
    pub at:      Tick,
    pub command: Command,
}

/// A time-ordered list of commands to replay against a simulator.
///
/// Entries are kept sorted by `at`.  Entries sharing a tick keep the order in
/// which they were added, so "submit 5 then submit 2" at the same instant is
/// replayed in exactly that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallScript {
    entries: Vec<ScriptedCommand>,
}

impl CallScript {
    /// Build a script, sorting `entries` by tick (stable).
    pub fn new(mut entries: Vec<ScriptedCommand>) -> Self {
        entries.sort_by_key(|e| e.at);
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Append `command` at `at`, keeping the script sorted.
    pub fn push(&mut self, at: Tick, command: Command) {
        let idx = self.entries.partition_point(|e| e.at <= at);
        self.entries.insert(idx, ScriptedCommand { at, command });
    }

    /// Interleave `other` into `self`.  On equal ticks `self`'s entries come
    /// first.
    pub fn merge(mut self, other: CallScript) -> CallScript {
        self.entries.extend(other.entries);
        self.entries.sort_by_key(|e| e.at);
        self
    }

    pub fn entries(&self) -> &[ScriptedCommand] {
        &self.entries
    }

    /// Tick of the last command, or `None` for an empty script.
    pub fn last_tick(&self) -> Option<Tick> {
        self.entries.last().map(|e| e.at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for CallScript {
    type Item = ScriptedCommand;
    type IntoIter = std::vec::IntoIter<ScriptedCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
