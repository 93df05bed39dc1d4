use serde::Serialize;
use statebits_core::{Result, SyncError};
use std::collections::BTreeMap;

/// A single "set parameter" operation of a parameter driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverEntry {
    pub parameter: String,
    pub value: f32,
}

impl DriverEntry {
    pub fn new(parameter: impl Into<String>, value: f32) -> Self {
        Self {
            parameter: parameter.into(),
            value,
        }
    }
}

/// The narrow seam between the encoder and a host's animator object model.
///
/// Implementations translate these two calls into whatever automation API
/// the host exposes. Neither call is retried by the caller.
pub trait DriverHost {
    /// Entries of the driver attached to `state`.
    ///
    /// `Ok(None)` means the state exists but has no driver yet.
    fn read_driver_entries(&self, state: &str) -> Result<Option<Vec<DriverEntry>>>;

    /// Inserts or replaces the entry for `entry.parameter`, attaching a
    /// driver to `state` first if it has none. Every existing entry for the
    /// parameter must end up holding the new value.
    fn write_driver_entry(&mut self, state: &str, entry: DriverEntry) -> Result<()>;
}

/// In-memory host used for offline validation, demos and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    states: BTreeMap<String, Option<Vec<DriverEntry>>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a state without a driver.
    pub fn add_state(&mut self, state: &str) {
        self.states.entry(state.to_string()).or_insert(None);
    }

    /// Declares a state whose driver already carries `entries`.
    pub fn with_driver(mut self, state: &str, entries: Vec<DriverEntry>) -> Self {
        self.states.insert(state.to_string(), Some(entries));
        self
    }

    pub fn entries(&self, state: &str) -> Option<&[DriverEntry]> {
        self.states.get(state)?.as_deref()
    }

    pub fn has_driver(&self, state: &str) -> bool {
        self.entries(state).is_some()
    }
}

impl DriverHost for MemoryHost {
    fn read_driver_entries(&self, state: &str) -> Result<Option<Vec<DriverEntry>>> {
        match self.states.get(state) {
            Some(driver) => Ok(driver.clone()),
            None => Err(SyncError::Host(format!("unknown state '{}'", state))),
        }
    }

    fn write_driver_entry(&mut self, state: &str, entry: DriverEntry) -> Result<()> {
        let driver = self
            .states
            .get_mut(state)
            .ok_or_else(|| SyncError::Host(format!("unknown state '{}'", state)))?;

        let entries = driver.get_or_insert_with(Vec::new);
        let mut replaced = false;
        for existing in entries.iter_mut().filter(|e| e.parameter == entry.parameter) {
            existing.value = entry.value;
            replaced = true;
        }
        if !replaced {
            entries.push(entry);
        }
        Ok(())
    }
}
