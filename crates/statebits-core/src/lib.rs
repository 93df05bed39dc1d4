pub mod config;
pub mod error;
pub mod registry;

pub use config::{RangePolicy, SyncConfig};
pub use error::{Result, SyncError};
pub use registry::{StateEntry, StateRegistry};
use statebits_dsa::SlotList;

/// A fluent builder for a state synchronization setup.
///
/// Collects the ordered slot names, the state registry and the
/// configuration; the codec and driver layers consume it.
#[derive(Debug, Default)]
pub struct SyncBuilder {
    pub slots: Vec<String>,
    pub states: StateRegistry,
    pub config: SyncConfig,
}

impl SyncBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot. Earlier slots carry more significant bits.
    pub fn slot(mut self, name: &str) -> Self {
        self.slots.push(name.to_string());
        self
    }

    pub fn slots<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots.extend(names.into_iter().map(Into::into));
        self
    }

    /// Registers a state under the next free number.
    pub fn state(mut self, name: &str) -> Result<Self> {
        self.states.register(name)?;
        Ok(self)
    }

    /// Overrides the default configuration.
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.config.range_policy = policy;
        self
    }

    /// Validates the configuration and the slot names and returns the list.
    pub fn build_slots(&self) -> Result<SlotList> {
        self.config.validate()?;
        checked_slot_list(&self.slots, &self.config)
    }
}

/// Builds a [`SlotList`] and enforces the configured width limit.
pub fn checked_slot_list<S: AsRef<str>>(names: &[S], config: &SyncConfig) -> Result<SlotList> {
    let slots = SlotList::new(names.iter().map(|s| s.as_ref().to_string()))?;
    config.check_slot_width(slots.len())?;
    Ok(slots)
}
