use crate::error::{Result, SyncError};
use serde::Deserialize;
use std::path::Path;

/// What the encoder does with a state number that does not fit the slot width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Fail with `OutOfRange`.
    #[default]
    Reject,
    /// Keep only the low bits of a non-negative state number.
    /// Negative numbers are still rejected.
    Wrap,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SyncConfig {
    pub range_policy: RangePolicy,
    /// Upper bound on the slot list of a driver setup.
    pub max_slots: usize,
    /// A stored driver value reads as `true` when it is at least this large.
    pub value_threshold: f32,
    /// Rewrite driver entries that hold the wrong value.
    pub overwrite_mismatched: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            range_policy: RangePolicy::Reject,
            max_slots: 32,
            value_threshold: 0.5,
            overwrite_mismatched: true,
        }
    }
}

impl SyncConfig {
    pub const MAX_SLOT_LIMIT: usize = 64;

    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: SyncConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&src)?;
        tracing::debug!("SyncConfig: loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_slots == 0 || self.max_slots > Self::MAX_SLOT_LIMIT {
            return Err(SyncError::Config(format!(
                "max_slots must be within 1..={}, got {}",
                Self::MAX_SLOT_LIMIT,
                self.max_slots
            )));
        }
        if !(self.value_threshold > 0.0 && self.value_threshold < 1.0) {
            return Err(SyncError::Config(format!(
                "value_threshold must lie strictly between 0 and 1, got {}",
                self.value_threshold
            )));
        }
        Ok(())
    }

    /// Rejects slot lists wider than `max_slots`.
    ///
    /// Applies to driver authoring only; the encoder accepts any width.
    pub fn check_slot_width(&self, width: usize) -> Result<()> {
        if width > self.max_slots {
            return Err(SyncError::InvalidInput(format!(
                "{} slots exceed the configured limit of {}",
                width, self.max_slots
            )));
        }
        Ok(())
    }

    /// Interprets a stored numeric driver value as a boolean.
    #[inline(always)]
    pub fn value_as_bool(&self, value: f32) -> bool {
        value >= self.value_threshold
    }
}
