use crate::analysis::DriverAnalysis;
use crate::condition::AnimatorCondition;
use crate::host::{DriverEntry, DriverHost};
use serde::Serialize;
use statebits_codec::{BinaryEncoder, ConditionSet};
use statebits_core::{Result, StateRegistry, SyncBuilder, SyncError};
use statebits_dsa::{BitVector, SlotList};
use std::collections::BTreeMap;

/// Outcome of authoring one state's driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    pub state: String,
    pub state_number: i64,
    /// Parameters written to the host, in slot order.
    pub written: Vec<String>,
    /// Mismatched parameters left alone because overwriting is disabled.
    pub skipped: Vec<String>,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// Authors and verifies parameter drivers for a fixed slot list.
///
/// All host interaction goes through [`DriverHost`]; the encoding itself
/// comes from the wrapped [`BinaryEncoder`].
#[derive(Debug, Clone)]
pub struct DriverSync {
    encoder: BinaryEncoder,
    slots: SlotList,
}

impl DriverSync {
    pub fn new(encoder: BinaryEncoder, slots: SlotList) -> Result<Self> {
        encoder.config().check_slot_width(slots.len())?;
        Ok(Self { encoder, slots })
    }

    pub fn from_builder(builder: &SyncBuilder) -> Result<Self> {
        let slots = builder.build_slots()?;
        let encoder = BinaryEncoder::with_config(builder.config.clone())?;
        Self::new(encoder, slots)
    }

    pub fn encoder(&self) -> &BinaryEncoder {
        &self.encoder
    }

    pub fn slots(&self) -> &SlotList {
        &self.slots
    }

    pub fn conditions(&self, state_number: i64) -> Result<ConditionSet> {
        self.encoder.conditions_for(state_number, &self.slots)
    }

    /// Transition conditions that select `state_number`.
    pub fn transition_conditions(&self, state_number: i64) -> Result<Vec<AnimatorCondition>> {
        Ok(self.conditions(state_number)?.into_host())
    }

    /// Reads the state's driver and compares it with the expected encoding.
    pub fn analyze<H>(&self, host: &H, state: &str, state_number: i64) -> Result<DriverAnalysis>
    where
        H: DriverHost + ?Sized,
    {
        Ok(self.inspect(host, state, state_number)?.1)
    }

    fn inspect<H>(&self, host: &H, state: &str, state_number: i64) -> Result<(ConditionSet, DriverAnalysis)>
    where
        H: DriverHost + ?Sized,
    {
        let expected = self.conditions(state_number)?;
        let entries = host.read_driver_entries(state)?;
        let analysis = DriverAnalysis::evaluate(state, &expected, entries.as_deref(), self.encoder.config());

        tracing::debug!(
            "DriverSync: '{}' (#{}) matching={} missing={} mismatched={}",
            state,
            state_number,
            analysis.matching.len(),
            analysis.missing.len(),
            analysis.mismatched.len()
        );
        Ok((expected, analysis))
    }

    /// Writes every missing entry and, when configured, repairs mismatched ones.
    pub fn ensure<H>(&self, host: &mut H, state: &str, state_number: i64) -> Result<SyncReport>
    where
        H: DriverHost + ?Sized,
    {
        let (expected, analysis) = self.inspect(&*host, state, state_number)?;
        let overwrite = self.encoder.config().overwrite_mismatched;

        let mut report = SyncReport {
            state: state.to_string(),
            state_number,
            written: Vec::new(),
            skipped: Vec::new(),
        };

        // Walk in slot order so writes land in the same order as the bits.
        for condition in expected.iter() {
            let parameter = condition.parameter.as_str();
            let is_missing = analysis.missing.iter().any(|p| p == parameter);
            let is_mismatched = analysis.mismatched.iter().any(|m| m.parameter == parameter);

            if is_mismatched && !overwrite {
                tracing::warn!(
                    "DriverSync: '{}' holds a wrong value for {} (overwrite disabled)",
                    state,
                    parameter
                );
                report.skipped.push(parameter.to_string());
                continue;
            }
            if is_missing || is_mismatched {
                host.write_driver_entry(state, DriverEntry::new(parameter, condition.expected_value()))?;
                report.written.push(parameter.to_string());
            }
        }

        if !report.written.is_empty() {
            tracing::info!(
                "DriverSync: wrote {} entries for '{}' (#{})",
                report.written.len(),
                state,
                state_number
            );
        }
        Ok(report)
    }

    /// Authors drivers for every registered state.
    ///
    /// Every state is encoded and read back from the host before the first
    /// write, so an unrepresentable number, two states sharing a bit pattern
    /// or a state the host does not know leave the host untouched. A write
    /// the host rejects midway still leaves earlier states authored.
    pub fn ensure_all<H>(&self, host: &mut H, registry: &StateRegistry) -> Result<Vec<SyncReport>>
    where
        H: DriverHost + ?Sized,
    {
        let mut patterns: BTreeMap<Vec<bool>, &str> = BTreeMap::new();
        for entry in registry.entries() {
            let bits: BitVector = self
                .encoder
                .state_number_to_binary(entry.number, self.slots.len())?;
            if let Some(other) = patterns.insert(bits.into_vec(), entry.name.as_str()) {
                return Err(SyncError::InvalidInput(format!(
                    "states '{}' and '{}' encode to the same bit pattern",
                    other, entry.name
                )));
            }
            host.read_driver_entries(&entry.name)?;
        }

        registry
            .entries()
            .iter()
            .map(|entry| self.ensure(&mut *host, &entry.name, entry.number))
            .collect()
    }

    /// Analyses every registered state without writing anything.
    pub fn verify_all<H>(&self, host: &H, registry: &StateRegistry) -> Result<Vec<DriverAnalysis>>
    where
        H: DriverHost + ?Sized,
    {
        registry
            .entries()
            .iter()
            .map(|entry| self.analyze(host, &entry.name, entry.number))
            .collect()
    }
}
