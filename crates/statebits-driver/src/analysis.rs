use crate::host::DriverEntry;
use serde::Serialize;
use statebits_codec::ConditionSet;
use statebits_core::SyncConfig;

/// A slot whose authored value disagrees with the encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverMismatch {
    pub parameter: String,
    pub expected: bool,
    pub found: f32,
}

/// Snapshot of how one state's driver compares to its expected encoding.
///
/// Produced by a query and never updated afterwards; run the query again
/// after writing to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverAnalysis {
    pub state: String,
    pub state_number: i64,
    pub has_driver: bool,
    /// Slots whose entry already holds the expected value.
    pub matching: Vec<String>,
    /// Slots without any entry.
    pub missing: Vec<String>,
    pub mismatched: Vec<DriverMismatch>,
    /// Entries for parameters outside the slot list. Left untouched.
    pub extraneous: Vec<DriverEntry>,
}

impl DriverAnalysis {
    /// Compares existing driver entries with the expected conditions.
    ///
    /// When a parameter is listed twice, the last entry wins, matching
    /// the order in which a driver applies them.
    pub fn evaluate(
        state: &str,
        expected: &ConditionSet,
        entries: Option<&[DriverEntry]>,
        config: &SyncConfig,
    ) -> Self {
        let existing = entries.unwrap_or(&[]);
        let mut matching = Vec::new();
        let mut missing = Vec::new();
        let mut mismatched = Vec::new();

        for condition in expected.iter() {
            let found = existing
                .iter()
                .rev()
                .find(|e| e.parameter == condition.parameter);
            match found {
                None => missing.push(condition.parameter.clone()),
                Some(entry) if config.value_as_bool(entry.value) == condition.expected => {
                    matching.push(condition.parameter.clone())
                }
                Some(entry) => mismatched.push(DriverMismatch {
                    parameter: condition.parameter.clone(),
                    expected: condition.expected,
                    found: entry.value,
                }),
            }
        }

        let extraneous = existing
            .iter()
            .filter(|e| expected.expected(&e.parameter).is_none())
            .cloned()
            .collect();

        Self {
            state: state.to_string(),
            state_number: expected.state_number(),
            has_driver: entries.is_some(),
            matching,
            missing,
            mismatched,
            extraneous,
        }
    }

    /// No slot is missing and none holds a wrong value.
    pub fn is_synchronized(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty()
    }
}
