use crate::error::{Result, SyncError};
use std::collections::BTreeMap;

/// A named animator state and the number its driver encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub name: String,
    pub number: i64,
}

/// The StateRegistry assigns state numbers to animator states.
///
/// Numbers are handed out sequentially from zero unless a state is
/// registered with an explicit number. Both names and numbers stay unique,
/// so two states can never author the same bit pattern.
#[derive(Debug, Default, Clone)]
pub struct StateRegistry {
    entries: Vec<StateEntry>,
    by_number: BTreeMap<i64, usize>,
    next_number: i64,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state under the next free number and returns that number.
    pub fn register(&mut self, name: &str) -> Result<i64> {
        while self.by_number.contains_key(&self.next_number) {
            self.next_number += 1;
        }
        let number = self.next_number;
        self.assign(name, number)?;
        Ok(number)
    }

    /// Registers a state under an explicit number.
    pub fn assign(&mut self, name: &str, number: i64) -> Result<()> {
        if name.is_empty() {
            return Err(SyncError::InvalidInput("state name is empty".to_string()));
        }
        if number < 0 {
            return Err(SyncError::InvalidInput(format!(
                "state '{}' has negative number {}",
                name, number
            )));
        }
        if self.number_of(name).is_some() {
            return Err(SyncError::InvalidInput(format!("state '{}' is registered twice", name)));
        }
        if let Some(&idx) = self.by_number.get(&number) {
            return Err(SyncError::InvalidInput(format!(
                "state number {} is already used by '{}'",
                number, self.entries[idx].name
            )));
        }

        self.by_number.insert(number, self.entries.len());
        self.entries.push(StateEntry { name: name.to_string(), number });
        Ok(())
    }

    pub fn number_of(&self, name: &str) -> Option<i64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.number)
    }

    /// Largest registered number, or `None` for an empty registry.
    pub fn max_number(&self) -> Option<i64> {
        self.by_number.keys().next_back().copied()
    }

    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
