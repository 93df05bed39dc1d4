pub mod binary;
pub mod conditions;

pub use binary::required_bits;
pub use conditions::{ConditionSet, ParameterCondition, FALSE_VALUE, TRUE_VALUE};

use statebits_core::{Result, SyncConfig, SyncError};
use statebits_dsa::{BitVector, SlotList};

/// Maps a state number onto a fixed, ordered list of boolean slots.
///
/// ## Bit Order
/// Slot 0 holds the most-significant bit. A three-slot list
/// `["b2", "b1", "b0"]` encodes state 5 as `b2 = true, b1 = false, b0 = true`.
///
/// ## Purity
/// Every operation is a deterministic function of its arguments and the
/// immutable configuration. Nothing is logged, cached or clamped silently;
/// invalid input comes back as a [`SyncError`].
#[derive(Debug, Clone, Default)]
pub struct BinaryEncoder {
    config: SyncConfig,
}

static_assertions::assert_impl_all!(BinaryEncoder: Send, Sync);

impl BinaryEncoder {
    /// An encoder with the default configuration (out-of-range numbers are rejected).
    pub fn new() -> Self {
        Self::default()
    }

    /// An encoder with a validated custom configuration.
    pub fn with_config(config: SyncConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Expands `state_number` across `bit_count` bits.
    ///
    /// `bit_count = 0` accepts only state 0 and yields an empty vector.
    pub fn state_number_to_binary(&self, state_number: i64, bit_count: usize) -> Result<BitVector> {
        binary::expand(state_number, bit_count, self.config.range_policy)
    }

    /// Inverse of [`BinaryEncoder::state_number_to_binary`].
    pub fn binary_to_state_number(&self, bits: &[bool]) -> Result<i64> {
        binary::fold(bits)
    }

    /// Validates slot names: non-empty list, no blank or repeated name.
    pub fn slot_list<S: AsRef<str>>(&self, slot_names: &[S]) -> Result<SlotList> {
        Ok(SlotList::new(slot_names.iter().map(|s| s.as_ref().to_string()))?)
    }

    /// Pairs every slot (in list order) with its bit of `state_number`.
    pub fn conditions_for(&self, state_number: i64, slots: &SlotList) -> Result<ConditionSet> {
        let bits = self.state_number_to_binary(state_number, slots.len())?;
        let conditions = slots
            .iter()
            .zip(bits.iter())
            .map(|(name, bit)| ParameterCondition::new(name, bit))
            .collect();
        Ok(ConditionSet::new(state_number, conditions))
    }

    /// Slot name validation runs before the range check, so duplicate
    /// names fail with `InvalidInput` whatever the state number.
    pub fn generate_parameter_conditions<S: AsRef<str>>(
        &self,
        state_number: i64,
        slot_names: &[S],
    ) -> Result<Vec<ParameterCondition>> {
        let slots = self.slot_list(slot_names)?;
        Ok(self.conditions_for(state_number, &slots)?.into_vec())
    }

    /// Value the named slot must hold for `state_number`.
    pub fn expected_value_in(&self, slot_name: &str, state_number: i64, slots: &SlotList) -> Result<bool> {
        let idx = slots.index_of(slot_name)?;
        let bits = self.state_number_to_binary(state_number, slots.len())?;
        // `idx < slots.len() == bits.len()`
        bits.get(idx)
            .ok_or_else(|| SyncError::NotFound(slot_name.to_string()))
    }

    pub fn get_expected_boolean_value<S: AsRef<str>>(
        &self,
        slot_name: &str,
        state_number: i64,
        slot_names: &[S],
    ) -> Result<bool> {
        let slots = self.slot_list(slot_names)?;
        self.expected_value_in(slot_name, state_number, &slots)
    }

    /// Generates the conditions and converts them into the caller's host shape.
    pub fn create_binary_conditions<C, S>(&self, state_number: i64, slot_names: &[S]) -> Result<Vec<C>>
    where
        C: From<ParameterCondition>,
        S: AsRef<str>,
    {
        let slots = self.slot_list(slot_names)?;
        Ok(self.conditions_for(state_number, &slots)?.into_host())
    }
}

/// [`BinaryEncoder::state_number_to_binary`] with the default configuration.
pub fn state_number_to_binary(state_number: i64, bit_count: usize) -> Result<BitVector> {
    BinaryEncoder::new().state_number_to_binary(state_number, bit_count)
}

/// [`BinaryEncoder::binary_to_state_number`] with the default configuration.
pub fn binary_to_state_number(bits: &[bool]) -> Result<i64> {
    binary::fold(bits)
}

pub fn generate_parameter_conditions<S: AsRef<str>>(
    state_number: i64,
    slot_names: &[S],
) -> Result<Vec<ParameterCondition>> {
    BinaryEncoder::new().generate_parameter_conditions(state_number, slot_names)
}

pub fn get_expected_boolean_value<S: AsRef<str>>(
    slot_name: &str,
    state_number: i64,
    slot_names: &[S],
) -> Result<bool> {
    BinaryEncoder::new().get_expected_boolean_value(slot_name, state_number, slot_names)
}

pub fn create_binary_conditions<C, S>(state_number: i64, slot_names: &[S]) -> Result<Vec<C>>
where
    C: From<ParameterCondition>,
    S: AsRef<str>,
{
    BinaryEncoder::new().create_binary_conditions(state_number, slot_names)
}

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    #[kani::unwind(8)]
    fn prove_state_round_trip() {
        let n: u8 = kani::any();
        let n = (n & 0x3F) as i64;
        // Formally prove decode(encode(n)) == n for every 6-bit state number.
        let bits = binary::expand(n, 6, statebits_core::RangePolicy::Reject).unwrap();
        assert!(binary::fold(bits.as_slice()).unwrap() == n);
    }
}
