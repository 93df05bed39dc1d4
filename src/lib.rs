//! # statebits
//!
//! Encodes an animator state number into a fixed list of boolean
//! parameters so the state can be synchronized as a handful of bits.
//!
//! Slot 0 of every slot list carries the most-significant bit. Booleans
//! map to `1.0` / `0.0` when a host stores them as numbers.

pub use statebits_codec::{
    binary_to_state_number, create_binary_conditions, generate_parameter_conditions,
    get_expected_boolean_value, required_bits, state_number_to_binary, BinaryEncoder,
    ConditionSet, ParameterCondition, FALSE_VALUE, TRUE_VALUE,
};
pub use statebits_core::{
    RangePolicy, Result, StateEntry, StateRegistry, SyncBuilder, SyncConfig, SyncError,
};
pub use statebits_driver::{
    AnimatorCondition, ConditionMode, DriverAnalysis, DriverEntry, DriverHost, DriverMismatch,
    DriverSync, MemoryHost, SyncReport,
};
pub use statebits_dsa::{BitVector, SlotError, SlotList};

/// Builds a [`DriverSync`] whose slot list is just wide enough for the
/// largest registered state number, naming slots `{prefix}{bit}` from the
/// highest bit down. Any slots already on the builder are replaced.
pub fn auto_sized(prefix: &str, builder: SyncBuilder) -> Result<DriverSync> {
    let state_count = builder.states.max_number().map_or(0, |max| max as usize + 1);
    let width = required_bits(state_count).max(1);
    let names: Vec<String> = (0..width).rev().map(|bit| format!("{}{}", prefix, bit)).collect();
    let builder = SyncBuilder {
        slots: names,
        ..builder
    };
    DriverSync::from_builder(&builder)
}
