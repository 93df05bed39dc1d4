//! # Codec Layer Tests: BinaryEncoder
//!
//! Validates MSB-first expansion, condition generation, slot lookup and
//! the error kinds reported for unusable input.

use statebits::{
    binary_to_state_number, create_binary_conditions, generate_parameter_conditions,
    get_expected_boolean_value, state_number_to_binary, BinaryEncoder, ParameterCondition,
    RangePolicy, SyncConfig, SyncError,
};
use std::time::Instant;

/// Verifies the documented three-bit scenario: 5 -> [1, 0, 1].
#[test]
fn test_state_number_to_binary_msb_first() {
    let t = Instant::now();

    let bits = state_number_to_binary(5, 3).unwrap();
    assert_eq!(bits.as_slice(), &[true, false, true]);

    let bits = state_number_to_binary(1, 4).unwrap();
    assert_eq!(bits.as_slice(), &[false, false, false, true], "LSB must be the last slot");

    let overhead = t.elapsed();
    println!("test_state_number_to_binary_msb_first: Testing Overhead = {:?}", overhead);
}

/// Verifies that `generate_parameter_conditions` pairs names with bits in order.
#[test]
fn test_generate_parameter_conditions_scenario() {
    let t = Instant::now();

    let conditions = generate_parameter_conditions(5, &["b2", "b1", "b0"]).unwrap();
    let pairs: Vec<(String, bool)> = conditions.into_iter().map(Into::into).collect();
    assert_eq!(
        pairs,
        vec![
            ("b2".to_string(), true),
            ("b1".to_string(), false),
            ("b0".to_string(), true),
        ]
    );

    let overhead = t.elapsed();
    println!("test_generate_parameter_conditions_scenario: Testing Overhead = {:?}", overhead);
}

/// Verifies that duplicate names are rejected before the range check.
#[test]
fn test_duplicate_slots_invalid_input() {
    let t = Instant::now();

    for n in [-1, 0, 3, 1_000] {
        let res = generate_parameter_conditions(n, &["a", "a", "b"]);
        assert!(matches!(res, Err(SyncError::InvalidInput(_))), "n = {} should fail InvalidInput", n);
    }

    let res = get_expected_boolean_value("a", 1, &["a", "b", "a"]);
    assert!(matches!(res, Err(SyncError::InvalidInput(_))));

    let empty: [&str; 0] = [];
    assert!(matches!(generate_parameter_conditions(0, &empty), Err(SyncError::InvalidInput(_))));
    assert!(matches!(generate_parameter_conditions(0, &["x", ""]), Err(SyncError::InvalidInput(_))));

    let overhead = t.elapsed();
    println!("test_duplicate_slots_invalid_input: Testing Overhead = {:?}", overhead);
}

/// Verifies the range edges: 2^k and -1 fail, 2^k - 1 succeeds.
#[test]
fn test_out_of_range_edges() {
    let t = Instant::now();

    assert!(matches!(
        state_number_to_binary(8, 3),
        Err(SyncError::OutOfRange { state_number: 8, bit_count: 3 })
    ));
    assert!(matches!(state_number_to_binary(-1, 3), Err(SyncError::OutOfRange { .. })));
    assert_eq!(state_number_to_binary(7, 3).unwrap().count_ones(), 3);

    let res = generate_parameter_conditions(4, &["hi", "lo"]);
    assert!(matches!(res, Err(SyncError::OutOfRange { state_number: 4, bit_count: 2 })));

    let overhead = t.elapsed();
    println!("test_out_of_range_edges: Testing Overhead = {:?}", overhead);
}

/// Verifies that zero bits accept only state 0.
#[test]
fn test_zero_width_encoding() {
    let t = Instant::now();

    let bits = state_number_to_binary(0, 0).unwrap();
    assert!(bits.is_empty());
    assert_eq!(binary_to_state_number(bits.as_slice()).unwrap(), 0);

    for n in [1, 2, -1] {
        assert!(matches!(state_number_to_binary(n, 0), Err(SyncError::OutOfRange { .. })));
    }

    let overhead = t.elapsed();
    println!("test_zero_width_encoding: Testing Overhead = {:?}", overhead);
}

/// Verifies slot lookup, including an absent slot.
#[test]
fn test_get_expected_boolean_value() {
    let t = Instant::now();

    let slots = ["b2", "b1", "b0"];
    assert!(get_expected_boolean_value("b2", 5, &slots).unwrap());
    assert!(!get_expected_boolean_value("b1", 5, &slots).unwrap());
    assert!(get_expected_boolean_value("b0", 5, &slots).unwrap());

    match get_expected_boolean_value("b3", 5, &slots) {
        Err(SyncError::NotFound(name)) => assert_eq!(name, "b3"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(matches!(
        get_expected_boolean_value("b0", 9, &slots),
        Err(SyncError::OutOfRange { .. })
    ));

    let overhead = t.elapsed();
    println!("test_get_expected_boolean_value: Testing Overhead = {:?}", overhead);
}

/// A host-side condition shape used to exercise the generic conversion.
#[derive(Debug, PartialEq)]
struct Equals(String, f32);

impl From<ParameterCondition> for Equals {
    fn from(c: ParameterCondition) -> Self {
        let value = c.expected_value();
        Equals(c.parameter, value)
    }
}

/// Verifies that `create_binary_conditions` uses the 1.0 / 0.0 convention.
#[test]
fn test_create_binary_conditions_host_shape() {
    let t = Instant::now();

    let conditions: Vec<Equals> = create_binary_conditions(2, &["x", "y"]).unwrap();
    assert_eq!(
        conditions,
        vec![Equals("x".to_string(), 1.0), Equals("y".to_string(), 0.0)]
    );

    let overhead = t.elapsed();
    println!("test_create_binary_conditions_host_shape: Testing Overhead = {:?}", overhead);
}

/// Verifies the opt-in wrapping policy and that the encoder ignores the
/// driver slot limit.
#[test]
fn test_encoder_config_policies() {
    let t = Instant::now();

    let config = SyncConfig {
        range_policy: RangePolicy::Wrap,
        max_slots: 2,
        ..SyncConfig::default()
    };
    let encoder = BinaryEncoder::with_config(config).unwrap();

    let bits = encoder.state_number_to_binary(6, 2).unwrap();
    assert_eq!(bits.as_slice(), &[true, false], "wrap keeps the low two bits of 0b110");
    assert!(matches!(encoder.state_number_to_binary(-3, 2), Err(SyncError::OutOfRange { .. })));

    let res = encoder.generate_parameter_conditions(5, &["a", "b", "c"]).unwrap();
    assert_eq!(res.len(), 3, "max_slots only bounds driver setups");

    let set = encoder.conditions_for(6, &encoder.slot_list(&["a", "b"]).unwrap()).unwrap();
    assert_eq!(set.state_number(), 6);
    assert_eq!(set.decoded_state_number().unwrap(), 2);

    let overhead = t.elapsed();
    println!("test_encoder_config_policies: Testing Overhead = {:?}", overhead);
}

/// Verifies `ConditionSet::matches` against observed parameter values.
#[test]
fn test_condition_set_matches_observed_values() {
    let t = Instant::now();

    let encoder = BinaryEncoder::new();
    let slots = encoder.slot_list(&["p0", "p1", "p2"]).unwrap();
    let set = encoder.conditions_for(3, &slots).unwrap();

    let observed = |name: &str| match name {
        "p0" => Some(false),
        "p1" | "p2" => Some(true),
        _ => None,
    };
    assert!(set.matches(observed));
    assert!(!set.matches(|name| if name == "p2" { None } else { Some(false) }));
    assert_eq!(set.expected("p1"), Some(true));
    assert_eq!(set.expected("missing"), None);

    let overhead = t.elapsed();
    println!("test_condition_set_matches_observed_values: Testing Overhead = {:?}", overhead);
}

/// Verifies decoding of vectors wider than the state number range.
#[test]
fn test_binary_to_state_number_bounds() {
    let t = Instant::now();

    let mut wide = vec![false; 80];
    wide[79] = true;
    wide[70] = true;
    assert_eq!(binary_to_state_number(&wide).unwrap(), 0b10_0000_0001);

    let mut overflow = vec![false; 64];
    overflow[0] = true;
    assert!(matches!(binary_to_state_number(&overflow), Err(SyncError::InvalidInput(_))));

    let overhead = t.elapsed();
    println!("test_binary_to_state_number_bounds: Testing Overhead = {:?}", overhead);
}

/// Verifies that wide slot lists encode without any width cap.
#[test]
fn test_wide_slot_lists_are_accepted() {
    let t = Instant::now();

    let names: Vec<String> = (0..40).map(|i| format!("s{}", i)).collect();

    let conditions = generate_parameter_conditions(5, &names).unwrap();
    assert_eq!(conditions.len(), 40);
    assert_eq!(conditions.iter().filter(|c| c.expected).count(), 2);
    assert!(conditions[37].expected && !conditions[38].expected && conditions[39].expected);

    assert!(get_expected_boolean_value("s39", 5, &names).unwrap());
    assert!(!get_expected_boolean_value("s0", 5, &names).unwrap());

    let pairs: Vec<(String, bool)> = create_binary_conditions(5, &names).unwrap();
    assert_eq!(pairs.len(), 40);

    let wide: Vec<String> = (0..70).map(|i| format!("w{}", i)).collect();
    let conditions = generate_parameter_conditions(i64::MAX, &wide).unwrap();
    assert_eq!(conditions.iter().filter(|c| c.expected).count(), 63);

    let overhead = t.elapsed();
    println!("test_wide_slot_lists_are_accepted: Testing Overhead = {:?}", overhead);
}
