use statebits_core::{RangePolicy, Result, SyncError};
use statebits_dsa::BitVector;

/// True when `state_number` lies in `[0, 2^bit_count)`.
#[inline(always)]
pub fn fits(state_number: i64, bit_count: usize) -> bool {
    // Any non-negative i64 fits in 63 bits.
    state_number >= 0 && (bit_count >= 63 || state_number < (1i64 << bit_count))
}

/// Expands `state_number` across `bit_count` bits, most-significant bit first.
///
/// Bit `i` equals `(state_number >> (bit_count - 1 - i)) & 1`.
pub fn expand(state_number: i64, bit_count: usize, policy: RangePolicy) -> Result<BitVector> {
    if !fits(state_number, bit_count) {
        let wrappable = state_number >= 0 && policy == RangePolicy::Wrap;
        if !wrappable {
            return Err(SyncError::OutOfRange { state_number, bit_count });
        }
    }
    // `BitVector::expand` drops bits above the width, which is the wrap.
    Ok(BitVector::expand(state_number as u64, bit_count))
}

/// Folds an MSB-first bit sequence back into a state number.
pub fn fold(bits: &[bool]) -> Result<i64> {
    let value = BitVector::from(bits).to_u64().ok_or_else(|| {
        SyncError::InvalidInput(format!("{}-bit vector exceeds the 64-bit range", bits.len()))
    })?;
    i64::try_from(value).map_err(|_| {
        SyncError::InvalidInput(format!("decoded value {} exceeds the state number range", value))
    })
}

/// Smallest bit width able to distinguish `state_count` states.
pub fn required_bits(state_count: usize) -> usize {
    if state_count <= 1 {
        0
    } else {
        (usize::BITS - (state_count - 1).leading_zeros()) as usize
    }
}
