use alloc::vec::Vec;
use core::fmt;

/// A fixed-width sequence of booleans, most-significant bit first.
///
/// Index 0 pairs with slot 0 of a [`crate::SlotList`]. The vector performs
/// no range checks on its own; callers decide whether a value fits.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    bits: Vec<bool>,
}

static_assertions::assert_impl_all!(BitVector: Send, Sync, Clone);

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitVector[")?;
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

impl BitVector {
    /// Expands `value` across `width` bits.
    ///
    /// Positions 64 or more places above the least-significant bit can only
    /// ever hold a zero and are filled with `false`. Bits of `value` above
    /// `width` are dropped.
    pub fn expand(value: u64, width: usize) -> Self {
        let mut bits = Vec::with_capacity(width);
        for i in 0..width {
            let shift = width - 1 - i;
            let bit = shift < 64 && (value >> shift) & 1 == 1;
            bits.push(bit);
        }
        Self { bits }
    }

    /// Folds the bits back into an integer.
    ///
    /// Returns `None` when a set bit lies beyond the 64-bit range.
    pub fn to_u64(&self) -> Option<u64> {
        let mut acc: u64 = 0;
        for &bit in &self.bits {
            if acc >> 63 != 0 {
                return None;
            }
            acc = (acc << 1) | bit as u64;
        }
        Some(acc)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx).copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Number of `true` bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.bits
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitVector {
    fn from(bits: &[bool]) -> Self {
        Self { bits: bits.to_vec() }
    }
}

impl AsRef<[bool]> for BitVector {
    fn as_ref(&self) -> &[bool] {
        &self.bits
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = &'a bool;
    type IntoIter = core::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}


#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    #[kani::unwind(10)]
    fn prove_expand_fold_round_trip() {
        let value: u8 = kani::any();
        // Formally prove that folding an 8-bit expansion recovers the input.
        let bits = BitVector::expand(value as u64, 8);
        assert!(bits.to_u64() == Some(value as u64));
    }
}
