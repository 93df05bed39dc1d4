use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Rejection reasons for a slot list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The list holds no slots at all.
    Empty,
    /// The slot at this position has an empty name.
    BlankName(usize),
    /// The name appears more than once.
    Duplicate(String),
    /// A queried name is not part of the list.
    Missing(String),
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::Empty => f.write_str("slot list is empty"),
            SlotError::BlankName(idx) => write!(f, "slot {} has an empty name", idx),
            SlotError::Duplicate(name) => write!(f, "slot name '{}' is declared more than once", name),
            SlotError::Missing(name) => write!(f, "slot '{}' is not in the slot list", name),
        }
    }
}

/// An ordered list of distinct boolean slot names.
///
/// ## Bit Order
/// Slot 0 carries the most-significant bit of the encoded state number,
/// slot `len - 1` the least-significant one. Every encoder, decoder and
/// condition generator in the workspace reads the list in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotList {
    names: Vec<String>,
}

static_assertions::assert_impl_all!(SlotList: Send, Sync, Clone);

impl SlotList {
    /// Validates and captures the slot names in declaration order.
    pub fn new<I, S>(names: I) -> Result<Self, SlotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SlotError::Empty);
        }

        let mut seen = BTreeSet::new();
        for (idx, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(SlotError::BlankName(idx));
            }
            if !seen.insert(name.as_str()) {
                return Err(SlotError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of slots, which is also the bit width of the encoding.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed list; kept for API symmetry with `Vec`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Bit position of `name`, counted from the most-significant bit.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Same as [`SlotList::position`] but reports an absent name as an error.
    pub fn index_of(&self, name: &str) -> Result<usize, SlotError> {
        self.position(name)
            .ok_or_else(|| SlotError::Missing(String::from(name)))
    }
}

impl<'a> IntoIterator for &'a SlotList {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
