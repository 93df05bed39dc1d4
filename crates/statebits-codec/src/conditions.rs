use serde::Serialize;
use statebits_core::Result;

/// Numeric form of `true` when a host stores booleans as numbers.
pub const TRUE_VALUE: f32 = 1.0;
/// Numeric form of `false` when a host stores booleans as numbers.
pub const FALSE_VALUE: f32 = 0.0;

/// One slot paired with the value it must hold for a given state number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParameterCondition {
    pub parameter: String,
    pub expected: bool,
}

impl ParameterCondition {
    pub fn new(parameter: impl Into<String>, expected: bool) -> Self {
        Self {
            parameter: parameter.into(),
            expected,
        }
    }

    /// `1.0` for `true`, `0.0` for `false`.
    #[inline(always)]
    pub fn expected_value(&self) -> f32 {
        if self.expected {
            TRUE_VALUE
        } else {
            FALSE_VALUE
        }
    }
}

/// The full, ordered condition list of a single state number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionSet {
    state_number: i64,
    conditions: Vec<ParameterCondition>,
}

impl ConditionSet {
    pub(crate) fn new(state_number: i64, conditions: Vec<ParameterCondition>) -> Self {
        Self {
            state_number,
            conditions,
        }
    }

    /// The state number these conditions were generated for.
    pub fn state_number(&self) -> i64 {
        self.state_number
    }

    /// Decodes the expected bits again.
    ///
    /// Differs from [`ConditionSet::state_number`] only when the set was
    /// produced under the wrapping range policy.
    pub fn decoded_state_number(&self) -> Result<i64> {
        let bits: Vec<bool> = self.conditions.iter().map(|c| c.expected).collect();
        crate::binary::fold(&bits)
    }

    pub fn expected(&self, parameter: &str) -> Option<bool> {
        self.conditions
            .iter()
            .find(|c| c.parameter == parameter)
            .map(|c| c.expected)
    }

    /// Evaluates every condition against observed parameter values.
    ///
    /// A parameter the lookup cannot resolve fails the match.
    pub fn matches<F>(&self, mut lookup: F) -> bool
    where
        F: FnMut(&str) -> Option<bool>,
    {
        self.conditions
            .iter()
            .all(|c| lookup(&c.parameter) == Some(c.expected))
    }

    /// Converts every condition into a host-specific shape.
    pub fn into_host<C: From<ParameterCondition>>(self) -> Vec<C> {
        self.conditions.into_iter().map(C::from).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterCondition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn into_vec(self) -> Vec<ParameterCondition> {
        self.conditions
    }
}

impl From<(String, bool)> for ParameterCondition {
    fn from((parameter, expected): (String, bool)) -> Self {
        Self { parameter, expected }
    }
}

impl From<ParameterCondition> for (String, bool) {
    fn from(c: ParameterCondition) -> Self {
        (c.parameter, c.expected)
    }
}
