use serde::Serialize;
use statebits_codec::ParameterCondition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionMode {
    /// Passes while the boolean parameter is set.
    If,
    /// Passes while the boolean parameter is cleared.
    IfNot,
}

/// Boolean transition condition in the shape the host state machine stores.
///
/// Boolean modes ignore the threshold; it is kept at zero as the host does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimatorCondition {
    pub mode: ConditionMode,
    pub parameter: String,
    pub threshold: f32,
}

impl AnimatorCondition {
    pub fn evaluate(&self, value: bool) -> bool {
        match self.mode {
            ConditionMode::If => value,
            ConditionMode::IfNot => !value,
        }
    }
}

impl From<ParameterCondition> for AnimatorCondition {
    fn from(c: ParameterCondition) -> Self {
        Self {
            mode: if c.expected {
                ConditionMode::If
            } else {
                ConditionMode::IfNot
            },
            parameter: c.parameter,
            threshold: 0.0,
        }
    }
}
