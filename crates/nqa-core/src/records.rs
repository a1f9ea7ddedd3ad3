//! Script lines and scene entries, the two authored sides of a course.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

/// One spoken line of a narration script.
///
/// Identity is `line_id`, which must be unique within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptLine {
    pub section_id: String,
    pub line_id: String,
    pub text: String,
    /// Integers spoken in `text`, as digits or number words.
    pub numbers: BTreeSet<i64>,
}

/// The scene configuration paired with one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneEntry {
    pub line_id: String,
    pub section_id: String,
    /// `lineState.params`, or empty when the scene carries none.
    pub params: BTreeMap<String, Value>,
    pub has_line_state: bool,
}

impl SceneEntry {
    /// Operand keys in the order they are read.
    pub const OPERAND_KEYS: [&'static str; 2] = ["num1", "num2"];

    /// Integral values of `num1` and `num2`, in that order, skipping absent
    /// or non-integral ones.
    #[must_use]
    pub fn operands(&self) -> Vec<i64> {
        Self::OPERAND_KEYS
            .iter()
            .filter_map(|key| self.params.get(*key).and_then(as_integer))
            .collect()
    }

    /// The `operation` tag, when it is a string.
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        self.params.get("operation").and_then(Value::as_str)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}
