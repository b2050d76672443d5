//! Conversion of raw request arguments into typed values.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::model::command::{ParameterKind, ParameterSpec};

/// A validated argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    /// User or role reference with any mention wrapper removed. The declared
    /// parameter kind says which.
    Reference(String),
}

/// Why one parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentProblem {
    Missing { parameter: String },
    WrongKind { parameter: String, expected: ParameterKind },
}

impl ArgumentProblem {
    pub fn parameter(&self) -> &str {
        match self {
            ArgumentProblem::Missing { parameter } => parameter,
            ArgumentProblem::WrongKind { parameter, .. } => parameter,
        }
    }
}

impl fmt::Display for ArgumentProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentProblem::Missing { parameter } => write!(f, "`{}` is required", parameter),
            ArgumentProblem::WrongKind {
                parameter,
                expected,
            } => write!(f, "`{}` must be a valid {}", parameter, expected),
        }
    }
}

/// Typed arguments for one dispatch, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, ArgumentValue>,
}

impl Arguments {
    /// Checks raw values against a command's schema.
    ///
    /// Every parameter is checked so the error lists all offending parameters, not just
    /// the first. Raw values for names not in the schema are ignored. A JSON `null`
    /// counts as absent.
    ///
    /// # Returns
    /// - `Ok(Arguments)` - All required parameters present and every supplied value convertible
    /// - `Err(Vec<ArgumentProblem>)` - One entry per offending parameter, in schema order
    pub fn validate(
        schema: &[ParameterSpec],
        raw: &HashMap<String, Value>,
    ) -> Result<Self, Vec<ArgumentProblem>> {
        let mut values = HashMap::new();
        let mut problems = Vec::new();

        for spec in schema {
            match raw.get(&spec.name).filter(|value| !value.is_null()) {
                None if spec.required => problems.push(ArgumentProblem::Missing {
                    parameter: spec.name.clone(),
                }),
                None => {}
                Some(value) => match convert(spec.kind, value) {
                    Some(converted) => {
                        values.insert(spec.name.clone(), converted);
                    }
                    None => problems.push(ArgumentProblem::WrongKind {
                        parameter: spec.name.clone(),
                        expected: spec.kind,
                    }),
                },
            }
        }

        if problems.is_empty() {
            Ok(Self { values })
        } else {
            Err(problems)
        }
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgumentValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ArgumentValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ArgumentValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    /// User or role reference as supplied, mention wrapper removed.
    pub fn reference(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgumentValue::Reference(value)) => Some(value),
            _ => None,
        }
    }

    /// Reference parsed as a Discord snowflake, if it is one.
    pub fn user_id(&self, name: &str) -> Option<u64> {
        self.reference(name)
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|id| *id != 0)
    }
}

fn convert(kind: ParameterKind, value: &Value) -> Option<ArgumentValue> {
    match kind {
        ParameterKind::String => value.as_str().map(|s| ArgumentValue::String(s.to_string())),
        ParameterKind::Integer => match value {
            Value::Number(number) => number.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .map(ArgumentValue::Integer),
        ParameterKind::Boolean => match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
        .map(ArgumentValue::Boolean),
        ParameterKind::UserReference => {
            reference(value, &["<@!", "<@"]).map(ArgumentValue::Reference)
        }
        ParameterKind::RoleReference => {
            reference(value, &["<@&"]).map(ArgumentValue::Reference)
        }
    }
}

/// Accepts a positive integer or a non-empty, whitespace-free string, stripping the
/// first matching mention prefix and its closing `>`.
fn reference(value: &Value, prefixes: &[&str]) -> Option<String> {
    let raw = match value {
        Value::Number(number) => return number.as_u64().filter(|id| *id != 0).map(|id| id.to_string()),
        Value::String(s) => s.trim(),
        _ => return None,
    };

    let unwrapped = prefixes
        .iter()
        .find_map(|prefix| {
            raw.strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix('>'))
        })
        .unwrap_or(raw);

    if unwrapped.is_empty() || unwrapped.chars().any(char::is_whitespace) {
        return None;
    }

    Some(unwrapped.to_string())
}
