use chrono::NaiveDateTime;
use std::fmt::Display;

/// A single scalar cell value as it comes out of (or goes into) a sheet range.
///
/// The table adapter never looks inside a value: it only moves values between
/// grid positions and record fields, and compares them for cache lookups.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Cell with no content at all
    #[default]
    Empty,
    /// Plain text, including the empty string used as a placeholder
    Text(String),
    /// Boolean values (true/false)
    Boolean(bool),
    /// Numeric values
    Number(f64),
    /// Date/time values
    DateTime(NaiveDateTime),
}

impl Value {
    /// The placeholder written for a field that a record does not carry.
    pub fn blank() -> Self {
        Value::Text(String::new())
    }

    /// Returns true for `Empty` and for empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Text(text) => write!(f, "{}", text),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Number(value) => write!(f, "{}", value),
            Value::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}
