use std::fmt::{Display, Formatter, Result as FmtResult};

/// A runtime value bound to a template variable.
///
/// Values are either numbers or strings. Modifiers receive a `Value` and
/// return a `Value`, so a chain like `{{count:numeral:capitalize}}` can turn
/// a number into a string part way through.
///
/// # Example
///
/// ```
/// use lingo::Value;
///
/// let count: Value = 3.into();
/// let name: Value = "Alice".into();
/// assert_eq!(count.as_number(), Some(3));
/// assert_eq!(name.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Float(_) | Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Number(_) | Value::Float(_) => None,
        }
    }

    /// Returns true only for the number one.
    ///
    /// This is the singular test used by alternative spans. The string `"1"`
    /// is not the number one.
    pub fn is_one(&self) -> bool {
        match self {
            Value::Number(n) => *n == 1,
            Value::Float(f) => *f == 1.0,
            Value::String(_) => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Unsigned values beyond `i64::MAX` become floats rather than wrapping.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
