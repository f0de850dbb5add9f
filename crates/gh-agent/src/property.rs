//! Free-form per-agent values for rules the data model does not name.

use std::fmt;

/// A value stored in an agent's "other properties" bag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl Property {
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Property::Int(v) => Some(v as f64),
            Property::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Property::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Property::Flag(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Int(v) => write!(f, "{v}"),
            Property::Float(v) => write!(f, "{v}"),
            Property::Text(s) => f.write_str(s),
            Property::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Property {
    fn from(v: i64) -> Self {
        Property::Int(v)
    }
}

impl From<f64> for Property {
    fn from(v: f64) -> Self {
        Property::Float(v)
    }
}

impl From<bool> for Property {
    fn from(v: bool) -> Self {
        Property::Flag(v)
    }
}

impl From<&str> for Property {
    fn from(v: &str) -> Self {
        Property::Text(v.to_owned())
    }
}

impl From<String> for Property {
    fn from(v: String) -> Self {
        Property::Text(v)
    }
}
