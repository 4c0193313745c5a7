//! Attribute names, values and value kinds.
//!
//! An attribute is a named coordinate such as `org.gradle.usage` that both
//! consumers and producers use to describe what they need or offer. Names are
//! interned so cloning them across containers and diagnostics is cheap.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Error, Result};

/// Identifier of an attribute, e.g. `org.gradle.usage`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeName(SmolStr);

impl AttributeName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        Self(SmolStr::from(name))
    }
}

impl Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of values an attribute accepts.
///
/// The kind decides how raw strings read from published metadata are
/// coerced into [`AttributeValue`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Open string space (`java-runtime`, `jar`, ...).
    #[default]
    Named,
    /// Whole numbers, e.g. a target JVM version.
    Integer,
    Boolean,
}

impl AttributeKind {
    /// Coerce a raw string into a value of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttributeValue`] when `raw` cannot be read as
    /// this kind.
    pub fn coerce(&self, name: &AttributeName, raw: &str) -> Result<AttributeValue> {
        let invalid = || Error::InvalidAttributeValue {
            name: name.to_string(),
            value: raw.to_string(),
            kind: *self,
        };
        match self {
            AttributeKind::Named => Ok(AttributeValue::named(raw)),
            AttributeKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(AttributeValue::Integer)
                .map_err(|_| invalid()),
            AttributeKind::Boolean => raw
                .trim()
                .parse::<bool>()
                .map(AttributeValue::Boolean)
                .map_err(|_| invalid()),
        }
    }

    /// Convert an already-typed value into this kind.
    ///
    /// Named values are re-read through [`AttributeKind::coerce`]; integers and
    /// booleans only pass when they already match.
    pub fn convert(&self, name: &AttributeName, value: AttributeValue) -> Result<AttributeValue> {
        match (self, value) {
            (AttributeKind::Named, AttributeValue::Named(v)) => Ok(AttributeValue::Named(v)),
            (AttributeKind::Named, other) => Ok(AttributeValue::named(other.to_string())),
            (_, AttributeValue::Named(raw)) => self.coerce(name, &raw),
            (AttributeKind::Integer, v @ AttributeValue::Integer(_)) => Ok(v),
            (AttributeKind::Boolean, v @ AttributeValue::Boolean(_)) => Ok(v),
            (kind, other) => Err(Error::InvalidAttributeValue {
                name: name.to_string(),
                value: other.to_string(),
                kind: *kind,
            }),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Named => write!(f, "named"),
            AttributeKind::Integer => write!(f, "integer"),
            AttributeKind::Boolean => write!(f, "boolean"),
        }
    }
}

impl FromStr for AttributeKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "named" | "string" => Ok(AttributeKind::Named),
            "integer" | "int" => Ok(AttributeKind::Integer),
            "boolean" | "bool" => Ok(AttributeKind::Boolean),
            _ => Err(Error::UnknownKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Value of an attribute. Equality and ordering are value-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Named(SmolStr),
}

impl AttributeValue {
    pub fn named(value: impl AsRef<str>) -> Self {
        AttributeValue::Named(SmolStr::new(value))
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Named(_) => AttributeKind::Named,
            AttributeValue::Integer(_) => AttributeKind::Integer,
            AttributeValue::Boolean(_) => AttributeKind::Boolean,
        }
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            AttributeValue::Named(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Named(v) => f.write_str(v),
            AttributeValue::Integer(v) => write!(f, "{}", v),
            AttributeValue::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::named(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Named(SmolStr::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}
