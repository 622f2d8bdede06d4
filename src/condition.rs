//! Condition - a named configuration of experiment variables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// A single condition variable value.
///
/// Conditions carry arbitrary named variables (contrast, duration,
/// orientation, ...). Rather than an untyped bag, the value space is a
/// closed variant over the three kinds an experiment design actually uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric variable (intensity, duration, ...)
    Number(f64),
    /// Textual variable (label, category, ...)
    Text(String),
    /// Boolean variable (feature present/absent)
    Flag(bool),
}

impl Value {
    /// Get the numeric value, if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if this is a `Text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a `Flag`.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Condition represents one named configuration of experiment variables.
///
/// Conditions are immutable once assembled: variables are attached at
/// construction time via [`Condition::with_variable`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    id: Uuid,
    name: String,
    variables: BTreeMap<String, Value>,
}

impl Condition {
    /// Create a new condition with a generated ID and no variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName { entity: "condition" });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            variables: BTreeMap::new(),
        })
    }

    /// Attach a variable, builder style.
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get the condition ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Get the condition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a single variable by name.
    #[must_use]
    pub fn variable(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    /// Get all variables.
    #[must_use]
    pub const fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }
}
