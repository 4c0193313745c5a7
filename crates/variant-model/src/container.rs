//! Immutable attribute containers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeName, AttributeValue};

/// An immutable mapping from attribute name to value.
///
/// Containers are attached to variants (what a producer offers) and to
/// consumer requests (what an edge needs). They may be partial. Every
/// "modifying" operation returns a new container and leaves `self` untouched.
///
/// Iteration is in attribute-name order, which keeps diagnostics stable.
///
/// # Example
///
/// ```
/// use variant_model::AttributeContainer;
///
/// let base = AttributeContainer::new().with("org.gradle.usage", "java-runtime");
/// let derived = base.with("org.gradle.libraryelements", "jar");
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(derived.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeContainer {
    entries: BTreeMap<AttributeName, AttributeValue>,
}

impl AttributeContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this container with `name` set to `value`.
    pub fn with(
        &self,
        name: impl Into<AttributeName>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(name.into(), value.into());
        Self { entries }
    }

    /// Return a new container holding the entries of `self` overridden by the
    /// entries of `overrides`.
    pub fn merged_with(&self, overrides: &AttributeContainer) -> Self {
        let mut entries = self.entries.clone();
        for (name, value) in &overrides.entries {
            entries.insert(name.clone(), value.clone());
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &AttributeValue)> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &AttributeName> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for AttributeContainer
where
    N: Into<AttributeName>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for AttributeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}
