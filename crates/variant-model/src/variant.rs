//! Variants and the artifacts they carry.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::attribute::AttributeValue;
use crate::container::AttributeContainer;

/// Opaque reference to a published file.
///
/// Downloading and caching artifacts is somebody else's job; the resolver
/// only hands these references to whoever consumes the selected variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ArtifactRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    pub fn with_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }
}

/// A named, attribute-tagged bundle of artifacts a component offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    name: SmolStr,
    attributes: AttributeContainer,
    #[serde(default)]
    artifacts: Vec<ArtifactRef>,
}

impl Variant {
    pub fn new(name: impl AsRef<str>, attributes: AttributeContainer) -> Self {
        Self {
            name: SmolStr::new(name),
            attributes,
            artifacts: Vec::new(),
        }
    }

    /// Attach artifacts, keeping their order.
    pub fn with_artifacts(mut self, artifacts: impl IntoIterator<Item = ArtifactRef>) -> Self {
        self.artifacts.extend(artifacts);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &AttributeContainer {
        &self.attributes
    }

    /// Shorthand for `self.attributes().get(name)`.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn artifacts(&self) -> &[ArtifactRef] {
        &self.artifacts
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.name, self.attributes)
    }
}
