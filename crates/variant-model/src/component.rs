//! Components: the producer side of a dependency edge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Error, Result};
use crate::variant::{ArtifactRef, Variant};

/// Module coordinates `group:module:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId {
    pub group: SmolStr,
    pub module: SmolStr,
    pub version: SmolStr,
}

impl ComponentId {
    pub fn new(
        group: impl AsRef<str>,
        module: impl AsRef<str>,
        version: impl AsRef<str>,
    ) -> Self {
        Self {
            group: SmolStr::new(group),
            module: SmolStr::new(module),
            version: SmolStr::new(version),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

impl FromStr for ComponentId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, module, version]
                if !group.is_empty() && !module.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(group, module, version))
            }
            _ => Err(Error::InvalidComponentId { id: s.to_string() }),
        }
    }
}

/// A resolved module and whatever variant metadata it published.
///
/// Components from metadata-rich repositories carry native variants.
/// Legacy components (a bare archive plus a descriptor) carry none; they
/// only declare an artifact type, from which a derivation strategy
/// synthesizes a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    variants: Vec<Variant>,
    artifact_type: Option<SmolStr>,
    artifacts: Vec<ArtifactRef>,
}

impl Component {
    /// A component that published native variants.
    pub fn with_variants(id: ComponentId, variants: Vec<Variant>) -> Self {
        Self {
            id,
            variants,
            artifact_type: None,
            artifacts: Vec::new(),
        }
    }

    /// A component without variant metadata.
    pub fn legacy(
        id: ComponentId,
        artifact_type: Option<&str>,
        artifacts: Vec<ArtifactRef>,
    ) -> Self {
        Self {
            id,
            variants: Vec::new(),
            artifact_type: artifact_type.map(SmolStr::new),
            artifacts,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn has_native_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Artifact type tag (`jar`, `java-classes-directory`, ...), if declared.
    pub fn artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref()
    }

    /// Artifacts of a legacy component.
    pub fn artifacts(&self) -> &[ArtifactRef] {
        &self.artifacts
    }
}
