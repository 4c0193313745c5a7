//! Registry of default attributes per artifact type.

use std::collections::HashMap;

use variant_model::AttributeContainer;

/// Maps an artifact type tag (`jar`, `java-classes-directory`, ...) to the
/// attributes a variant of that type is assumed to carry.
///
/// # Example
///
/// ```
/// use variant_derive::ArtifactTypeRegistry;
/// use variant_model::AttributeContainer;
///
/// let mut registry = ArtifactTypeRegistry::new();
/// registry.register("jar", AttributeContainer::new().with("org.gradle.usage", "java-runtime"));
/// assert!(registry.contains("jar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArtifactTypeRegistry {
    types: HashMap<String, AttributeContainer>,
}

impl ArtifactTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register the attributes for an artifact type.
    ///
    /// Registering a type twice merges the attributes, later values winning.
    pub fn register(&mut self, artifact_type: impl Into<String>, attributes: AttributeContainer) {
        let artifact_type = artifact_type.into();
        let merged = match self.types.get(&artifact_type) {
            Some(existing) => existing.merged_with(&attributes),
            None => attributes,
        };
        self.types.insert(artifact_type, merged);
    }

    /// Attributes for `artifact_type`, if registered.
    pub fn get(&self, artifact_type: &str) -> Option<&AttributeContainer> {
        self.types.get(artifact_type)
    }

    pub fn contains(&self, artifact_type: &str) -> bool {
        self.types.contains_key(artifact_type)
    }

    /// Every artifact type with its attributes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeContainer)> {
        self.types.iter().map(|(name, attributes)| (name.as_str(), attributes))
    }

    /// Registered artifact types (sorted).
    pub fn known_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
