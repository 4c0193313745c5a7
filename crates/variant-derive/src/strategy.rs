//! Derivation strategies.

use variant_model::{AttributeContainer, Component, Variant};

use crate::artifact_types::ArtifactTypeRegistry;

/// Name given to variants synthesized for legacy components.
pub const DERIVED_VARIANT_NAME: &str = "default";

/// Synthesizes a variant for a component that published none.
///
/// Implementations must be pure functions of the component: no I/O, no
/// mutation, same output for the same input. Derivation never fails; a
/// component the strategy knows nothing about still gets a minimal variant
/// whose missing attributes act as wildcards during selection.
pub trait VariantDerivationStrategy: Send + Sync {
    fn derive(&self, component: &Component) -> Variant;
}

/// Derives one variant from the component's artifact type, using the
/// attributes registered for that type.
#[derive(Debug, Clone, Default)]
pub struct ArtifactTypeDerivation {
    registry: ArtifactTypeRegistry,
}

impl ArtifactTypeDerivation {
    pub fn new(registry: ArtifactTypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ArtifactTypeRegistry {
        &self.registry
    }
}

impl VariantDerivationStrategy for ArtifactTypeDerivation {
    fn derive(&self, component: &Component) -> Variant {
        let attributes = component
            .artifact_type()
            .and_then(|t| self.registry.get(t))
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!(
                    component = %component.id(),
                    artifact_type = ?component.artifact_type(),
                    known = ?self.registry.known_types(),
                    "Unknown artifact type, deriving variant without attributes"
                );
                AttributeContainer::new()
            });
        Variant::new(DERIVED_VARIANT_NAME, attributes)
            .with_artifacts(component.artifacts().iter().cloned())
    }
}
