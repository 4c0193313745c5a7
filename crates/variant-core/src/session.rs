//! Resolution sessions.

use std::fmt;
use std::sync::Arc;

use variant_derive::{
    ArtifactTypeDerivation, ArtifactTypeRegistry, DerivationCache, VariantDerivationStrategy,
};
use variant_model::{AttributeContainer, AttributeName, Component, Variant};
use variant_schema::{AttributesSchema, CompatibilityRule, DisambiguationRule, SchemaConfig};
use variant_select::VariantSelector;

use crate::ecosystem::Ecosystem;
use crate::error::Result;

/// Collects schema rules, artifact types and the derivation strategy, then
/// freezes them into a [`ResolutionSession`].
#[derive(Default)]
pub struct SessionBuilder {
    schema: AttributesSchema,
    artifact_types: ArtifactTypeRegistry,
    strategy: Option<Arc<dyn VariantDerivationStrategy>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_mut(&mut self) -> &mut AttributesSchema {
        &mut self.schema
    }

    pub fn artifact_types_mut(&mut self) -> &mut ArtifactTypeRegistry {
        &mut self.artifact_types
    }

    /// Register an attribute; see [`AttributesSchema::register`].
    pub fn register(
        &mut self,
        name: impl Into<AttributeName>,
        compatibility: impl CompatibilityRule + 'static,
        disambiguation: impl DisambiguationRule + 'static,
    ) -> Result<&mut Self> {
        self.schema.register(name, compatibility, disambiguation)?;
        Ok(self)
    }

    /// Replace the disambiguation precedence.
    pub fn precedence<I, N>(&mut self, order: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<AttributeName>,
    {
        self.schema.set_precedence(order)?;
        Ok(self)
    }

    /// Declare the attributes of a legacy artifact type.
    ///
    /// Values are typed against the final schema in [`build`](Self::build),
    /// so registration order relative to attributes does not matter.
    pub fn artifact_type(
        &mut self,
        artifact_type: impl Into<String>,
        attributes: AttributeContainer,
    ) -> &mut Self {
        self.artifact_types.register(artifact_type, attributes);
        self
    }

    /// Replace the default artifact type derivation.
    pub fn derivation_strategy(
        &mut self,
        strategy: impl VariantDerivationStrategy + 'static,
    ) -> &mut Self {
        self.strategy = Some(Arc::new(strategy));
        self
    }

    /// Apply a schema configuration file.
    pub fn config(&mut self, config: &SchemaConfig) -> Result<&mut Self> {
        config.apply_to(&mut self.schema)?;
        for (artifact_type, attributes) in &config.artifact_types {
            self.artifact_types
                .register(artifact_type.as_str(), attributes.clone());
        }
        Ok(self)
    }

    pub fn ecosystem(&mut self, ecosystem: &impl Ecosystem) -> Result<&mut Self> {
        tracing::debug!(ecosystem = ecosystem.name(), "Applying ecosystem");
        ecosystem.apply(self)?;
        Ok(self)
    }

    /// Freeze the builder.
    ///
    /// Artifact type attributes are re-typed through the final schema, so a
    /// JVM version written as `"8"` becomes the integer `8` whichever order
    /// the builder was configured in. Without an explicit strategy, legacy
    /// components are derived from those artifact types.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Schema`] if an artifact type value does not fit
    /// its attribute kind.
    pub fn build(self) -> Result<ResolutionSession> {
        let mut artifact_types = ArtifactTypeRegistry::new();
        for (artifact_type, attributes) in self.artifact_types.iter() {
            artifact_types.register(artifact_type, self.schema.normalize(attributes)?);
        }

        let strategy: Arc<dyn VariantDerivationStrategy> = match self.strategy {
            Some(strategy) => strategy,
            None => Arc::new(ArtifactTypeDerivation::new(artifact_types)),
        };
        tracing::debug!(attributes = self.schema.len(), "Built resolution session");
        Ok(ResolutionSession {
            schema: Arc::new(self.schema),
            strategy,
            cache: DerivationCache::new(),
        })
    }
}

impl fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("schema", &self.schema)
            .field("artifact_types", &self.artifact_types)
            .field("custom_strategy", &self.strategy.is_some())
            .finish()
    }
}

/// Schema, derivation strategy and derivation cache for one resolution.
///
/// A session is immutable after [`SessionBuilder::build`] apart from its
/// cache, and is `Send + Sync`: share it by reference (or in an [`Arc`])
/// across threads resolving different edges.
pub struct ResolutionSession {
    schema: Arc<AttributesSchema>,
    strategy: Arc<dyn VariantDerivationStrategy>,
    cache: DerivationCache,
}

impl ResolutionSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn schema(&self) -> &Arc<AttributesSchema> {
        &self.schema
    }

    pub fn selector(&self) -> VariantSelector<'_> {
        VariantSelector::new(&self.schema)
    }

    /// Candidate variants of `component`: its native variants, or the
    /// variant derived for it, computed once per session.
    pub fn variants_of(&self, component: &Component) -> Arc<[Variant]> {
        if component.has_native_variants() {
            return Arc::from(component.variants());
        }
        self.cache.get_or_derive(component, self.strategy.as_ref())
    }

    /// Select the variant of `component` that best matches `request`.
    ///
    /// Request values are re-typed through the schema first, so `"17"` for an
    /// integer attribute is treated as `17`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::Schema`] if a request value does not fit its
    ///   attribute kind
    /// - [`crate::Error::Select`] if no variant, or more than one, is
    ///   selected
    pub fn select(&self, component: &Component, request: &AttributeContainer) -> Result<Variant> {
        let request = self.schema.normalize(request)?;
        let candidates = self.variants_of(component);
        let selected = self.selector().select(&request, &candidates).map_err(|e| {
            tracing::debug!(component = %component.id(), error = %e, "Variant selection failed");
            e
        })?;
        tracing::debug!(
            component = %component.id(),
            variant = selected.name(),
            "Selected variant"
        );
        Ok(selected.clone())
    }

    /// Select a variant for each edge.
    ///
    /// Every edge is attempted; one failure does not stop the others, so the
    /// caller decides whether to abort or collect and report.
    pub fn select_all<'a, I>(&self, edges: I) -> Vec<Result<Variant>>
    where
        I: IntoIterator<Item = (&'a Component, &'a AttributeContainer)>,
    {
        edges
            .into_iter()
            .map(|(component, request)| self.select(component, request))
            .collect()
    }

    /// Number of components whose variants were derived in this session.
    pub fn derived_components(&self) -> usize {
        self.cache.len()
    }
}

impl fmt::Debug for ResolutionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionSession")
            .field("schema", &self.schema)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use variant_model::{AttributeValue, ComponentId};
    use variant_schema::{ExactMatch, NoPreference};

    fn legacy(artifact_type: &str) -> Component {
        Component::legacy(
            ComponentId::new("org.legacy", "lib", "1.0"),
            Some(artifact_type),
            vec![],
        )
    }

    #[test]
    fn test_session_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolutionSession>();
    }

    #[test]
    fn test_native_variants_are_not_derived() {
        let session = SessionBuilder::new().build().unwrap();
        let component = Component::with_variants(
            ComponentId::new("g", "m", "1"),
            vec![Variant::new("only", AttributeContainer::new())],
        );

        assert_eq!(session.variants_of(&component).len(), 1);
        assert_eq!(session.derived_components(), 0);
    }

    #[test]
    fn test_builder_artifact_type_feeds_default_derivation() {
        let mut builder = SessionBuilder::new();
        builder.artifact_type("zip", AttributeContainer::new().with("format", "zip"));
        let session = builder.build().unwrap();

        let variants = session.variants_of(&legacy("zip"));
        assert_eq!(variants[0].attribute("format"), Some(&AttributeValue::named("zip")));
        assert_eq!(session.derived_components(), 1);
    }

    #[test]
    fn test_register_chains() {
        let mut builder = SessionBuilder::new();
        builder
            .register("usage", ExactMatch, NoPreference)
            .unwrap()
            .precedence(["usage"])
            .unwrap();
        let session = builder.build().unwrap();
        assert!(session.schema().is_registered("usage"));
    }
}
