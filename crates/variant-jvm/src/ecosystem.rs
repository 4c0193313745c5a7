//! Configures a session for the JVM ecosystem.

use variant_derive::{ArtifactTypeDerivation, ArtifactTypeRegistry};
use variant_model::{AttributeContainer, AttributeKind};
use variant_schema::{
    AttributesSchema, ClosestOrdered, ExactMatch, NoPreference, OrderedCompatibility, Result,
};

use crate::attributes::{
    BUNDLING, CATEGORY, DOCS_TYPE, LIBRARY_ELEMENTS, PRECEDENCE, TARGET_JVM_ENVIRONMENT,
    TARGET_JVM_VERSION, USAGE, artifact_type, library_elements, usage,
};
use crate::rules::{self, UsageCompatibility, UsageDisambiguation};

/// The JVM ecosystem: schema rules, artifact types and derivation.
///
/// Applying it twice to the same schema is harmless; every registration is
/// identical the second time.
#[derive(Debug, Clone, Copy, Default)]
pub struct JvmEcosystem;

impl JvmEcosystem {
    pub fn new() -> Self {
        Self
    }

    /// Register the JVM attributes and their precedence.
    ///
    /// # Errors
    ///
    /// Fails with [`variant_schema::Error::DuplicateAttribute`] if one of the
    /// JVM attribute names was already registered with different rules.
    pub fn configure_schema(&self, schema: &mut AttributesSchema) -> Result<()> {
        schema.register(USAGE, UsageCompatibility, UsageDisambiguation)?;
        schema.register(
            LIBRARY_ELEMENTS,
            rules::library_elements_compatibility(),
            rules::library_elements_disambiguation(),
        )?;
        schema.register(
            CATEGORY,
            rules::category_compatibility(),
            rules::category_disambiguation(),
        )?;
        schema.register(
            BUNDLING,
            rules::bundling_compatibility(),
            rules::bundling_disambiguation(),
        )?;
        schema.register_with_kind(
            TARGET_JVM_VERSION,
            AttributeKind::Integer,
            OrderedCompatibility,
            ClosestOrdered,
        )?;
        schema.register(
            TARGET_JVM_ENVIRONMENT,
            ExactMatch,
            rules::environment_disambiguation(),
        )?;
        schema.register(DOCS_TYPE, ExactMatch, NoPreference)?;
        schema.set_precedence(PRECEDENCE)?;

        tracing::debug!(
            attributes = ?schema.attribute_names(),
            "Configured JVM attributes schema"
        );
        Ok(())
    }

    /// Register the attributes of the artifact types found in legacy JVM
    /// repositories.
    pub fn configure_artifact_types(&self, registry: &mut ArtifactTypeRegistry) {
        let runtime = AttributeContainer::new().with(USAGE, usage::JAVA_RUNTIME);

        registry.register(
            artifact_type::JAR,
            runtime.with(LIBRARY_ELEMENTS, library_elements::JAR),
        );
        registry.register(
            artifact_type::JAVA_CLASSES_DIRECTORY,
            runtime.with(LIBRARY_ELEMENTS, library_elements::CLASSES),
        );
        registry.register(
            artifact_type::JAVA_RESOURCES_DIRECTORY,
            runtime.with(LIBRARY_ELEMENTS, library_elements::RESOURCES),
        );
    }

    /// Derivation strategy over the JVM artifact types.
    pub fn derivation_strategy(&self) -> ArtifactTypeDerivation {
        let mut registry = ArtifactTypeRegistry::new();
        self.configure_artifact_types(&mut registry);
        ArtifactTypeDerivation::new(registry)
    }

}
