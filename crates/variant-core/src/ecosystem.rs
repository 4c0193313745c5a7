//! Ecosystems contribute attributes, rules and artifact types to a session.

use variant_jvm::JvmEcosystem;

use crate::error::Result;
use crate::session::SessionBuilder;

/// A bundle of schema rules and artifact types applied to a session before
/// it is built.
pub trait Ecosystem {
    fn name(&self) -> &str;

    /// Register everything this ecosystem knows on `builder`.
    fn apply(&self, builder: &mut SessionBuilder) -> Result<()>;
}

impl Ecosystem for JvmEcosystem {
    fn name(&self) -> &str {
        "jvm"
    }

    /// Registers the JVM attributes and precedence, and the `jar`,
    /// `java-classes-directory` and `java-resources-directory` artifact types
    /// that the session's artifact type derivation uses for legacy
    /// components.
    fn apply(&self, builder: &mut SessionBuilder) -> Result<()> {
        self.configure_schema(builder.schema_mut())?;
        self.configure_artifact_types(builder.artifact_types_mut());
        Ok(())
    }
}
