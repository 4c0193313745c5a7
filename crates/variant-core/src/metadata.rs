//! Reader for published module metadata documents.
//!
//! Metadata-rich repositories publish, next to each component, a JSON
//! document listing its variants:
//!
//! ```json
//! {
//!   "formatVersion": "1.1",
//!   "component": { "group": "org.example", "module": "lib", "version": "1.0" },
//!   "variants": [
//!     {
//!       "name": "runtimeElements",
//!       "attributes": {
//!         "org.gradle.usage": "java-runtime",
//!         "org.gradle.jvm.version": 11
//!       },
//!       "files": [{ "name": "lib-1.0.jar", "url": "lib-1.0.jar" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Fields this reader does not need (dependencies, checksums, sizes) are
//! ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use variant_model::{
    ArtifactRef, AttributeContainer, AttributeValue, Component, ComponentId, Variant,
};
use variant_schema::AttributesSchema;

use crate::error::{Error, Result};

const SUPPORTED_MAJOR: &str = "1.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetadata {
    pub format_version: String,
    pub component: ComponentCoordinates,
    #[serde(default)]
    pub variants: Vec<VariantMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentCoordinates {
    pub group: String,
    pub module: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantMetadata {
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default)]
    pub files: Vec<FileMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl ModuleMetadata {
    /// Parse a metadata document.
    ///
    /// # Errors
    ///
    /// - [`Error::MetadataParse`] for malformed JSON or missing fields
    /// - [`Error::UnsupportedFormat`] for a format version other than 1.x
    pub fn from_json(content: &str) -> Result<Self> {
        let metadata: ModuleMetadata = serde_json::from_str(content)?;
        if !metadata.format_version.starts_with(SUPPORTED_MAJOR) {
            return Err(Error::UnsupportedFormat {
                version: metadata.format_version,
            });
        }
        tracing::trace!(
            component = %metadata.component_id(),
            variants = metadata.variants.len(),
            "Parsed module metadata"
        );
        Ok(metadata)
    }

    pub fn component_id(&self) -> ComponentId {
        ComponentId::new(
            self.component.group.as_str(),
            self.component.module.as_str(),
            self.component.version.as_str(),
        )
    }

    /// Build a component whose native variants carry attribute values typed
    /// according to `schema`.
    pub fn into_component(self, schema: &AttributesSchema) -> Result<Component> {
        let id = self.component_id();
        let variants = self
            .variants
            .into_iter()
            .map(|variant| variant.into_variant(schema))
            .collect::<Result<Vec<_>>>()?;
        Ok(Component::with_variants(id, variants))
    }
}

impl VariantMetadata {
    fn into_variant(self, schema: &AttributesSchema) -> Result<Variant> {
        let mut attributes = AttributeContainer::new();
        for (name, raw) in &self.attributes {
            let value = match raw {
                Value::String(s) => AttributeValue::named(s),
                Value::Bool(b) => AttributeValue::Boolean(*b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => AttributeValue::Integer(i),
                    None => return Err(self.invalid(name, raw)),
                },
                _ => return Err(self.invalid(name, raw)),
            };
            attributes = attributes.with(name.as_str(), value);
        }
        let attributes = schema.normalize(&attributes)?;

        let artifacts = self.files.into_iter().map(|file| match file.url {
            Some(url) => ArtifactRef::with_url(file.name, url),
            None => ArtifactRef::new(file.name),
        });
        Ok(Variant::new(&self.name, attributes).with_artifacts(artifacts))
    }

    fn invalid(&self, attribute: &str, value: &Value) -> Error {
        Error::InvalidMetadataValue {
            variant: self.name.clone(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}
