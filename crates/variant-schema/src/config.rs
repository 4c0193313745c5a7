//! Schema configuration loaded from TOML.
//!
//! A session can describe ad-hoc attributes, their rules, the disambiguation
//! precedence and artifact type defaults in a file instead of code:
//!
//! ```toml
//! precedence = ["org.gradle.category", "org.gradle.usage"]
//!
//! [attributes."org.gradle.jvm.version"]
//! kind = "integer"
//! compatibility = "ordered"
//! disambiguation = "closest-ordered"
//!
//! [attributes."org.gradle.libraryelements"]
//! disambiguation = { prefer = ["jar"] }
//!
//! [artifact-types.jar]
//! "org.gradle.usage" = "java-runtime"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use variant_model::{AttributeContainer, AttributeKind, AttributeName, AttributeValue};

use crate::error::{Error, Result};
use crate::rules::{
    AcceptsTable, ClosestOrdered, CompatibilityRule, DisambiguationRule, ExactMatch, NoPreference,
    OrderedCompatibility, PreferValues,
};
use crate::schema::{AttributesSchema, RuleSet};

/// Compatibility rule selection in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompatibilitySpec {
    /// A built-in rule by name: `exact` or `ordered`.
    Builtin(String),
    /// Extra `[consumer, producer]` pairs accepted besides equality.
    Accept { accept: Vec<(String, String)> },
}

impl Default for CompatibilitySpec {
    fn default() -> Self {
        CompatibilitySpec::Builtin("exact".to_string())
    }
}

/// Disambiguation rule selection in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisambiguationSpec {
    /// A built-in rule by name: `none` or `closest-ordered`.
    Builtin(String),
    /// Consumer value first, then these values in order.
    Prefer { prefer: Vec<String> },
}

impl Default for DisambiguationSpec {
    fn default() -> Self {
        DisambiguationSpec::Builtin("none".to_string())
    }
}

/// Configuration of one attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeConfig {
    #[serde(default)]
    pub kind: AttributeKind,
    #[serde(default)]
    pub compatibility: CompatibilitySpec,
    #[serde(default)]
    pub disambiguation: DisambiguationSpec,
}

/// Top-level schema configuration file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SchemaConfig {
    /// Disambiguation precedence. Empty keeps whatever the schema had.
    #[serde(default)]
    pub precedence: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeConfig>,
    /// Default attributes per artifact type, used to derive variants for
    /// components without variant metadata.
    #[serde(default)]
    pub artifact_types: BTreeMap<String, AttributeContainer>,
}

impl SchemaConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if `path` does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(?path, "Loading schema config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Register every configured attribute and the precedence on `schema`.
    ///
    /// Registration goes through [`AttributesSchema::register_rule_set`], so an
    /// attribute already registered with different rules is reported as
    /// [`Error::DuplicateAttribute`].
    pub fn apply_to(&self, schema: &mut AttributesSchema) -> Result<()> {
        for (name, attribute) in &self.attributes {
            let rules = attribute.rule_set(name)?;
            schema.register_rule_set(name.as_str(), rules)?;
        }
        if !self.precedence.is_empty() {
            schema.set_precedence(self.precedence.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

impl AttributeConfig {
    fn rule_set(&self, name: &str) -> Result<RuleSet> {
        let attribute = AttributeName::new(name);
        let coerce = |raw: &str| self.kind.coerce(&attribute, raw);

        let compatibility: Arc<dyn CompatibilityRule> = match &self.compatibility {
            CompatibilitySpec::Builtin(rule) => match rule.as_str() {
                "exact" => Arc::new(ExactMatch),
                "ordered" => Arc::new(OrderedCompatibility),
                other => {
                    return Err(Error::UnknownRule {
                        attribute: name.to_string(),
                        role: "compatibility",
                        rule: other.to_string(),
                    });
                }
            },
            CompatibilitySpec::Accept { accept } => {
                let mut table = AcceptsTable::new("accept");
                for (consumer, producer) in accept {
                    table = table.accept(coerce(consumer.as_str())?, coerce(producer.as_str())?);
                }
                Arc::new(table)
            }
        };

        let disambiguation: Arc<dyn DisambiguationRule> = match &self.disambiguation {
            DisambiguationSpec::Builtin(rule) => match rule.as_str() {
                "none" => Arc::new(NoPreference),
                "closest-ordered" => Arc::new(ClosestOrdered),
                other => {
                    return Err(Error::UnknownRule {
                        attribute: name.to_string(),
                        role: "disambiguation",
                        rule: other.to_string(),
                    });
                }
            },
            DisambiguationSpec::Prefer { prefer } => {
                let order = prefer
                    .iter()
                    .map(|raw| coerce(raw.as_str()))
                    .collect::<variant_model::Result<Vec<AttributeValue>>>()?;
                Arc::new(PreferValues::new("prefer", order))
            }
        };

        Ok(RuleSet {
            kind: self.kind,
            compatibility,
            disambiguation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
precedence = ["usage", "jvm"]

[attributes.usage]
compatibility = { accept = [["api", "runtime"]] }
disambiguation = { prefer = ["runtime"] }

[attributes.jvm]
kind = "integer"
compatibility = "ordered"
disambiguation = "closest-ordered"

[artifact-types.jar]
usage = "runtime"
jvm = 8
"#;

    #[test]
    fn test_parse_sample() {
        let config = SchemaConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.precedence, vec!["usage", "jvm"]);
        assert_eq!(config.attributes.len(), 2);
        assert_eq!(config.attributes["jvm"].kind, AttributeKind::Integer);
        assert_eq!(
            config.attributes["usage"].disambiguation,
            DisambiguationSpec::Prefer {
                prefer: vec!["runtime".to_string()]
            }
        );
        let jar = &config.artifact_types["jar"];
        assert_eq!(jar.get("jvm"), Some(&AttributeValue::Integer(8)));
    }

    #[test]
    fn test_apply_registers_rules() {
        let config = SchemaConfig::from_toml(SAMPLE).unwrap();
        let mut schema = AttributesSchema::new();
        config.apply_to(&mut schema).unwrap();

        assert!(schema.is_compatible("usage", &"api".into(), &"runtime".into()));
        assert!(!schema.is_compatible("usage", &"runtime".into(), &"api".into()));
        assert!(schema.is_compatible("jvm", &17i64.into(), &11i64.into()));
        assert_eq!(schema.kind("jvm"), AttributeKind::Integer);
        assert_eq!(schema.precedence().len(), 2);
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let config = SchemaConfig::from_toml(SAMPLE).unwrap();
        let mut schema = AttributesSchema::new();
        config.apply_to(&mut schema).unwrap();
        config.apply_to(&mut schema).unwrap();
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_changed_preference_list_conflicts() {
        let first = SchemaConfig::from_toml(
            r#"
[attributes.elements]
disambiguation = { prefer = ["jar"] }
"#,
        )
        .unwrap();
        let second = SchemaConfig::from_toml(
            r#"
[attributes.elements]
disambiguation = { prefer = ["classes"] }
"#,
        )
        .unwrap();

        let mut schema = AttributesSchema::new();
        first.apply_to(&mut schema).unwrap();
        let err = second.apply_to(&mut schema).unwrap_err();
        assert!(matches!(err, Error::DuplicateAttribute { ref name, .. } if name == "elements"));
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let config = SchemaConfig::from_toml(
            r#"
[attributes.usage]
compatibility = "fuzzy"
"#,
        )
        .unwrap();
        let mut schema = AttributesSchema::new();
        let err = config.apply_to(&mut schema).unwrap_err();
        assert!(matches!(err, Error::UnknownRule { role: "compatibility", .. }));
    }

    #[test]
    fn test_prefer_values_are_coerced() {
        let config = SchemaConfig::from_toml(
            r#"
[attributes.jvm]
kind = "integer"
disambiguation = { prefer = ["eleven"] }
"#,
        )
        .unwrap();
        let mut schema = AttributesSchema::new();
        assert!(matches!(
            config.apply_to(&mut schema),
            Err(Error::Model(_))
        ));
    }

    #[test]
    fn test_empty_config() {
        let config = SchemaConfig::from_toml("").unwrap();
        assert_eq!(config, SchemaConfig::default());
    }
}
