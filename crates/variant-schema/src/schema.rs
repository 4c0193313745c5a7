//! The attributes schema: a registry of per-attribute rules.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use variant_model::{AttributeContainer, AttributeKind, AttributeName, AttributeValue};

use crate::error::{Error, Result};
use crate::rules::{CompatibilityRule, DisambiguationRule, ExactMatch, NoPreference};

/// Rules and value kind registered for one attribute.
#[derive(Clone)]
pub struct RuleSet {
    pub kind: AttributeKind,
    pub compatibility: Arc<dyn CompatibilityRule>,
    pub disambiguation: Arc<dyn DisambiguationRule>,
}

impl RuleSet {
    pub fn new(
        kind: AttributeKind,
        compatibility: impl CompatibilityRule + 'static,
        disambiguation: impl DisambiguationRule + 'static,
    ) -> Self {
        Self {
            kind,
            compatibility: Arc::new(compatibility),
            disambiguation: Arc::new(disambiguation),
        }
    }

    /// Two rule sets are the same when kind and both rule fingerprints match.
    pub fn same_as(&self, other: &RuleSet) -> bool {
        self.kind == other.kind
            && self.compatibility.fingerprint() == other.compatibility.fingerprint()
            && self.disambiguation.fingerprint() == other.disambiguation.fingerprint()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[kind={}, compatibility={}, disambiguation={}]",
            self.kind,
            self.compatibility.fingerprint(),
            self.disambiguation.fingerprint()
        )
    }
}

/// Registry mapping attribute names to their rules.
///
/// The schema is built once per resolution session and read-only afterwards;
/// share it behind an [`Arc`] across concurrently resolved edges. Attributes
/// that were never registered fall back to [`ExactMatch`] compatibility and
/// [`NoPreference`] disambiguation, so ad-hoc attributes still work.
///
/// # Example
///
/// ```
/// use variant_schema::{AttributesSchema, ExactMatch, PreferValues};
///
/// let mut schema = AttributesSchema::new();
/// schema
///     .register("usage", ExactMatch, PreferValues::new("usage", ["runtime".into()]))
///     .unwrap();
/// // identical re-registration is a no-op
/// schema
///     .register("usage", ExactMatch, PreferValues::new("usage", ["runtime".into()]))
///     .unwrap();
/// assert!(schema.is_registered("usage"));
/// ```
#[derive(Debug, Clone)]
pub struct AttributesSchema {
    rules: HashMap<AttributeName, RuleSet>,
    precedence: Vec<AttributeName>,
    default_compatibility: Arc<dyn CompatibilityRule>,
    default_disambiguation: Arc<dyn DisambiguationRule>,
}

impl Default for AttributesSchema {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            precedence: Vec::new(),
            default_compatibility: Arc::new(ExactMatch),
            default_disambiguation: Arc::new(NoPreference),
        }
    }
}

impl AttributesSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rules for a named attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAttribute`] if `name` is already registered
    /// with a different rule set.
    pub fn register(
        &mut self,
        name: impl Into<AttributeName>,
        compatibility: impl CompatibilityRule + 'static,
        disambiguation: impl DisambiguationRule + 'static,
    ) -> Result<()> {
        self.register_rule_set(
            name,
            RuleSet::new(AttributeKind::Named, compatibility, disambiguation),
        )
    }

    /// Register the rules for an attribute of the given kind.
    pub fn register_with_kind(
        &mut self,
        name: impl Into<AttributeName>,
        kind: AttributeKind,
        compatibility: impl CompatibilityRule + 'static,
        disambiguation: impl DisambiguationRule + 'static,
    ) -> Result<()> {
        self.register_rule_set(name, RuleSet::new(kind, compatibility, disambiguation))
    }

    /// Register a prepared rule set.
    pub fn register_rule_set(&mut self, name: impl Into<AttributeName>, rules: RuleSet) -> Result<()> {
        let name = name.into();
        if let Some(existing) = self.rules.get(&name) {
            if existing.same_as(&rules) {
                tracing::debug!(attribute = %name, "Identical re-registration ignored");
                return Ok(());
            }
            return Err(Error::DuplicateAttribute {
                name: name.to_string(),
                existing: existing.to_string(),
                requested: rules.to_string(),
            });
        }
        tracing::debug!(attribute = %name, rules = %rules, "Registered attribute");
        self.rules.insert(name, rules);
        Ok(())
    }

    /// Declare the order in which attributes are consulted during
    /// disambiguation.
    ///
    /// Replaces any previous order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecedence`] if a name is listed twice.
    pub fn set_precedence<I, N>(&mut self, order: I) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: Into<AttributeName>,
    {
        let order: Vec<AttributeName> = order.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for name in &order {
            if !seen.insert(name) {
                return Err(Error::InvalidPrecedence {
                    name: name.to_string(),
                });
            }
        }
        self.precedence = order;
        Ok(())
    }

    pub fn precedence(&self) -> &[AttributeName] {
        &self.precedence
    }

    pub fn rule_set(&self, name: &str) -> Option<&RuleSet> {
        self.rules.get(name)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Compatibility rule for `name`, or exact-match when unregistered.
    pub fn compatibility_rule(&self, name: &str) -> &dyn CompatibilityRule {
        self.rules
            .get(name)
            .map(|r| r.compatibility.as_ref())
            .unwrap_or(self.default_compatibility.as_ref())
    }

    /// Disambiguation rule for `name`, or no-preference when unregistered.
    pub fn disambiguation_rule(&self, name: &str) -> &dyn DisambiguationRule {
        self.rules
            .get(name)
            .map(|r| r.disambiguation.as_ref())
            .unwrap_or(self.default_disambiguation.as_ref())
    }

    /// Declared kind of `name`; unregistered attributes are named.
    pub fn kind(&self, name: &str) -> AttributeKind {
        self.rules.get(name).map(|r| r.kind).unwrap_or_default()
    }

    /// Whether `producer` satisfies `consumer` for attribute `name`.
    pub fn is_compatible(
        &self,
        name: &str,
        consumer: &AttributeValue,
        producer: &AttributeValue,
    ) -> bool {
        consumer == producer || self.compatibility_rule(name).is_compatible(consumer, producer)
    }

    /// Coerce a raw metadata string to the declared kind of `name`.
    pub fn coerce(&self, name: &str, raw: &str) -> Result<AttributeValue> {
        let attribute = AttributeName::new(name);
        Ok(self.kind(name).coerce(&attribute, raw)?)
    }

    /// Re-type the values of `container` according to the declared kinds.
    pub fn normalize(&self, container: &AttributeContainer) -> Result<AttributeContainer> {
        container
            .iter()
            .map(|(name, value)| -> Result<(AttributeName, AttributeValue)> {
                let converted = self.kind(name.as_str()).convert(name, value.clone())?;
                Ok((name.clone(), converted))
            })
            .collect()
    }

    /// Registered attribute names, sorted.
    pub fn attribute_names(&self) -> Vec<&AttributeName> {
        let mut names: Vec<&AttributeName> = self.rules.keys().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
