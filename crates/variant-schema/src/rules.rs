//! Compatibility and disambiguation rules.
//!
//! A [`CompatibilityRule`] decides whether a producer value satisfies a
//! consumer value. A [`DisambiguationRule`] narrows the values offered by
//! several equally compatible candidates to the preferred ones.
//!
//! Every rule carries a stable id. Two rule sets are considered identical when
//! their ids match, which is what lets [`AttributesSchema::register`] accept an
//! identical re-registration while rejecting a conflicting one.
//!
//! [`AttributesSchema::register`]: crate::AttributesSchema::register

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use variant_model::AttributeValue;

/// Decides if a producer's value satisfies a consumer's requested value.
pub trait CompatibilityRule: Send + Sync {
    /// Stable identifier of this rule.
    fn id(&self) -> &str;

    /// Identity used to tell an identical re-registration from a conflicting
    /// one. Rules carrying data must include it here.
    fn fingerprint(&self) -> String {
        self.id().to_string()
    }

    /// Whether `producer` satisfies `consumer`.
    ///
    /// Equal values are always compatible; the schema does not consult the
    /// rule for them.
    fn is_compatible(&self, consumer: &AttributeValue, producer: &AttributeValue) -> bool;
}

/// Picks the preferred values among those offered by tied candidates.
pub trait DisambiguationRule: Send + Sync {
    /// Stable identifier of this rule.
    fn id(&self) -> &str;

    /// See [`CompatibilityRule::fingerprint`].
    fn fingerprint(&self) -> String {
        self.id().to_string()
    }

    /// Return the preferred subset of `candidates`.
    ///
    /// `consumer` is the requested value, or `None` when the consumer did not
    /// ask for this attribute. Returning an empty set (or every candidate)
    /// expresses no preference.
    fn preferred(
        &self,
        consumer: Option<&AttributeValue>,
        candidates: &BTreeSet<AttributeValue>,
    ) -> BTreeSet<AttributeValue>;
}

impl fmt::Debug for dyn CompatibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompatibilityRule({})", self.id())
    }
}

impl fmt::Debug for dyn DisambiguationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisambiguationRule({})", self.id())
    }
}

/// Default compatibility: only equal values match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl CompatibilityRule for ExactMatch {
    fn id(&self) -> &str {
        "exact"
    }

    fn is_compatible(&self, consumer: &AttributeValue, producer: &AttributeValue) -> bool {
        consumer == producer
    }
}

/// Integer compatibility: a producer value at most the consumer value
/// matches (a library built for JVM 8 runs on JVM 17, not the reverse).
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedCompatibility;

impl CompatibilityRule for OrderedCompatibility {
    fn id(&self) -> &str {
        "ordered"
    }

    fn is_compatible(&self, consumer: &AttributeValue, producer: &AttributeValue) -> bool {
        match (consumer.as_integer(), producer.as_integer()) {
            (Some(c), Some(p)) => p <= c,
            _ => consumer == producer,
        }
    }
}

/// Compatibility from an explicit table of `(consumer, producer)` pairs that
/// are accepted in addition to equal values.
#[derive(Debug, Clone)]
pub struct AcceptsTable {
    id: String,
    accepted: BTreeSet<(AttributeValue, AttributeValue)>,
}

impl AcceptsTable {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            accepted: BTreeSet::new(),
        }
    }

    /// Let a consumer asking for `consumer` accept a producer offering
    /// `producer`.
    pub fn accept(
        mut self,
        consumer: impl Into<AttributeValue>,
        producer: impl Into<AttributeValue>,
    ) -> Self {
        self.accepted.insert((consumer.into(), producer.into()));
        self
    }
}

impl CompatibilityRule for AcceptsTable {
    fn id(&self) -> &str {
        &self.id
    }

    fn fingerprint(&self) -> String {
        let pairs: Vec<String> = self
            .accepted
            .iter()
            .map(|(consumer, producer)| format!("{consumer}>{producer}"))
            .collect();
        format!("{}[{}]", self.id, pairs.join(","))
    }

    fn is_compatible(&self, consumer: &AttributeValue, producer: &AttributeValue) -> bool {
        consumer == producer
            || self
                .accepted
                .contains(&(consumer.clone(), producer.clone()))
    }
}

/// Default disambiguation: no preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreference;

impl DisambiguationRule for NoPreference {
    fn id(&self) -> &str {
        "none"
    }

    fn preferred(
        &self,
        _consumer: Option<&AttributeValue>,
        _candidates: &BTreeSet<AttributeValue>,
    ) -> BTreeSet<AttributeValue> {
        BTreeSet::new()
    }
}

/// Prefer what the consumer asked for; otherwise the first offered value of
/// an ordered preference list.
#[derive(Debug, Clone)]
pub struct PreferValues {
    id: String,
    order: Vec<AttributeValue>,
}

impl PreferValues {
    pub fn new(id: impl Into<String>, order: impl IntoIterator<Item = AttributeValue>) -> Self {
        Self {
            id: id.into(),
            order: order.into_iter().collect(),
        }
    }

    pub fn order(&self) -> &[AttributeValue] {
        &self.order
    }
}

impl DisambiguationRule for PreferValues {
    fn id(&self) -> &str {
        &self.id
    }

    fn fingerprint(&self) -> String {
        let order: Vec<String> = self.order.iter().map(ToString::to_string).collect();
        format!("{}[{}]", self.id, order.join(","))
    }

    fn preferred(
        &self,
        consumer: Option<&AttributeValue>,
        candidates: &BTreeSet<AttributeValue>,
    ) -> BTreeSet<AttributeValue> {
        if let Some(requested) = consumer.filter(|c| candidates.contains(*c)) {
            return BTreeSet::from([requested.clone()]);
        }
        self.order
            .iter()
            .find(|v| candidates.contains(*v))
            .map(|v| BTreeSet::from([v.clone()]))
            .unwrap_or_default()
    }
}

/// Prefer the largest integer not above the consumer value, or the largest
/// overall when the consumer did not ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestOrdered;

impl DisambiguationRule for ClosestOrdered {
    fn id(&self) -> &str {
        "closest-ordered"
    }

    fn preferred(
        &self,
        consumer: Option<&AttributeValue>,
        candidates: &BTreeSet<AttributeValue>,
    ) -> BTreeSet<AttributeValue> {
        let ceiling = consumer.and_then(AttributeValue::as_integer);
        candidates
            .iter()
            .filter_map(AttributeValue::as_integer)
            .filter(|v| ceiling.is_none_or(|c| *v <= c))
            .max()
            .map(|v| BTreeSet::from([AttributeValue::Integer(v)]))
            .unwrap_or_default()
    }
}

type CompatibilityPredicate = dyn Fn(&AttributeValue, &AttributeValue) -> bool + Send + Sync;

/// Closure-backed compatibility rule.
pub struct CompatibilityFn {
    id: String,
    predicate: Arc<CompatibilityPredicate>,
}

impl CompatibilityFn {
    pub fn new(
        id: impl Into<String>,
        predicate: impl Fn(&AttributeValue, &AttributeValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            predicate: Arc::new(predicate),
        }
    }
}

impl CompatibilityRule for CompatibilityFn {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_compatible(&self, consumer: &AttributeValue, producer: &AttributeValue) -> bool {
        (self.predicate)(consumer, producer)
    }
}

type PreferenceFn = dyn Fn(Option<&AttributeValue>, &BTreeSet<AttributeValue>) -> BTreeSet<AttributeValue>
    + Send
    + Sync;

/// Closure-backed disambiguation rule.
pub struct DisambiguationFn {
    id: String,
    choose: Arc<PreferenceFn>,
}

impl DisambiguationFn {
    pub fn new(
        id: impl Into<String>,
        choose: impl Fn(Option<&AttributeValue>, &BTreeSet<AttributeValue>) -> BTreeSet<AttributeValue>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            choose: Arc::new(choose),
        }
    }
}

impl DisambiguationRule for DisambiguationFn {
    fn id(&self) -> &str {
        &self.id
    }

    fn preferred(
        &self,
        consumer: Option<&AttributeValue>,
        candidates: &BTreeSet<AttributeValue>,
    ) -> BTreeSet<AttributeValue> {
        (self.choose)(consumer, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(values: &[AttributeValue]) -> BTreeSet<AttributeValue> {
        values.iter().cloned().collect()
    }

    #[test]
    fn test_exact_match() {
        let rule = ExactMatch;
        assert!(rule.is_compatible(&"jar".into(), &"jar".into()));
        assert!(!rule.is_compatible(&"jar".into(), &"classes".into()));
    }

    #[test]
    fn test_ordered_compatibility() {
        let rule = OrderedCompatibility;
        assert!(rule.is_compatible(&17i64.into(), &8i64.into()));
        assert!(rule.is_compatible(&17i64.into(), &17i64.into()));
        assert!(!rule.is_compatible(&8i64.into(), &11i64.into()));
    }

    #[test]
    fn test_accepts_table_is_directional() {
        let rule = AcceptsTable::new("usage").accept("java-api", "java-runtime");
        assert!(rule.is_compatible(&"java-api".into(), &"java-runtime".into()));
        assert!(!rule.is_compatible(&"java-runtime".into(), &"java-api".into()));
    }

    #[test]
    fn test_fingerprint_carries_table_content() {
        let narrow = AcceptsTable::new("usage").accept("java-api", "java-runtime");
        let empty = AcceptsTable::new("usage");
        assert_eq!(narrow.fingerprint(), "usage[java-api>java-runtime]");
        assert_eq!(empty.fingerprint(), "usage[]");

        let jar = PreferValues::new("elements", ["jar".into(), "classes".into()]);
        assert_eq!(jar.fingerprint(), "elements[jar,classes]");
    }

    #[test]
    fn test_prefer_values_consumer_first() {
        let rule = PreferValues::new("elements", ["jar".into()]);
        let candidates = set(&["jar".into(), "classes".into()]);

        assert_eq!(
            rule.preferred(Some(&"classes".into()), &candidates),
            set(&["classes".into()])
        );
        assert_eq!(rule.preferred(None, &candidates), set(&["jar".into()]));
    }

    #[test]
    fn test_prefer_values_without_match_has_no_preference() {
        let rule = PreferValues::new("elements", ["jar".into()]);
        let candidates = set(&["classes".into(), "resources".into()]);
        assert!(rule.preferred(None, &candidates).is_empty());
    }

    #[test]
    fn test_closest_ordered() {
        let rule = ClosestOrdered;
        let candidates = set(&[8i64.into(), 11i64.into(), 21i64.into()]);

        assert_eq!(
            rule.preferred(Some(&17i64.into()), &candidates),
            set(&[11i64.into()])
        );
        assert_eq!(rule.preferred(None, &candidates), set(&[21i64.into()]));
    }

    #[test]
    fn test_no_preference() {
        let candidates = set(&["a".into(), "b".into()]);
        assert!(NoPreference.preferred(None, &candidates).is_empty());
    }

    #[test]
    fn test_closure_rules() {
        let compat = CompatibilityFn::new("any", |_, _| true);
        assert!(compat.is_compatible(&"x".into(), &"y".into()));
        assert_eq!(compat.id(), "any");
        assert_eq!(compat.fingerprint(), "any");

        let disamb = DisambiguationFn::new("first", |_, c| c.iter().take(1).cloned().collect());
        let chosen = disamb.preferred(None, &set(&["b".into(), "a".into()]));
        assert_eq!(chosen, set(&["a".into()]));
    }
}
