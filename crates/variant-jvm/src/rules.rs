//! Rules specific to the JVM attributes.
//!
//! Most JVM attributes are expressed with the generic [`AcceptsTable`] and
//! [`PreferValues`] rules. Usage needs its own pair because legacy values
//! (`java-api-jars`, `java-runtime-jars`) must be treated as their current
//! spelling on both sides.

use std::collections::BTreeSet;

use variant_model::AttributeValue;
use variant_schema::{AcceptsTable, CompatibilityRule, DisambiguationRule, PreferValues};

use crate::attributes::{bundling, category, environment, library_elements, usage};

/// Usage compatibility: an API consumer also accepts a runtime variant,
/// since the runtime classpath is a superset of the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageCompatibility;

impl CompatibilityRule for UsageCompatibility {
    fn id(&self) -> &str {
        "jvm-usage"
    }

    fn is_compatible(&self, consumer: &AttributeValue, producer: &AttributeValue) -> bool {
        let consumer = usage::canonical(consumer);
        let producer = usage::canonical(producer);
        consumer == producer
            || (consumer.as_named() == Some(usage::JAVA_API)
                && producer.as_named() == Some(usage::JAVA_RUNTIME))
    }
}

/// Usage disambiguation.
///
/// The consumer's own usage wins when offered. Otherwise an API consumer
/// prefers `java-api` then `java-runtime`; a consumer that did not ask for
/// a usage gets `java-runtime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageDisambiguation;

impl DisambiguationRule for UsageDisambiguation {
    fn id(&self) -> &str {
        "jvm-usage"
    }

    fn preferred(
        &self,
        consumer: Option<&AttributeValue>,
        candidates: &BTreeSet<AttributeValue>,
    ) -> BTreeSet<AttributeValue> {
        let consumer = consumer.map(usage::canonical);
        let mut order: Vec<AttributeValue> = Vec::new();
        if let Some(requested) = &consumer {
            order.push(requested.clone());
        }
        if consumer.as_ref().and_then(AttributeValue::as_named) == Some(usage::JAVA_API) {
            order.push(AttributeValue::named(usage::JAVA_API));
        }
        order.push(AttributeValue::named(usage::JAVA_RUNTIME));

        for wanted in &order {
            let matching: BTreeSet<AttributeValue> = candidates
                .iter()
                .filter(|offered| usage::canonical(offered) == *wanted)
                .cloned()
                .collect();
            if !matching.is_empty() {
                return matching;
            }
        }
        BTreeSet::new()
    }
}

/// A jar carries classes and resources, so consumers of either accept it.
pub fn library_elements_compatibility() -> AcceptsTable {
    AcceptsTable::new("jvm-library-elements")
        .accept(library_elements::CLASSES, library_elements::JAR)
        .accept(library_elements::RESOURCES, library_elements::JAR)
        .accept(library_elements::CLASSES_AND_RESOURCES, library_elements::JAR)
}

pub fn library_elements_disambiguation() -> PreferValues {
    PreferValues::new(
        "jvm-library-elements",
        [AttributeValue::named(library_elements::JAR)],
    )
}

pub fn category_compatibility() -> AcceptsTable {
    AcceptsTable::new("jvm-category").accept(category::PLATFORM, category::ENFORCED_PLATFORM)
}

pub fn category_disambiguation() -> PreferValues {
    PreferValues::new("jvm-category", [AttributeValue::named(category::LIBRARY)])
}

/// An external-dependencies consumer can live with a fat jar.
pub fn bundling_compatibility() -> AcceptsTable {
    AcceptsTable::new("jvm-bundling")
        .accept(bundling::EXTERNAL, bundling::EMBEDDED)
        .accept(bundling::EXTERNAL, bundling::SHADOWED)
}

pub fn bundling_disambiguation() -> PreferValues {
    PreferValues::new("jvm-bundling", [AttributeValue::named(bundling::EXTERNAL)])
}

pub fn environment_disambiguation() -> PreferValues {
    PreferValues::new(
        "jvm-environment",
        [AttributeValue::named(environment::STANDARD_JVM)],
    )
}
