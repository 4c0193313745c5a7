//! Builders for variants, requests and schemas used across test suites.

use variant_model::{AttributeContainer, Variant};
use variant_schema::{AttributesSchema, ExactMatch, NoPreference, PreferValues};

/// Build a variant from `(name, value)` pairs.
pub fn variant(name: &str, attributes: &[(&str, &str)]) -> Variant {
    Variant::new(name, attributes.iter().copied().collect())
}

/// Build a consumer request from `(name, value)` pairs.
pub fn request(attributes: &[(&str, &str)]) -> AttributeContainer {
    attributes.iter().copied().collect()
}

/// Schema with `usage` (exact match, no preference) and `elements`
/// (exact match, prefers `jar`).
pub fn usage_elements_schema() -> AttributesSchema {
    let mut schema = AttributesSchema::new();
    schema
        .register("usage", ExactMatch, NoPreference)
        .expect("fresh schema accepts usage");
    schema
        .register(
            "elements",
            ExactMatch,
            PreferValues::new("elements", ["jar".into()]),
        )
        .expect("fresh schema accepts elements");
    schema
}
