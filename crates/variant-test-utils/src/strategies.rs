//! Proptest strategies over a deliberately small attribute space, so that
//! generated requests and candidates collide often.

use proptest::prelude::*;
use variant_model::{AttributeContainer, Variant};

const NAMES: &[&str] = &["usage", "elements", "category", "bundling"];
const VALUES: &[&str] = &["jar", "classes", "runtime", "api", "library"];

/// A partial container over the small attribute space.
pub fn container() -> impl Strategy<Value = AttributeContainer> {
    proptest::collection::btree_map(
        proptest::sample::select(NAMES),
        proptest::sample::select(VALUES),
        0..=NAMES.len(),
    )
    .prop_map(|entries| entries.into_iter().collect())
}

/// One to six candidates with distinct names.
pub fn candidates() -> impl Strategy<Value = Vec<Variant>> {
    proptest::collection::vec(container(), 1..6).prop_map(|containers| {
        containers
            .into_iter()
            .enumerate()
            .map(|(i, attributes)| Variant::new(format!("variant-{i}"), attributes))
            .collect()
    })
}
