use proptest::prelude::*;
use variant_model::AttributeContainer;
use variant_schema::AttributesSchema;
use variant_select::{Error, VariantSelector};
use variant_test_utils::{strategies, usage_elements_schema};

fn schemas() -> impl Strategy<Value = AttributesSchema> {
    prop_oneof![
        Just(AttributesSchema::new()),
        Just(usage_elements_schema()),
        Just({
            let mut schema = usage_elements_schema();
            schema
                .set_precedence(["elements", "usage"])
                .expect("distinct names");
            schema
        }),
    ]
}

proptest! {
    #[test]
    fn test_filter_is_idempotent(
        schema in schemas(),
        request in strategies::container(),
        candidates in strategies::candidates(),
    ) {
        let selector = VariantSelector::new(&schema);
        let once = selector.filter(&request, &candidates);
        let twice = selector.filter(&request, once.iter().copied());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_ignores_request_order(
        schema in schemas(),
        request in strategies::container(),
        candidates in strategies::candidates(),
    ) {
        // Rebuild the request by inserting entries in reverse order.
        let reversed = request
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .fold(AttributeContainer::new(), |acc, (n, v)| acc.with(n.clone(), v.clone()));
        let selector = VariantSelector::new(&schema);
        prop_assert_eq!(
            selector.filter(&request, &candidates),
            selector.filter(&reversed, &candidates)
        );
    }

    #[test]
    fn test_empty_request_matches_everything(
        schema in schemas(),
        candidates in strategies::candidates(),
    ) {
        let selector = VariantSelector::new(&schema);
        let compatible = selector.filter(&AttributeContainer::new(), &candidates);
        prop_assert_eq!(compatible.len(), candidates.len());
    }

    #[test]
    fn test_selection_is_deterministic(
        schema in schemas(),
        request in strategies::container(),
        candidates in strategies::candidates(),
    ) {
        let selector = VariantSelector::new(&schema);
        let first = selector.select(&request, &candidates).map(|v| v.name().to_string());
        for _ in 0..3 {
            let again = selector.select(&request, &candidates).map(|v| v.name().to_string());
            prop_assert_eq!(&first, &again);
        }
    }

    #[test]
    fn test_selected_variant_is_compatible(
        schema in schemas(),
        request in strategies::container(),
        candidates in strategies::candidates(),
    ) {
        let selector = VariantSelector::new(&schema);
        match selector.select(&request, &candidates) {
            Ok(selected) => prop_assert!(selector.is_compatible(&request, selected)),
            Err(Error::NoCompatibleVariant { rejected, .. }) => {
                prop_assert_eq!(rejected.len(), candidates.len());
                prop_assert!(rejected.iter().all(|r| !r.mismatches.is_empty()));
            }
            Err(Error::AmbiguousVariant { candidates: tied, .. }) => {
                prop_assert!(tied.len() > 1);
            }
            Err(Error::NoCandidates { .. }) => prop_assert!(false, "candidates are never empty"),
        }
    }
}
