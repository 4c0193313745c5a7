//! Variant selection: filter by compatibility, then disambiguate.

use std::collections::BTreeSet;

use variant_model::{AttributeContainer, AttributeName, AttributeValue, Variant};
use variant_schema::AttributesSchema;

use crate::diagnostics::{Mismatch, Rejection, TiedCandidate};
use crate::error::{Error, Result};

/// Picks exactly one variant for a consumer request.
///
/// The selector borrows a read-only schema and holds no other state, so one
/// instance can serve any number of edges, from any number of threads.
///
/// Selection runs in two phases:
///
/// 1. **Filter.** A candidate survives when every requested attribute is
///    either missing on the candidate (wildcard) or compatible per the
///    schema. The result does not depend on the order of requested
///    attributes.
/// 2. **Disambiguate.** While more than one candidate remains, attributes are
///    visited in [`disambiguation order`](Self::disambiguation_order) and the
///    attribute's rule narrows the tied candidates to the preferred values.
#[derive(Debug, Clone, Copy)]
pub struct VariantSelector<'s> {
    schema: &'s AttributesSchema,
}

impl<'s> VariantSelector<'s> {
    pub fn new(schema: &'s AttributesSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'s AttributesSchema {
        self.schema
    }

    /// Select the single best candidate for `request`.
    ///
    /// # Errors
    ///
    /// - [`Error::NoCandidates`] if `candidates` is empty
    /// - [`Error::NoCompatibleVariant`] if filtering discards every candidate
    /// - [`Error::AmbiguousVariant`] if disambiguation leaves several
    pub fn select<'v>(
        &self,
        request: &AttributeContainer,
        candidates: &'v [Variant],
    ) -> Result<&'v Variant> {
        if candidates.is_empty() {
            return Err(Error::NoCandidates {
                requested: request.clone(),
            });
        }

        let compatible = self.filter(request, candidates);
        tracing::debug!(
            request = %request,
            candidates = candidates.len(),
            compatible = compatible.len(),
            "Filtered candidate variants"
        );

        match compatible.len() {
            0 => Err(Error::NoCompatibleVariant {
                requested: request.clone(),
                rejected: candidates
                    .iter()
                    .map(|variant| Rejection {
                        variant: variant.name().to_string(),
                        attributes: variant.attributes().clone(),
                        mismatches: self.mismatches(request, variant),
                    })
                    .collect(),
            }),
            1 => Ok(compatible[0]),
            _ => {
                let remaining = self.disambiguate(request, compatible);
                match remaining.as_slice() {
                    [only] => Ok(*only),
                    tied => Err(Error::AmbiguousVariant {
                        requested: request.clone(),
                        candidates: tied.iter().map(|v| TiedCandidate::from(*v)).collect(),
                    }),
                }
            }
        }
    }

    /// Keep the candidates compatible with every requested attribute, in
    /// their original order.
    pub fn filter<'v>(
        &self,
        request: &AttributeContainer,
        candidates: impl IntoIterator<Item = &'v Variant>,
    ) -> Vec<&'v Variant> {
        candidates
            .into_iter()
            .filter(|variant| self.is_compatible(request, variant))
            .collect()
    }

    /// Whether `variant` satisfies every attribute of `request`.
    pub fn is_compatible(&self, request: &AttributeContainer, variant: &Variant) -> bool {
        request.iter().all(|(name, requested)| {
            let compatible = match variant.attribute(name.as_str()) {
                None => true,
                Some(offered) => self.schema.is_compatible(name.as_str(), requested, offered),
            };
            if !compatible {
                tracing::trace!(variant = variant.name(), attribute = %name, "Incompatible");
            }
            compatible
        })
    }

    /// Every requested attribute `variant` fails to satisfy.
    pub fn mismatches(&self, request: &AttributeContainer, variant: &Variant) -> Vec<Mismatch> {
        request
            .iter()
            .filter_map(|(name, requested)| {
                let offered = variant.attribute(name.as_str())?;
                (!self.schema.is_compatible(name.as_str(), requested, offered)).then(|| Mismatch {
                    attribute: name.clone(),
                    requested: requested.clone(),
                    offered: offered.clone(),
                })
            })
            .collect()
    }

    /// The order in which attributes are consulted to break ties:
    ///
    /// 1. the schema's explicit precedence list
    /// 2. remaining requested attributes, by name
    /// 3. remaining attributes only the candidates carry, by name
    pub fn disambiguation_order(
        &self,
        request: &AttributeContainer,
        candidates: &[&Variant],
    ) -> Vec<AttributeName> {
        let mut order: Vec<AttributeName> = self.schema.precedence().to_vec();
        let listed: BTreeSet<AttributeName> = order.iter().cloned().collect();

        order.extend(request.names().filter(|n| !listed.contains(*n)).cloned());

        let extra: BTreeSet<&AttributeName> = candidates
            .iter()
            .flat_map(|v| v.attributes().names())
            .filter(|n| !listed.contains(*n) && !request.contains(n.as_str()))
            .collect();
        order.extend(extra.into_iter().cloned());
        order
    }

    fn disambiguate<'v>(
        &self,
        request: &AttributeContainer,
        mut tied: Vec<&'v Variant>,
    ) -> Vec<&'v Variant> {
        for name in self.disambiguation_order(request, &tied) {
            if tied.len() <= 1 {
                break;
            }
            tied = self.narrow(&name, request.get(name.as_str()), tied);
        }
        tied
    }

    /// Narrow `tied` to the candidates whose value for `name` the attribute's
    /// rule prefers. A rule expressing no preference leaves `tied` as is.
    fn narrow<'v>(
        &self,
        name: &AttributeName,
        consumer: Option<&AttributeValue>,
        tied: Vec<&'v Variant>,
    ) -> Vec<&'v Variant> {
        let offered: BTreeSet<AttributeValue> = tied
            .iter()
            .filter_map(|v| v.attribute(name.as_str()).cloned())
            .collect();
        if offered.is_empty() {
            return tied;
        }

        let preferred = self
            .schema
            .disambiguation_rule(name.as_str())
            .preferred(consumer, &offered);
        if preferred.is_empty() || offered.is_subset(&preferred) {
            return tied;
        }

        let narrowed: Vec<&'v Variant> = tied
            .iter()
            .copied()
            .filter(|v| {
                v.attribute(name.as_str())
                    .is_some_and(|value| preferred.contains(value))
            })
            .collect();
        if narrowed.is_empty() {
            return tied;
        }
        tracing::debug!(
            attribute = %name,
            before = tied.len(),
            after = narrowed.len(),
            "Narrowed tied variants"
        );
        narrowed
    }
}
