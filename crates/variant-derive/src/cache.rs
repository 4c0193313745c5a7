//! Per-session memoization of derived variants.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use variant_model::{Component, ComponentId, Variant};

use crate::strategy::VariantDerivationStrategy;

/// Caches derived variants per component for one resolution session.
///
/// Strategies run outside the map's locks, so a strategy may read the cache
/// it is deriving into. The first writer wins: concurrent first lookups may
/// each derive, but only one result is stored and every caller receives the
/// same [`Arc`].
#[derive(Debug, Default)]
pub struct DerivationCache {
    entries: DashMap<ComponentId, Arc<[Variant]>>,
    derivations: AtomicUsize,
}

impl DerivationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived variants for `component`, deriving them on first use.
    pub fn get_or_derive(
        &self,
        component: &Component,
        strategy: &dyn VariantDerivationStrategy,
    ) -> Arc<[Variant]> {
        if let Some(hit) = self.entries.get(component.id()) {
            return Arc::clone(hit.value());
        }
        tracing::debug!(component = %component.id(), "Deriving variant");
        let derived: Arc<[Variant]> = Arc::from(vec![strategy.derive(component)]);
        match self.entries.entry(component.id().clone()) {
            Entry::Occupied(existing) => {
                tracing::trace!(component = %component.id(), "Lost derivation race");
                Arc::clone(existing.get())
            }
            Entry::Vacant(slot) => {
                self.derivations.fetch_add(1, Ordering::Relaxed);
                Arc::clone(slot.insert(derived).value())
            }
        }
    }

    /// Cached variants for `id`, without deriving.
    pub fn get(&self, id: &ComponentId) -> Option<Arc<[Variant]>> {
        self.entries.get(id).map(|e| Arc::clone(e.value()))
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.entries.contains_key(id)
    }

    /// How many derived results were stored in this cache.
    pub fn derivations(&self) -> usize {
        self.derivations.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
