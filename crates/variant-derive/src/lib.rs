//! Variant derivation for components without variant metadata.
//!
//! Components from legacy repositories publish a bare archive and a
//! descriptor, no variants. A [`VariantDerivationStrategy`] synthesizes a
//! variant for them so the selector can treat every component the same way.
//!
//! - [`ArtifactTypeRegistry`]: default attributes per artifact type
//! - [`ArtifactTypeDerivation`]: the registry-backed strategy
//! - [`DerivationCache`]: per-session memoization, first write wins

pub mod artifact_types;
pub mod cache;
pub mod strategy;

pub use artifact_types::ArtifactTypeRegistry;
pub use cache::DerivationCache;
pub use strategy::{ArtifactTypeDerivation, DERIVED_VARIANT_NAME, VariantDerivationStrategy};
