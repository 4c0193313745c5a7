//! Variant selection for variant-aware dependency resolution.
//!
//! Given a schema, a consumer request and the candidate variants of a
//! component, [`VariantSelector::select`] returns exactly one variant or a
//! structural failure carrying full diagnostics:
//!
//! - [`Error::NoCompatibleVariant`] lists every rejected candidate and the
//!   attributes that rejected it
//! - [`Error::AmbiguousVariant`] lists every tied candidate with its
//!   attributes
//!
//! # Example
//!
//! ```
//! use variant_model::{AttributeContainer, Variant};
//! use variant_schema::AttributesSchema;
//! use variant_select::VariantSelector;
//!
//! let schema = AttributesSchema::new();
//! let candidates = vec![
//!     Variant::new("compile", AttributeContainer::new().with("usage", "compile")),
//!     Variant::new("runtime", AttributeContainer::new().with("usage", "runtime")),
//! ];
//! let request = AttributeContainer::new().with("usage", "runtime");
//!
//! let selected = VariantSelector::new(&schema).select(&request, &candidates).unwrap();
//! assert_eq!(selected.name(), "runtime");
//! ```

pub mod diagnostics;
pub mod error;
pub mod selector;

pub use diagnostics::{Mismatch, Rejection, TiedCandidate};
pub use error::{Error, Result};
pub use selector::VariantSelector;
