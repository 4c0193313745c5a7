//! Data types for attribute-based variant resolution.
//!
//! This crate is the bottom layer of the workspace. It defines:
//!
//! - [`AttributeName`] / [`AttributeValue`] / [`AttributeKind`]: typed, named
//!   coordinates describing what a variant offers or a consumer needs
//! - [`AttributeContainer`]: an immutable, possibly partial attribute set
//! - [`Variant`] and [`ArtifactRef`]: what a producer publishes
//! - [`Component`] and [`ComponentId`]: the producer of a dependency edge
//!
//! Matching logic lives in `variant-schema` and `variant-select`.

pub mod attribute;
pub mod component;
pub mod container;
pub mod error;
pub mod variant;

pub use attribute::{AttributeKind, AttributeName, AttributeValue};
pub use component::{Component, ComponentId};
pub use container::AttributeContainer;
pub use error::{Error, Result};
pub use variant::{ArtifactRef, Variant};
