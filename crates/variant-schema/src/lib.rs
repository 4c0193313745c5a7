//! Attribute schema for variant-aware dependency resolution.
//!
//! The schema maps each attribute name to a pair of strategy objects:
//!
//! - a [`CompatibilityRule`] deciding whether a producer value satisfies a
//!   consumer value
//! - a [`DisambiguationRule`] narrowing several compatible values to the
//!   preferred ones
//!
//! plus an explicit precedence order used when disambiguating. Unregistered
//! attributes use [`ExactMatch`] and [`NoPreference`].
//!
//! Schemas are built in code or from a TOML [`SchemaConfig`], then shared
//! read-only for the lifetime of a resolution session.

pub mod config;
pub mod error;
pub mod rules;
pub mod schema;

pub use config::{AttributeConfig, CompatibilitySpec, DisambiguationSpec, SchemaConfig};
pub use error::{Error, Result};
pub use rules::{
    AcceptsTable, ClosestOrdered, CompatibilityFn, CompatibilityRule, DisambiguationFn,
    DisambiguationRule, ExactMatch, NoPreference, OrderedCompatibility, PreferValues,
};
pub use schema::{AttributesSchema, RuleSet};
