//! Shared test fixtures for the variant resolution workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: terse builders for variants, requests and small schemas
//! - [`strategies`]: proptest strategies for containers and candidate lists

pub mod fixtures;
pub mod strategies;

pub use fixtures::{request, usage_elements_schema, variant};
