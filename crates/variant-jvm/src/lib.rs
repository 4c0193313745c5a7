//! JVM ecosystem wiring.
//!
//! Declares the standard JVM attributes (usage, library elements, category,
//! bundling, target JVM version, environment, docs type), their compatibility
//! and disambiguation rules, the artifact types a legacy JVM repository
//! publishes, and the derivation strategy used for components without
//! variant metadata.
//!
//! ```
//! use variant_jvm::{JvmEcosystem, attributes};
//! use variant_schema::AttributesSchema;
//!
//! let mut schema = AttributesSchema::new();
//! JvmEcosystem::new().configure_schema(&mut schema).unwrap();
//! assert!(schema.is_registered(attributes::USAGE));
//! ```

pub mod attributes;
pub mod ecosystem;
pub mod rules;

pub use ecosystem::JvmEcosystem;
pub use rules::{UsageCompatibility, UsageDisambiguation};
