//! Variant-aware resolution sessions
//!
//! This crate ties the lower layers together:
//!
//! ```text
//!                 variant-core
//!                      |
//!       +--------------+--------------+
//!       |              |              |
//! variant-select  variant-derive  variant-jvm
//!       |              |              |
//!       +------ variant-schema -------+
//!                      |
//!                variant-model
//! ```
//!
//! A [`ResolutionSession`] is built once per resolution from a
//! [`SessionBuilder`], usually with an [`Ecosystem`] such as
//! [`JvmEcosystem`] applied. It then answers, for any number of dependency
//! edges and from any number of threads, which variant of a component
//! matches a consumer's request.
//!
//! # Example
//!
//! ```
//! use variant_core::{JvmEcosystem, ResolutionSession};
//! use variant_model::{AttributeContainer, Component, ComponentId};
//!
//! # fn main() -> variant_core::Result<()> {
//! let mut builder = ResolutionSession::builder();
//! builder.ecosystem(&JvmEcosystem::new())?;
//! let session = builder.build()?;
//!
//! let legacy = Component::legacy(
//!     ComponentId::new("commons-io", "commons-io", "2.4"),
//!     Some("jar"),
//!     vec![],
//! );
//! let request = AttributeContainer::new().with("org.gradle.usage", "java-runtime");
//! let variant = session.select(&legacy, &request)?;
//! assert_eq!(variant.name(), "default");
//! # Ok(())
//! # }
//! ```

pub mod ecosystem;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod session;

pub use ecosystem::Ecosystem;
pub use error::{Error, Result};
pub use metadata::{ComponentCoordinates, FileMetadata, ModuleMetadata, VariantMetadata};
pub use session::{ResolutionSession, SessionBuilder};
pub use variant_jvm::JvmEcosystem;
