//! Error types for variant-core

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a resolution session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The module metadata document is not valid JSON or misses fields
    #[error("Failed to parse module metadata: {0}")]
    MetadataParse(#[from] serde_json::Error),

    /// The metadata format version is not one this reader understands
    #[error("Unsupported module metadata format version: {version}")]
    UnsupportedFormat { version: String },

    /// An attribute value in metadata is neither string, number nor boolean
    #[error("Invalid value for attribute '{attribute}' in variant '{variant}': {value}")]
    InvalidMetadataValue {
        variant: String,
        attribute: String,
        value: String,
    },

    // Transparent wrappers for underlying crate errors
    #[error(transparent)]
    Model(#[from] variant_model::Error),

    #[error(transparent)]
    Schema(#[from] variant_schema::Error),

    #[error(transparent)]
    Select(#[from] variant_select::Error),
}
