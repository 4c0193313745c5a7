//! Error types for variant-schema

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute was registered twice with different rules.
    #[error(
        "attribute '{name}' is already registered with {existing}; refusing to replace it with {requested}"
    )]
    DuplicateAttribute {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("invalid precedence order: '{name}' appears more than once")]
    InvalidPrecedence { name: String },

    #[error("unknown {role} rule '{rule}' for attribute '{attribute}'")]
    UnknownRule {
        attribute: String,
        role: &'static str,
        rule: String,
    },

    #[error("failed to parse schema config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("schema config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Model(#[from] variant_model::Error),
}
