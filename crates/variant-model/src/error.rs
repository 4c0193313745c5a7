//! Error types for variant-model

use crate::attribute::AttributeKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid value '{value}' for attribute '{name}': expected {kind}")]
    InvalidAttributeValue {
        name: String,
        value: String,
        kind: AttributeKind,
    },

    #[error("unknown attribute kind: {kind}")]
    UnknownKind { kind: String },

    #[error("invalid component id '{id}': expected group:module:version")]
    InvalidComponentId { id: String },
}
