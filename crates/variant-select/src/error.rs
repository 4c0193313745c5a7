//! Error types for variant-select

use variant_model::AttributeContainer;

use crate::diagnostics::{Rejection, TiedCandidate, describe_ambiguity, describe_rejections};

pub type Result<T> = std::result::Result<T, Error>;

/// Structural selection failures.
///
/// None of these are recovered from locally; the graph resolver decides
/// whether one aborts the whole resolution or is reported per edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No candidate satisfies the request.
    #[error("{}", describe_rejections(.requested, .rejected))]
    NoCompatibleVariant {
        requested: AttributeContainer,
        rejected: Vec<Rejection>,
    },

    /// More than one candidate is equally preferred after disambiguation.
    #[error("{}", describe_ambiguity(.requested, .candidates))]
    AmbiguousVariant {
        requested: AttributeContainer,
        candidates: Vec<TiedCandidate>,
    },

    /// The selector was called without candidates.
    #[error("no candidate variants to select from for {requested}")]
    NoCandidates { requested: AttributeContainer },
}
