//! Diagnostic records attached to selection failures.

use std::fmt::{self, Write as _};

use variant_model::{AttributeContainer, AttributeName, AttributeValue, Variant};

/// One requested attribute a candidate failed to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub attribute: AttributeName,
    pub requested: AttributeValue,
    pub offered: AttributeValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (requested {}, offered {})",
            self.attribute, self.requested, self.offered
        )
    }
}

/// A candidate discarded during filtering, with every attribute that
/// rejected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub variant: String,
    pub attributes: AttributeContainer,
    pub mismatches: Vec<Mismatch>,
}

/// A candidate still tied after disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiedCandidate {
    pub variant: String,
    pub attributes: AttributeContainer,
}

impl From<&Variant> for TiedCandidate {
    fn from(variant: &Variant) -> Self {
        Self {
            variant: variant.name().to_string(),
            attributes: variant.attributes().clone(),
        }
    }
}

pub(crate) fn describe_rejections(
    requested: &AttributeContainer,
    rejected: &[Rejection],
) -> String {
    let mut out = format!("no variant is compatible with {}", requested);
    for rejection in rejected {
        let reasons: Vec<String> = rejection.mismatches.iter().map(|m| m.to_string()).collect();
        let _ = write!(
            out,
            "\n  - '{}' {}: incompatible {}",
            rejection.variant,
            rejection.attributes,
            reasons.join(", ")
        );
    }
    out
}

pub(crate) fn describe_ambiguity(
    requested: &AttributeContainer,
    candidates: &[TiedCandidate],
) -> String {
    let mut out = format!(
        "cannot choose between {} variants for {}",
        candidates.len(),
        requested
    );
    for candidate in candidates {
        let _ = write!(out, "\n  - '{}' {}", candidate.variant, candidate.attributes);
    }
    out
}
