//! Latest-version selection policies
//!
//! A selector picks the "latest" identity from a non-empty candidate set,
//! using the active strategy's ordering. Its outcome is the tagged
//! [`Selection`] variant, so a tie is a structural result the resolver can
//! react to rather than an error to catch.
//!
//! # Modules
//!
//! - [`max`]: tie-aware maximum selection (the default)
//! - [`lenient`]: ambiguity-blind maximum selection

pub mod lenient;
pub mod max;

pub use lenient::LenientMaxSelector;
pub use max::MaxVersionSelector;

#[cfg(test)]
use mockall::automock;

use crate::error::SelectorError;
use crate::identity::VersionIdentity;
use crate::strategy::VersionStrategy;

/// Outcome of one selection pass over a family's candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A unique latest candidate.
    Winner(VersionIdentity),
    /// No unique winner; carries the version strings tied for latest.
    Ambiguous(Vec<String>),
}

/// Policy that chooses the "latest" identity within one canonical family.
///
/// Implementations may apply arbitrary rules on top of the strategy's
/// comparison semantics: excluding pre-release versions, honoring branch
/// rules, canary behaviors.
///
/// Preconditions: `candidates` is non-empty and every member carries
/// `canonical_name`. Violations are programming errors reported through
/// [`SelectorError`], not recoverable per-call conditions.
#[cfg_attr(test, automock)]
pub trait VersionSelector: Send + Sync {
    /// Selects the latest identity from `candidates` using `strategy`'s
    /// ordering.
    fn select_latest(
        &self,
        canonical_name: &str,
        candidates: &[VersionIdentity],
        strategy: &dyn VersionStrategy,
    ) -> Result<Selection, SelectorError>;
}

/// Check the preconditions shared by the built-in selectors.
pub(crate) fn validate_candidates(
    canonical_name: &str,
    candidates: &[VersionIdentity],
) -> Result<(), SelectorError> {
    if candidates.is_empty() {
        return Err(SelectorError::EmptyCandidates {
            canonical_name: canonical_name.to_string(),
        });
    }
    if let Some(foreign) = candidates
        .iter()
        .find(|candidate| candidate.canonical_name != canonical_name)
    {
        return Err(SelectorError::ForeignCandidate {
            expected: canonical_name.to_string(),
            actual: foreign.canonical_name.clone(),
            type_name: foreign.type_name.clone(),
        });
    }
    Ok(())
}
