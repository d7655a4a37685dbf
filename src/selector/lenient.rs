//! Ambiguity-blind maximum selection

use crate::error::SelectorError;
use crate::identity::VersionIdentity;
use crate::selector::{Selection, VersionSelector, validate_candidates};
use crate::strategy::{VersionOrdering, VersionStrategy};

/// Selector that always returns *a* maximum, even when versions tie.
///
/// Among tied maxima the last candidate in input order wins, so repeated
/// calls over the same slice stay deterministic. Use this only when a family
/// is allowed to carry duplicate versions and any of them may serve; the
/// default [`MaxVersionSelector`](crate::selector::max::MaxVersionSelector)
/// reports ties instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientMaxSelector;

impl VersionSelector for LenientMaxSelector {
    fn select_latest(
        &self,
        canonical_name: &str,
        candidates: &[VersionIdentity],
        strategy: &dyn VersionStrategy,
    ) -> Result<Selection, SelectorError> {
        validate_candidates(canonical_name, candidates)?;

        // max_by keeps the last of equal elements.
        let Some(max) = candidates
            .iter()
            .max_by(|a, b| strategy.compare(&a.version, &b.version))
        else {
            return Err(SelectorError::EmptyCandidates {
                canonical_name: canonical_name.to_string(),
            });
        };

        Ok(Selection::Winner(max.clone()))
    }
}
