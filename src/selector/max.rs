//! Tie-aware maximum selection

use std::cmp::Ordering;

use crate::error::SelectorError;
use crate::identity::VersionIdentity;
use crate::selector::{Selection, VersionSelector, validate_candidates};
use crate::strategy::{VersionOrdering, VersionStrategy};

/// Default selector: the maximum version under the strategy's ordering.
///
/// Fails closed on ties. When two or more candidates compare equal at the
/// top, the result is [`Selection::Ambiguous`] with every tied version
/// string, never an arbitrary winner. Hosts that want "any maximum"
/// semantics opt into [`LenientMaxSelector`](crate::selector::lenient::LenientMaxSelector).
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxVersionSelector;

impl VersionSelector for MaxVersionSelector {
    fn select_latest(
        &self,
        canonical_name: &str,
        candidates: &[VersionIdentity],
        strategy: &dyn VersionStrategy,
    ) -> Result<Selection, SelectorError> {
        validate_candidates(canonical_name, candidates)?;

        let Some(max) = candidates
            .iter()
            .max_by(|a, b| strategy.compare(&a.version, &b.version))
        else {
            return Err(SelectorError::EmptyCandidates {
                canonical_name: canonical_name.to_string(),
            });
        };

        let tied: Vec<&VersionIdentity> = candidates
            .iter()
            .filter(|candidate| {
                strategy.compare(&candidate.version, &max.version) == Ordering::Equal
            })
            .collect();

        if tied.len() > 1 {
            return Ok(Selection::Ambiguous(
                tied.iter().map(|candidate| candidate.version.clone()).collect(),
            ));
        }

        Ok(Selection::Winner(max.clone()))
    }
}
