//! Version strategy capabilities and the built-in naming conventions
//!
//! A strategy is two separable capabilities: deriving a canonical name and
//! version from an implementation's raw name ([`VersionParser`]) and ordering
//! the version strings it produces ([`VersionOrdering`]). A single concrete
//! type usually satisfies both, which makes it a [`VersionStrategy`] through
//! the blanket impl.
//!
//! # Modules
//!
//! - [`numeric`]: `OrdersWorkflowV3`-style numeric suffixes
//! - [`semver`]: `OrdersWorkflow_1_2_3`-style SemVer suffixes
//! - [`date`]: `OrdersWorkflow20240131`-style date suffixes

pub mod date;
pub mod numeric;
pub mod semver;

pub use date::DateSuffixStrategy;
pub use numeric::NumericSuffixStrategy;
pub use semver::SemverSuffixStrategy;

use std::cmp::Ordering;

use crate::identity::ParsedName;

/// Derives a canonical name and version from a raw implementation name.
pub trait VersionParser: Send + Sync {
    /// Attempts to parse `raw_name` using this strategy's naming convention.
    ///
    /// Returns `None` when the name does not follow the convention; never
    /// panics on malformed input.
    fn try_parse(&self, raw_name: &str) -> Option<ParsedName>;
}

/// Orders two version strings.
pub trait VersionOrdering: Send + Sync {
    /// Compares `v1` and `v2`.
    ///
    /// Must be a consistent total order over every version string this
    /// strategy would produce or accept. Strategies are not required to
    /// handle version strings produced by a different strategy, but the
    /// ordering must stay consistent even for those.
    fn compare(&self, v1: &str, v2: &str) -> Ordering;
}

/// A complete versioning policy: parsing plus ordering.
///
/// Blanket-implemented for every type that satisfies both capabilities, so
/// concrete strategies only implement [`VersionParser`] and
/// [`VersionOrdering`].
pub trait VersionStrategy: VersionParser + VersionOrdering + std::fmt::Debug {}

impl<T: VersionParser + VersionOrdering + std::fmt::Debug> VersionStrategy for T {}
