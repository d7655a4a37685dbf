//! Core data model for workflow version resolution

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a single workflow implementation within a canonical family.
///
/// Identities are produced once by the host's discovery step and never
/// mutated afterwards. Equality covers every field, including
/// [`origin_label`](Self::origin_label).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionIdentity {
    /// Canonical family name shared by every version of the workflow
    /// (e.g. `"OrderProcessingWorkflow"`).
    pub canonical_name: String,
    /// Version string. The meaning is strategy-defined: an integer suffix,
    /// a SemVer string, a date, etc.
    pub version: String,
    /// Name of the concrete type that implements this workflow version.
    pub type_name: String,
    /// Optional label describing where the implementation came from
    /// (a module path, a plugin name).
    pub origin_label: Option<String>,
}

impl VersionIdentity {
    /// Creates an identity with no origin label.
    pub fn new(
        canonical_name: impl Into<String>,
        version: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            version: version.into(),
            type_name: type_name.into(),
            origin_label: None,
        }
    }

    /// Attaches an origin label to this identity.
    pub fn with_origin(mut self, origin_label: impl Into<String>) -> Self {
        self.origin_label = Some(origin_label.into());
        self
    }
}

impl fmt::Display for VersionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({})",
            self.canonical_name, self.version, self.type_name
        )
    }
}

/// All discovered versions of a workflow that share one canonical name.
///
/// Families are built fresh per resolution pass; the order of `versions` is
/// irrelevant. An empty collection is a valid, representable state that the
/// resolver handles explicitly rather than an invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFamily {
    /// Canonical name shared by every member.
    pub canonical_name: String,
    /// Unordered candidate set; may be empty.
    pub versions: Vec<VersionIdentity>,
}

impl VersionFamily {
    /// Creates a family from already-materialized identities.
    pub fn new(canonical_name: impl Into<String>, versions: Vec<VersionIdentity>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            versions,
        }
    }

    /// Whether the family has no candidates at all.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// The result of deriving a canonical name and version for an implementation.
///
/// `is_explicit` distinguishes values declared directly by the
/// implementation's own metadata from values derived by a strategy's
/// naming-convention parser. Explicit values bypass re-derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Canonical family name.
    pub canonical_name: String,
    /// Derived or declared version string.
    pub version: String,
    /// `true` when both values came from declared metadata.
    pub is_explicit: bool,
}

impl ParsedName {
    /// A result derived by a strategy's naming-convention parser.
    pub fn derived(canonical_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            version: version.into(),
            is_explicit: false,
        }
    }

    /// A result taken verbatim from declared metadata.
    pub fn declared(canonical_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            version: version.into(),
            is_explicit: true,
        }
    }
}
