//! SemVer-suffix naming convention
//!
//! `OrdersWorkflow_1_2_3` parses to canonical name `OrdersWorkflow` and
//! version `"1.2.3"`. Partial suffixes are accepted: `OrdersWorkflow_2`
//! yields version `"2"`, which orders as `2.0.0`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::identity::ParsedName;
use crate::strategy::{VersionOrdering, VersionParser};

static SEMVER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<stem>.+?)_(?<version>\d+(?:_\d+){0,2})$")
        .expect("semver suffix pattern is valid")
});

/// Parse a version string into a [`Version`], normalizing partial versions.
///
/// Handles partial versions like `"1"` or `"1.2"` by padding with zeros and
/// strips a leading `v` if present:
/// - `"1"` -> `1.0.0`
/// - `"1.2"` -> `1.2.0`
/// - `"v1.2.3"` -> `1.2.3`
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Strategy for `<CanonicalName>_<major>[_<minor>[_<patch>]]` names.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverSuffixStrategy;

impl VersionParser for SemverSuffixStrategy {
    fn try_parse(&self, raw_name: &str) -> Option<ParsedName> {
        let captures = SEMVER_SUFFIX.captures(raw_name)?;
        let version = captures["version"].replace('_', ".");
        Some(ParsedName::derived(&captures["stem"], version))
    }
}

impl VersionOrdering for SemverSuffixStrategy {
    fn compare(&self, v1: &str, v2: &str) -> Ordering {
        match (parse_version(v1), parse_version(v2)) {
            (Some(a), Some(b)) => a.cmp(&b),
            // Same totality rule as the numeric strategy: unparsable strings
            // sort before every valid version.
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => v1.cmp(v2),
        }
    }
}
