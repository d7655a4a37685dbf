//! Numeric-suffix naming convention
//!
//! `OrdersWorkflowV3` parses to canonical name `OrdersWorkflow` and version
//! `"3"`. Versions are ordered numerically, so `"10"` is newer than `"2"`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::identity::ParsedName;
use crate::strategy::{VersionOrdering, VersionParser};

static NUMERIC_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<stem>.+)V(?<version>\d+)$").expect("numeric suffix pattern is valid")
});

/// Strategy for `<CanonicalName>V<number>` implementation names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericSuffixStrategy;

impl VersionParser for NumericSuffixStrategy {
    fn try_parse(&self, raw_name: &str) -> Option<ParsedName> {
        let captures = NUMERIC_SUFFIX.captures(raw_name)?;
        Some(ParsedName::derived(
            &captures["stem"],
            &captures["version"],
        ))
    }
}

impl VersionOrdering for NumericSuffixStrategy {
    fn compare(&self, v1: &str, v2: &str) -> Ordering {
        match (
            v1.trim().parse::<u64>().ok(),
            v2.trim().parse::<u64>().ok(),
        ) {
            (Some(a), Some(b)) => a.cmp(&b),
            // Unparsable strings sort before every numeric version and
            // lexicographically among themselves, keeping the order total.
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => v1.cmp(v2),
        }
    }
}
