//! Date-suffix naming convention
//!
//! `OrdersWorkflow20240131` parses to canonical name `OrdersWorkflow` and
//! version `"2024-01-31"`. Versions are ISO dates ordered chronologically.

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::identity::ParsedName;
use crate::strategy::{VersionOrdering, VersionParser};

static DATE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<stem>.+?)(?<version>\d{8})$").expect("date suffix pattern is valid")
});

/// Strategy for `<CanonicalName><YYYYMMDD>` implementation names.
///
/// The eight-digit suffix must be a real calendar date; `Foo20241301` does
/// not parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateSuffixStrategy;

impl VersionParser for DateSuffixStrategy {
    fn try_parse(&self, raw_name: &str) -> Option<ParsedName> {
        let captures = DATE_SUFFIX.captures(raw_name)?;
        let date = NaiveDate::parse_from_str(&captures["version"], "%Y%m%d").ok()?;
        Some(ParsedName::derived(&captures["stem"], date.to_string()))
    }
}

impl VersionOrdering for DateSuffixStrategy {
    fn compare(&self, v1: &str, v2: &str) -> Ordering {
        let parse = |v: &str| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok();
        match (parse(v1), parse(v2)) {
            (Some(a), Some(b)) => a.cmp(&b),
            // Same totality rule as the numeric strategy: unparsable strings
            // sort before every valid date.
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => v1.cmp(v2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("OrdersWorkflow20240131", Some(("OrdersWorkflow", "2024-01-31")))]
    #[case("Billing20231205", Some(("Billing", "2023-12-05")))]
    #[case("OrdersWorkflow20241301", None)] // month 13
    #[case("OrdersWorkflow2024", None)]
    #[case("20240131", None)]
    #[case("OrdersWorkflow", None)]
    fn try_parse_follows_the_date_suffix_convention(
        #[case] raw_name: &str,
        #[case] expected: Option<(&str, &str)>,
    ) {
        let strategy = DateSuffixStrategy;

        let parsed = strategy.try_parse(raw_name);

        assert_eq!(
            parsed,
            expected.map(|(canonical, version)| ParsedName::derived(canonical, version))
        );
    }

    #[rstest]
    #[case("2024-01-31", "2024-02-01", Ordering::Less)]
    #[case("2024-01-31", "2024-01-31", Ordering::Equal)]
    #[case("2025-01-01", "2024-12-31", Ordering::Greater)]
    #[case("not-a-date", "2024-01-31", Ordering::Less)]
    fn compare_orders_versions_chronologically(
        #[case] v1: &str,
        #[case] v2: &str,
        #[case] expected: Ordering,
    ) {
        let strategy = DateSuffixStrategy;

        assert_eq!(strategy.compare(v1, v2), expected);
    }
}
