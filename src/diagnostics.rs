//! Stable diagnostic IDs and message rendering for resolution failures
//!
//! Per-family resolution failures are reported as [`Diagnostic`] values so a
//! host can skip one family, log a warning, and keep serving the rest of the
//! application. The [`VersionDiagnostics`] trait lets hosts swap in their own
//! (e.g. localized) titles and messages; message content must stay
//! deterministic and safe to surface to developers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, machine-readable identifiers for resolution failures.
///
/// The codes are intentionally stable and can be used for filtering or
/// documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticId {
    /// A declared strategy could not be constructed or does not satisfy the
    /// strategy capability.
    UnknownStrategy,
    /// No strategy could derive a canonical name and version from an
    /// implementation's raw name.
    CouldNotParse,
    /// A canonical family resolved to zero candidates.
    EmptyFamily,
    /// Two or more candidates tie for latest.
    AmbiguousLatest,
}

impl DiagnosticId {
    /// The stable code for this diagnostic kind.
    pub const fn code(self) -> &'static str {
        match self {
            DiagnosticId::UnknownStrategy => "WV001",
            DiagnosticId::CouldNotParse => "WV002",
            DiagnosticId::EmptyFamily => "WV003",
            DiagnosticId::AmbiguousLatest => "WV004",
        }
    }
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fully rendered, non-fatal resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable identifier for the failure kind.
    pub id: DiagnosticId,
    /// Short human-readable title.
    pub title: String,
    /// Parameterized human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic from its parts.
    pub fn new(id: DiagnosticId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

/// Provides titles and formatted messages for the four failure kinds.
///
/// Formatting must never fail on malformed input: blank names render as
/// `"<unknown>"` and empty version lists as `"<none>"`.
pub trait VersionDiagnostics: Send + Sync {
    /// Title used when a declared strategy cannot be constructed.
    fn unknown_strategy_title(&self) -> &str;

    /// Message shown when `strategy` could not be created for `type_name` or
    /// does not satisfy the strategy capability.
    fn unknown_strategy_message(&self, type_name: &str, strategy: &str) -> String;

    /// Title used when version information cannot be parsed from a raw name.
    fn could_not_parse_title(&self) -> &str;

    /// Message shown when no available strategy can derive a canonical name
    /// and version for `type_name`.
    fn could_not_parse_message(&self, type_name: &str) -> String;

    /// Title used when a canonical family contains no versions.
    fn empty_family_title(&self) -> &str;

    /// Message shown when the family named `canonical_name` has no versions.
    fn empty_family_message(&self, canonical_name: &str) -> String;

    /// Title used when latest-version selection is ambiguous.
    fn ambiguous_latest_title(&self) -> &str;

    /// Message shown when the selector cannot determine a unique latest
    /// version; `versions` is the set of tied version strings.
    fn ambiguous_latest_message(&self, canonical_name: &str, versions: &[String]) -> String;
}

/// Stock English diagnostic text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVersionDiagnostics;

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "<unknown>"
    } else {
        value
    }
}

impl VersionDiagnostics for DefaultVersionDiagnostics {
    fn unknown_strategy_title(&self) -> &str {
        "Invalid workflow version strategy"
    }

    fn unknown_strategy_message(&self, type_name: &str, strategy: &str) -> String {
        format!(
            "The strategy '{}' specified for workflow type '{}' could not be constructed \
             or does not implement the version strategy capability",
            or_unknown(strategy),
            or_unknown(type_name),
        )
    }

    fn could_not_parse_title(&self) -> &str {
        "Unable to derive canonical name and version"
    }

    fn could_not_parse_message(&self, type_name: &str) -> String {
        format!(
            "No available strategy could parse the workflow type name '{}' into a \
             canonical name and version",
            or_unknown(type_name),
        )
    }

    fn empty_family_title(&self) -> &str {
        "No versions discovered for workflow family"
    }

    fn empty_family_message(&self, canonical_name: &str) -> String {
        format!(
            "No versions were discovered for the canonical workflow family '{}'.",
            or_unknown(canonical_name),
        )
    }

    fn ambiguous_latest_title(&self) -> &str {
        "Ambiguous latest workflow version"
    }

    fn ambiguous_latest_message(&self, canonical_name: &str, versions: &[String]) -> String {
        let list = if versions.is_empty() {
            "<none>".to_string()
        } else {
            versions.join(", ")
        };
        format!(
            "Multiple versions for '{}' are tied for latest: [{}].",
            or_unknown(canonical_name),
            list,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn diagnostic_codes_are_stable() {
        assert_eq!(DiagnosticId::UnknownStrategy.code(), "WV001");
        assert_eq!(DiagnosticId::CouldNotParse.code(), "WV002");
        assert_eq!(DiagnosticId::EmptyFamily.code(), "WV003");
        assert_eq!(DiagnosticId::AmbiguousLatest.code(), "WV004");
    }

    #[test]
    fn diagnostic_display_combines_code_and_message() {
        let diagnostic = Diagnostic::new(DiagnosticId::EmptyFamily, "title", "message");

        assert_eq!(diagnostic.to_string(), "WV003: message");
    }

    #[rstest]
    #[case("Orders", "No versions were discovered for the canonical workflow family 'Orders'.")]
    #[case("", "No versions were discovered for the canonical workflow family '<unknown>'.")]
    #[case("   ", "No versions were discovered for the canonical workflow family '<unknown>'.")]
    fn empty_family_message_substitutes_unknown_for_blank_names(
        #[case] canonical_name: &str,
        #[case] expected: &str,
    ) {
        let diagnostics = DefaultVersionDiagnostics;

        assert_eq!(diagnostics.empty_family_message(canonical_name), expected);
    }

    #[rstest]
    #[case(vec!["2", "2"], "Multiple versions for 'Orders' are tied for latest: [2, 2].")]
    #[case(vec![], "Multiple versions for 'Orders' are tied for latest: [<none>].")]
    fn ambiguous_latest_message_lists_tied_versions(
        #[case] versions: Vec<&str>,
        #[case] expected: &str,
    ) {
        let diagnostics = DefaultVersionDiagnostics;
        let versions: Vec<String> = versions.into_iter().map(|s| s.to_string()).collect();

        assert_eq!(
            diagnostics.ambiguous_latest_message("Orders", &versions),
            expected
        );
    }

    #[test]
    fn unknown_strategy_message_substitutes_unknown_for_blank_inputs() {
        let diagnostics = DefaultVersionDiagnostics;

        let message = diagnostics.unknown_strategy_message("", "");

        assert!(message.contains("'<unknown>'"));
        assert!(!message.contains("''"));
    }

    #[test]
    fn could_not_parse_message_names_the_type() {
        let diagnostics = DefaultVersionDiagnostics;

        assert_eq!(
            diagnostics.could_not_parse_message("OrdersFlow"),
            "No available strategy could parse the workflow type name 'OrdersFlow' into \
             a canonical name and version"
        );
    }
}
