//! Latest-version resolution for canonical workflow families
//!
//! The resolver composes the configured strategy and selector to answer
//! "which implementation is the latest for this family?", and reports the
//! expected per-family failures (empty family, ambiguous latest) as
//! [`Diagnostic`] values instead of errors. Resolution is a pure function of
//! the family and the configured policies: no I/O, no retries, identical
//! inputs always produce identical results.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticId, VersionDiagnostics};
use crate::identity::{VersionFamily, VersionIdentity};
use crate::options::VersioningOptions;
use crate::selector::{MaxVersionSelector, Selection, VersionSelector};
use crate::strategy::{VersionOrdering, VersionStrategy};

/// Resolves the latest [`VersionIdentity`] for a [`VersionFamily`] using the
/// configured strategy and selector.
pub struct VersionResolver {
    options: VersioningOptions,
    diagnostics: Arc<dyn VersionDiagnostics>,
}

impl VersionResolver {
    /// Creates a resolver over the given configuration.
    pub fn new(options: VersioningOptions, diagnostics: Arc<dyn VersionDiagnostics>) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    /// Attempts to select the latest version for `family`.
    ///
    /// Recoverable per-family failures come back as [`Diagnostic`] values so
    /// the host can skip the family, log a warning and keep serving the rest
    /// of the application:
    ///
    /// - an empty family yields [`DiagnosticId::EmptyFamily`],
    /// - tied candidates yield [`DiagnosticId::AmbiguousLatest`] with every
    ///   tied version string enumerated in the message.
    ///
    /// A missing default selector is not an error; the built-in
    /// [`MaxVersionSelector`] is used.
    ///
    /// # Panics
    ///
    /// Panics when no default strategy is configured. That is a deployment
    /// defect — the host forgot to wire up versioning — and must be fixed
    /// before startup proceeds.
    pub fn try_get_latest(&self, family: &VersionFamily) -> Result<VersionIdentity, Diagnostic> {
        if family.versions.is_empty() {
            return Err(self.empty_family(&family.canonical_name));
        }

        let Some(strategy) = self.options.default_strategy() else {
            panic!(
                "no default workflow version strategy is configured; \
                 set VersioningOptions::with_default_strategy at startup"
            );
        };
        let selector = self
            .options
            .default_selector()
            .unwrap_or_else(|| Arc::new(MaxVersionSelector));

        match selector.select_latest(&family.canonical_name, &family.versions, strategy.as_ref()) {
            Ok(Selection::Winner(latest)) => {
                debug!(family = %family.canonical_name, latest = %latest, "resolved latest version");
                Ok(latest)
            }
            Ok(Selection::Ambiguous(_)) => {
                Err(self.ambiguous_latest(family, strategy.as_ref()))
            }
            // Argument-validation failures from the selector collapse into
            // the empty-family diagnostic; anything else a selector does
            // wrong is a programming error and propagates as a panic.
            Err(_) => Err(self.empty_family(&family.canonical_name)),
        }
    }

    fn empty_family(&self, canonical_name: &str) -> Diagnostic {
        Diagnostic::new(
            DiagnosticId::EmptyFamily,
            self.diagnostics.empty_family_title(),
            self.diagnostics.empty_family_message(canonical_name),
        )
    }

    fn ambiguous_latest(
        &self,
        family: &VersionFamily,
        strategy: &dyn VersionStrategy,
    ) -> Diagnostic {
        // Re-derive the tied set independently of the selector's signal so
        // the diagnostic enumerates exactly the top-ranked group.
        let tied = tied_versions(&family.versions, strategy);
        Diagnostic::new(
            DiagnosticId::AmbiguousLatest,
            self.diagnostics.ambiguous_latest_title(),
            self.diagnostics
                .ambiguous_latest_message(&family.canonical_name, &tied),
        )
    }
}

/// Group versions by raw string and return every entry of the group whose
/// key ranks highest under the strategy's ordering.
fn tied_versions(versions: &[VersionIdentity], strategy: &dyn VersionStrategy) -> Vec<String> {
    let mut groups: IndexMap<&str, usize> = IndexMap::new();
    for identity in versions {
        *groups.entry(identity.version.as_str()).or_insert(0) += 1;
    }

    let Some(top) = groups
        .keys()
        .copied()
        .max_by(|a, b| strategy.compare(a, b))
    else {
        return Vec::new();
    };

    let count = groups.get(top).copied().unwrap_or(0);
    vec![top.to_string(); count]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DefaultVersionDiagnostics;
    use crate::error::SelectorError;
    use crate::selector::{MockVersionSelector, VersionSelector};
    use crate::strategy::NumericSuffixStrategy;

    fn numeric_options() -> VersioningOptions {
        VersioningOptions::new().with_default_strategy(|| Arc::new(NumericSuffixStrategy))
    }

    fn resolver(options: VersioningOptions) -> VersionResolver {
        VersionResolver::new(options, Arc::new(DefaultVersionDiagnostics))
    }

    fn orders_family(versions: &[(&str, &str)]) -> VersionFamily {
        VersionFamily::new(
            "Orders",
            versions
                .iter()
                .map(|(version, type_name)| VersionIdentity::new("Orders", *version, *type_name))
                .collect(),
        )
    }

    #[test]
    fn try_get_latest_reports_empty_families() {
        let resolver = resolver(numeric_options());

        let result = resolver.try_get_latest(&VersionFamily::new("Orders", vec![]));

        let diagnostic = result.unwrap_err();
        assert_eq!(diagnostic.id, DiagnosticId::EmptyFamily);
        assert_eq!(
            diagnostic.message,
            "No versions were discovered for the canonical workflow family 'Orders'."
        );
    }

    #[test]
    #[should_panic(expected = "no default workflow version strategy is configured")]
    fn try_get_latest_panics_without_a_default_strategy() {
        let resolver = resolver(VersioningOptions::new());
        let family = orders_family(&[("1", "OrdersWorkflowV1")]);

        let _ = resolver.try_get_latest(&family);
    }

    #[test]
    fn try_get_latest_falls_back_to_the_max_selector() {
        let resolver = resolver(numeric_options());
        let family = orders_family(&[("1", "OrdersWorkflowV1"), ("2", "OrdersWorkflowV2")]);

        let latest = resolver.try_get_latest(&family).unwrap();

        assert_eq!(latest.version, "2");
        assert_eq!(latest.type_name, "OrdersWorkflowV2");
    }

    #[test]
    fn try_get_latest_reports_ties_with_every_tied_version() {
        let resolver = resolver(numeric_options());
        let family = orders_family(&[
            ("1", "OrdersWorkflowV1"),
            ("2", "OrdersWorkflowV2"),
            ("2", "OrdersWorkflowV2b"),
        ]);

        let diagnostic = resolver.try_get_latest(&family).unwrap_err();

        assert_eq!(diagnostic.id, DiagnosticId::AmbiguousLatest);
        assert_eq!(
            diagnostic.message,
            "Multiple versions for 'Orders' are tied for latest: [2, 2]."
        );
    }

    #[test]
    fn try_get_latest_converts_selector_validation_failures_to_empty_family() {
        let mut selector = MockVersionSelector::new();
        selector.expect_select_latest().returning(|name, _, _| {
            Err(SelectorError::EmptyCandidates {
                canonical_name: name.to_string(),
            })
        });
        let selector: Arc<dyn VersionSelector> = Arc::new(selector);
        let options =
            numeric_options().with_default_selector(move || Arc::clone(&selector));
        let resolver = resolver(options);
        let family = orders_family(&[("1", "OrdersWorkflowV1")]);

        let diagnostic = resolver.try_get_latest(&family).unwrap_err();

        assert_eq!(diagnostic.id, DiagnosticId::EmptyFamily);
    }

    #[test]
    fn try_get_latest_rederives_the_tied_set_from_the_family() {
        // The ambiguity signal itself carries no trustworthy payload; the
        // diagnostic must come from the family.
        let mut selector = MockVersionSelector::new();
        selector
            .expect_select_latest()
            .returning(|_, _, _| Ok(Selection::Ambiguous(vec!["bogus".to_string()])));
        let selector: Arc<dyn VersionSelector> = Arc::new(selector);
        let options =
            numeric_options().with_default_selector(move || Arc::clone(&selector));
        let resolver = resolver(options);
        let family = orders_family(&[
            ("3", "OrdersWorkflowV3"),
            ("3", "OrdersWorkflowV3b"),
            ("1", "OrdersWorkflowV1"),
        ]);

        let diagnostic = resolver.try_get_latest(&family).unwrap_err();

        assert_eq!(diagnostic.id, DiagnosticId::AmbiguousLatest);
        assert_eq!(
            diagnostic.message,
            "Multiple versions for 'Orders' are tied for latest: [3, 3]."
        );
    }

    #[test]
    fn try_get_latest_is_idempotent() {
        let resolver = resolver(numeric_options());
        let family = orders_family(&[("1", "OrdersWorkflowV1"), ("7", "OrdersWorkflowV7")]);

        let first = resolver.try_get_latest(&family);
        let second = resolver.try_get_latest(&family);

        assert_eq!(first, second);
    }
}
