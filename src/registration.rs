//! Discovery-to-registration glue
//!
//! Turns already-materialized discovery output into a deterministic binding
//! plan: one `canonical name -> implementation type` instruction per family
//! that resolved cleanly, plus the diagnostics for every entry or family
//! that had to be skipped. How the candidate list was produced (reflection,
//! compile-time scanning, a manifest file) is the host's concern; this
//! module only consumes plain data.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::diagnostics::{Diagnostic, DiagnosticId, VersionDiagnostics};
use crate::error::ConfigError;
use crate::factory::StrategyFactory;
use crate::identity::{ParsedName, VersionFamily, VersionIdentity};
use crate::options::VersioningOptions;
use crate::resolver::VersionResolver;
use crate::strategy::{VersionParser, VersionStrategy};

/// One concrete workflow implementation found by the host's discovery step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveredWorkflow {
    /// Name of the concrete implementation type.
    pub type_name: String,
    /// Canonical name declared by the implementation's own metadata.
    pub canonical_name: Option<String>,
    /// Version declared by the implementation's own metadata.
    pub version: Option<String>,
    /// Key of a strategy registered with the [`StrategyFactory`], overriding
    /// the default strategy for this entry.
    pub strategy: Option<String>,
    /// Named options binding passed through to the strategy builder.
    pub options_scope: Option<String>,
    /// Optional label describing where the implementation came from.
    pub origin_label: Option<String>,
}

impl DiscoveredWorkflow {
    /// Creates an entry carrying only a type name; everything else is
    /// derived by the configured strategy.
    pub fn from_type_name(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// Instruction binding a canonical name to its winning implementation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// The stable logical name invocations are addressed to.
    pub canonical_name: String,
    /// The implementation type that should answer them.
    pub type_name: String,
}

/// Deterministic output of one planning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationPlan {
    /// Bindings in first-discovery order of their canonical names.
    pub bindings: Vec<Binding>,
    /// Recoverable failures for entries and families that were skipped.
    pub skipped: Vec<Diagnostic>,
}

/// Builds [`RegistrationPlan`]s from discovery output.
pub struct RegistrationPlanner {
    strategies: StrategyFactory,
    options: VersioningOptions,
    resolver: VersionResolver,
    diagnostics: Arc<dyn VersionDiagnostics>,
}

impl RegistrationPlanner {
    /// Creates a planner over the host's strategy registry and global
    /// configuration.
    pub fn new(
        strategies: StrategyFactory,
        options: VersioningOptions,
        diagnostics: Arc<dyn VersionDiagnostics>,
    ) -> Self {
        let resolver = VersionResolver::new(options.clone(), Arc::clone(&diagnostics));
        Self {
            strategies,
            options,
            resolver,
            diagnostics,
        }
    }

    /// Plans the canonical-name bindings for `discovered`.
    ///
    /// Entries whose names no strategy can parse and families that fail to
    /// resolve are skipped with a diagnostic; planning continues for the
    /// rest. Configuration problems — an unknown declared strategy, a
    /// missing default strategy — abort the whole pass with a fatal
    /// [`ConfigError`].
    pub fn plan(&self, discovered: &[DiscoveredWorkflow]) -> Result<RegistrationPlan, ConfigError> {
        let mut plan = RegistrationPlan::default();
        let mut families: IndexMap<String, Vec<VersionIdentity>> = IndexMap::new();

        for entry in discovered {
            let strategy = self.strategy_for(entry)?;
            let Some(parsed) = derive_identity(entry, strategy.as_ref()) else {
                warn!(
                    type_name = %entry.type_name,
                    "skipping workflow implementation with unparsable name"
                );
                plan.skipped.push(Diagnostic::new(
                    DiagnosticId::CouldNotParse,
                    self.diagnostics.could_not_parse_title(),
                    self.diagnostics.could_not_parse_message(&entry.type_name),
                ));
                continue;
            };

            let identity = VersionIdentity {
                canonical_name: parsed.canonical_name,
                version: parsed.version,
                type_name: entry.type_name.clone(),
                origin_label: entry.origin_label.clone(),
            };
            families
                .entry(identity.canonical_name.clone())
                .or_default()
                .push(identity);
        }

        for (canonical_name, versions) in families {
            let family = VersionFamily::new(canonical_name, versions);
            match self.resolver.try_get_latest(&family) {
                Ok(latest) => {
                    debug!(family = %family.canonical_name, latest = %latest, "planned binding");
                    plan.bindings.push(Binding {
                        canonical_name: family.canonical_name,
                        type_name: latest.type_name,
                    });
                }
                Err(diagnostic) => {
                    warn!(
                        family = %family.canonical_name,
                        id = %diagnostic.id,
                        "skipping workflow family: {}", diagnostic.message
                    );
                    plan.skipped.push(diagnostic);
                }
            }
        }

        Ok(plan)
    }

    /// The strategy responsible for `entry`: its declared override when one
    /// is present, the global default otherwise.
    fn strategy_for(&self, entry: &DiscoveredWorkflow) -> Result<Arc<dyn VersionStrategy>, ConfigError> {
        if let Some(key) = declared(&entry.strategy) {
            let canonical_hint = declared(&entry.canonical_name).unwrap_or(&entry.type_name);
            return self
                .strategies
                .create(key, canonical_hint, declared(&entry.options_scope))
                .map_err(|_| ConfigError::UnknownStrategy {
                    type_name: entry.type_name.clone(),
                    strategy: key.to_string(),
                });
        }
        self.options
            .default_strategy()
            .ok_or(ConfigError::MissingDefaultStrategy)
    }
}

/// Declared metadata values count only when non-blank.
fn declared(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

/// Apply declared metadata first; derive whatever is missing through the
/// strategy's naming convention. Fully declared entries bypass parsing.
fn derive_identity(
    entry: &DiscoveredWorkflow,
    strategy: &dyn VersionStrategy,
) -> Option<ParsedName> {
    match (declared(&entry.canonical_name), declared(&entry.version)) {
        (Some(canonical_name), Some(version)) => {
            Some(ParsedName::declared(canonical_name, version))
        }
        (canonical_name, version) => {
            let parsed = strategy.try_parse(&entry.type_name)?;
            Some(ParsedName {
                canonical_name: canonical_name
                    .map(str::to_string)
                    .unwrap_or(parsed.canonical_name),
                version: version.map(str::to_string).unwrap_or(parsed.version),
                is_explicit: false,
            })
        }
    }
}
