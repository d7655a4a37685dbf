//! Global versioning configuration
//!
//! The host wires up versioning once at startup through
//! [`VersioningOptions`]: a factory closure for the default strategy and,
//! optionally, one for the default selector. Closures replace
//! container-based lookup; whatever state a factory needs, it captures.

use std::fmt;
use std::sync::Arc;

use crate::selector::VersionSelector;
use crate::strategy::VersionStrategy;

/// Factory closure producing the default strategy for families with no
/// per-family override.
pub type StrategyFactoryFn = Arc<dyn Fn() -> Arc<dyn VersionStrategy> + Send + Sync>;

/// Factory closure producing the default selector.
pub type SelectorFactoryFn = Arc<dyn Fn() -> Arc<dyn VersionSelector> + Send + Sync>;

/// Application-wide configuration for workflow version resolution.
///
/// A default strategy is mandatory for resolution to proceed; a missing
/// default selector falls back to the built-in tie-aware max selector.
#[derive(Clone, Default)]
pub struct VersioningOptions {
    default_strategy: Option<StrategyFactoryFn>,
    default_selector: Option<SelectorFactoryFn>,
}

impl VersioningOptions {
    /// Creates empty options; no defaults configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the factory for the default strategy.
    pub fn with_default_strategy(
        mut self,
        factory: impl Fn() -> Arc<dyn VersionStrategy> + Send + Sync + 'static,
    ) -> Self {
        self.default_strategy = Some(Arc::new(factory));
        self
    }

    /// Sets the factory for the default selector.
    pub fn with_default_selector(
        mut self,
        factory: impl Fn() -> Arc<dyn VersionSelector> + Send + Sync + 'static,
    ) -> Self {
        self.default_selector = Some(Arc::new(factory));
        self
    }

    /// Invokes the default-strategy factory, if one is configured.
    pub fn default_strategy(&self) -> Option<Arc<dyn VersionStrategy>> {
        self.default_strategy.as_ref().map(|factory| factory())
    }

    /// Invokes the default-selector factory, if one is configured.
    pub fn default_selector(&self) -> Option<Arc<dyn VersionSelector>> {
        self.default_selector.as_ref().map(|factory| factory())
    }
}

impl fmt::Debug for VersioningOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersioningOptions")
            .field("default_strategy", &self.default_strategy.is_some())
            .field("default_selector", &self.default_selector.is_some())
            .finish()
    }
}
