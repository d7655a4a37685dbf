//! Capability registries for per-family strategy and selector construction
//!
//! A [`CapabilityFactory`] is an explicit registry of named instances and
//! typed builder closures supplied by the host. Resolution order on
//! [`create`](CapabilityFactory::create), first match wins:
//!
//! 1. a pre-registered instance under the exact key,
//! 2. a builder closure, invoked with the family-scoped [`FactoryScope`],
//! 3. failure: a fatal [`ConfigError`] naming the key and the capability.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::selector::{LenientMaxSelector, MaxVersionSelector, VersionSelector};
use crate::strategy::{
    DateSuffixStrategy, NumericSuffixStrategy, SemverSuffixStrategy, VersionStrategy,
};

/// Scope information handed to capability builders.
///
/// `options_scope` is a named configuration binding: two canonical families
/// can use the same capability type with different parameters by registering
/// one builder that branches on the scope name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryScope<'a> {
    /// Canonical family the instance is being built for.
    pub canonical_name: &'a str,
    /// Optional named options binding declared by the implementation.
    pub options_scope: Option<&'a str>,
}

type Builder<T> = Box<dyn Fn(&FactoryScope<'_>) -> Arc<T> + Send + Sync>;

/// Registry of named capability implementations.
pub struct CapabilityFactory<T: ?Sized> {
    capability: &'static str,
    instances: HashMap<String, Arc<T>>,
    builders: HashMap<String, Builder<T>>,
}

impl<T: ?Sized> CapabilityFactory<T> {
    /// Creates an empty registry; `capability` names the capability in error
    /// messages (e.g. `"version strategy"`).
    pub fn new(capability: &'static str) -> Self {
        Self {
            capability,
            instances: HashMap::new(),
            builders: HashMap::new(),
        }
    }

    /// Registers a pre-built instance under `key`.
    ///
    /// Instances take precedence over builders registered under the same
    /// key.
    pub fn register_instance(&mut self, key: impl Into<String>, instance: Arc<T>) -> &mut Self {
        self.instances.insert(key.into(), instance);
        self
    }

    /// Registers a builder closure under `key`.
    ///
    /// The closure receives the [`FactoryScope`] of the family the instance
    /// is built for and may capture any host state it needs.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        builder: impl Fn(&FactoryScope<'_>) -> Arc<T> + Send + Sync + 'static,
    ) -> &mut Self {
        self.builders.insert(key.into(), Box::new(builder));
        self
    }

    /// Whether anything is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.instances.contains_key(key) || self.builders.contains_key(key)
    }

    /// Builds the capability registered under `key` for the given family.
    pub fn create(
        &self,
        key: &str,
        canonical_name: &str,
        options_scope: Option<&str>,
    ) -> Result<Arc<T>, ConfigError> {
        if let Some(instance) = self.instances.get(key) {
            return Ok(Arc::clone(instance));
        }
        if let Some(builder) = self.builders.get(key) {
            let scope = FactoryScope {
                canonical_name,
                options_scope,
            };
            return Ok(builder(&scope));
        }
        Err(ConfigError::UnknownCapability {
            capability: self.capability,
            key: key.to_string(),
        })
    }
}

/// Registry of version strategies keyed by declared strategy name.
pub type StrategyFactory = CapabilityFactory<dyn VersionStrategy>;

/// Registry of version selectors.
pub type SelectorFactory = CapabilityFactory<dyn VersionSelector>;

impl StrategyFactory {
    /// A strategy registry with the built-in naming conventions registered
    /// under their stable keys: `numeric-suffix`, `semver-suffix` and
    /// `date-suffix`.
    pub fn with_builtin_strategies() -> Self {
        let mut factory = Self::new("version strategy");
        factory.register_instance("numeric-suffix", Arc::new(NumericSuffixStrategy));
        factory.register_instance("semver-suffix", Arc::new(SemverSuffixStrategy));
        factory.register_instance("date-suffix", Arc::new(DateSuffixStrategy));
        factory
    }
}

impl SelectorFactory {
    /// A selector registry with the built-in policies registered under
    /// `max` and `lenient-max`.
    pub fn with_builtin_selectors() -> Self {
        let mut factory = Self::new("version selector");
        factory.register_instance("max", Arc::new(MaxVersionSelector));
        factory.register_instance("lenient-max", Arc::new(LenientMaxSelector));
        factory
    }
}
