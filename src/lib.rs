//! Workflow version resolution engine
//!
//! Long-running workflows get redeployed over time as new concrete
//! implementations of what is logically the same workflow. Given the set of
//! candidates sharing a stable canonical name, this crate decides which
//! implementation should answer invocations addressed to that name.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Strategy   │────▶│   Selector   │◀────│   Resolver   │
//! │ (parse, cmp) │     │   (latest)   │     │  (families)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                                         │
//!        │                                         ▼
//! ┌──────────────┐                          ┌──────────────┐
//! │  Factories   │                          │ Registration │
//! │ (per family) │                          │    (glue)    │
//! └──────────────┘                          └──────────────┘
//! ```
//!
//! A [`strategy`](crate::strategy) parses implementation names into
//! `(canonical name, version)` pairs and orders version strings. A
//! [`selector`](crate::selector) picks the latest identity from a family's
//! candidates. The [`resolver`](crate::resolver) composes both, reporting
//! empty and tied families as recoverable [`Diagnostic`] values while
//! configuration mistakes fail fast. The [`registration`](crate::registration)
//! glue turns raw discovery output into the `canonical name -> type`
//! bindings an external workflow registry consumes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use workflow_versioning::{
//!     DefaultVersionDiagnostics, NumericSuffixStrategy, VersionFamily, VersionIdentity,
//!     VersionResolver, VersioningOptions,
//! };
//!
//! let options =
//!     VersioningOptions::new().with_default_strategy(|| Arc::new(NumericSuffixStrategy));
//! let resolver = VersionResolver::new(options, Arc::new(DefaultVersionDiagnostics));
//!
//! let family = VersionFamily::new(
//!     "OrdersWorkflow",
//!     vec![
//!         VersionIdentity::new("OrdersWorkflow", "1", "OrdersWorkflowV1"),
//!         VersionIdentity::new("OrdersWorkflow", "2", "OrdersWorkflowV2"),
//!     ],
//! );
//!
//! let latest = resolver.try_get_latest(&family).expect("family resolves");
//! assert_eq!(latest.type_name, "OrdersWorkflowV2");
//! ```

pub mod diagnostics;
pub mod error;
pub mod factory;
pub mod identity;
pub mod options;
pub mod registration;
pub mod resolver;
pub mod selector;
pub mod strategy;

pub use diagnostics::{DefaultVersionDiagnostics, Diagnostic, DiagnosticId, VersionDiagnostics};
pub use error::{ConfigError, SelectorError};
pub use factory::{CapabilityFactory, FactoryScope, SelectorFactory, StrategyFactory};
pub use identity::{ParsedName, VersionFamily, VersionIdentity};
pub use options::VersioningOptions;
pub use registration::{Binding, DiscoveredWorkflow, RegistrationPlan, RegistrationPlanner};
pub use resolver::VersionResolver;
pub use selector::{LenientMaxSelector, MaxVersionSelector, Selection, VersionSelector};
pub use strategy::{
    DateSuffixStrategy, NumericSuffixStrategy, SemverSuffixStrategy, VersionOrdering,
    VersionParser, VersionStrategy,
};
