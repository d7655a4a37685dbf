use thiserror::Error;

/// Fatal configuration errors.
///
/// These indicate a broken deployment that must be fixed before startup
/// proceeds; they are never converted into per-family diagnostics.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No default strategy was configured on
    /// [`VersioningOptions`](crate::options::VersioningOptions).
    #[error("no default workflow version strategy is configured")]
    MissingDefaultStrategy,

    /// A capability key was not registered with its factory.
    #[error(
        "no {capability} is registered under '{key}'; register an instance or a \
         builder that implements the {capability} capability"
    )]
    UnknownCapability {
        /// Human-readable capability name (e.g. `"version strategy"`).
        capability: &'static str,
        /// The key that failed to resolve.
        key: String,
    },

    /// A strategy declared by a workflow implementation could not be built.
    #[error(
        "the strategy '{strategy}' declared for workflow type '{type_name}' is not \
         registered or does not implement the version strategy capability"
    )]
    UnknownStrategy {
        /// Implementation type that declared the strategy.
        type_name: String,
        /// The declared strategy key.
        strategy: String,
    },
}

/// Argument-validation failures raised by selectors.
///
/// Violating a selector precondition is a programming error in the caller,
/// not a recoverable per-call condition. The resolver converts these into an
/// empty-family diagnostic as a guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector was invoked with no candidates.
    #[error("no candidates were supplied for workflow family '{canonical_name}'")]
    EmptyCandidates {
        /// Family the selection was attempted for.
        canonical_name: String,
    },

    /// A candidate belongs to a different canonical family.
    #[error("candidate '{type_name}' belongs to family '{actual}', not '{expected}'")]
    ForeignCandidate {
        /// Family the selection was attempted for.
        expected: String,
        /// Family the offending candidate carries.
        actual: String,
        /// The offending candidate's type name.
        type_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_capability_names_the_capability_and_key() {
        let err = ConfigError::UnknownCapability {
            capability: "version strategy",
            key: "semver-suffix".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("version strategy"));
        assert!(rendered.contains("'semver-suffix'"));
    }

    #[test]
    fn foreign_candidate_names_both_families() {
        let err = SelectorError::ForeignCandidate {
            expected: "Orders".to_string(),
            actual: "Payments".to_string(),
            type_name: "PaymentsWorkflowV1".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "candidate 'PaymentsWorkflowV1' belongs to family 'Payments', not 'Orders'"
        );
    }
}
