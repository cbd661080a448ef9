//! Unified error type for all warden crates
//!
//! A single, simple error enum shared by the core and the registry layer.
//! "No applicable rule" is not an error: the rule base resolves it as a
//! deny. Errors here always indicate misuse (malformed rules, unknown
//! kinds/actions), which should fail fast rather than silently deny, and
//! must never silently allow.

use serde::{Deserialize, Serialize};

/// Unified error type for warden operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum WardenError {
    /// A rule is malformed and has no computable key
    #[error("invalid rule: {message}")]
    InvalidRule {
        /// Description of the violated constraint
        message: String,
    },

    /// No registered permission kind could resolve a target
    #[error("permission resolution failed: {message}")]
    Resolution {
        /// Description of the target that failed to resolve
        message: String,
    },

    /// A permission kind was registered more than once
    #[error("another permission kind has already been registered as `{kind}`")]
    DuplicateKind {
        /// The kind name that collided
        kind: String,
    },

    /// An action was requested that the permission kind does not define
    #[error("action not available: {message}")]
    ActionUnavailable {
        /// Description of the rejected action
        message: String,
    },
}

impl WardenError {
    /// Create an invalid rule error
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule {
            message: message.into(),
        }
    }

    /// Create a resolution error
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }

    /// Create a duplicate kind error
    pub fn duplicate_kind(kind: impl Into<String>) -> Self {
        Self::DuplicateKind { kind: kind.into() }
    }

    /// Create an action unavailable error
    pub fn action_unavailable(message: impl Into<String>) -> Self {
        Self::ActionUnavailable {
            message: message.into(),
        }
    }
}

/// Result type alias using the unified error
pub type WardenResult<T> = Result<T, WardenError>;
