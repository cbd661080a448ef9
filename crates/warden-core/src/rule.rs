//! Allow/deny rules and their canonical keys
//!
//! Each rule grants or denies one kind/name/action pattern. A rule carries
//! no explicit priority: its position in the sequence handed to the rule
//! base is its priority, later position winning.

use crate::error::{WardenError, WardenResult};
use crate::permission::WILDCARD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a rule kind.
pub const MAX_KIND_LEN: usize = 20;
/// Maximum length of a rule name.
pub const MAX_NAME_LEN: usize = 80;
/// Maximum length of a rule action.
pub const MAX_ACTION_LEN: usize = 20;

/// A single allow/deny statement for a kind/name/action pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    kind: String,
    name: String,
    action: Option<String>,
    allow: bool,
}

impl Rule {
    fn build(kind: impl Into<String>, name: impl Into<String>, allow: bool) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            action: None,
            allow,
        }
    }

    /// Build an allow rule for the given kind and name.
    pub fn allow(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::build(kind, name, true)
    }

    /// Build a deny rule for the given kind and name.
    pub fn deny(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::build(kind, name, false)
    }

    /// Build the universal allow rule (kind `all`, name `all`).
    pub fn allow_all() -> Self {
        Self::allow(WILDCARD, WILDCARD)
    }

    /// Build an allow rule for every name of the given kind.
    pub fn allow_all_of(kind: impl Into<String>) -> Self {
        Self::allow(kind, WILDCARD)
    }

    /// Build the universal deny rule (kind `all`, name `all`).
    pub fn deny_all() -> Self {
        Self::deny(WILDCARD, WILDCARD)
    }

    /// Build a deny rule for every name of the given kind.
    pub fn deny_all_of(kind: impl Into<String>) -> Self {
        Self::deny(kind, WILDCARD)
    }

    /// Qualify the rule with an action. A blank action is normalized to
    /// "no action", so the rule matches action-less checks only.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.action = if action.trim().is_empty() {
            None
        } else {
            Some(action)
        };
        self
    }

    /// The rule's kind pattern.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The rule's name pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule's action, if any.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Whether the rule grants (`true`) or denies (`false`).
    pub fn allows(&self) -> bool {
        self.allow
    }

    /// The canonical key identifying this rule's pattern.
    ///
    /// A rule with kind `all` keys as the literal `"all"` regardless of name
    /// and action; any other rule keys as `kind:name` or `kind:name:action`.
    pub fn key(&self) -> String {
        if self.kind == WILDCARD {
            WILDCARD.to_string()
        } else if let Some(action) = &self.action {
            format!("{}:{}:{}", self.kind, self.name, action)
        } else {
            format!("{}:{}", self.kind, self.name)
        }
    }

    /// Check the rule's field constraints: kind and name must be present,
    /// and fields must fit the storage-layer length limits.
    pub fn validate(&self) -> WardenResult<()> {
        if self.kind.is_empty() {
            return Err(WardenError::invalid_rule("kind must be present"));
        }
        if self.name.is_empty() {
            return Err(WardenError::invalid_rule("name must be present"));
        }
        if self.kind.len() > MAX_KIND_LEN {
            return Err(WardenError::invalid_rule(format!(
                "kind `{}` exceeds {MAX_KIND_LEN} characters",
                self.kind
            )));
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(WardenError::invalid_rule(format!(
                "name `{}` exceeds {MAX_NAME_LEN} characters",
                self.name
            )));
        }
        if let Some(action) = &self.action {
            if action.len() > MAX_ACTION_LEN {
                return Err(WardenError::invalid_rule(format!(
                    "action `{action}` exceeds {MAX_ACTION_LEN} characters"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
