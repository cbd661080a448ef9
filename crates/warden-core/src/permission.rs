//! Permission value objects and match-key generation
//!
//! A permission encapsulates an access query. It does not itself indicate
//! that anything has been granted. Permissions are built per check, are
//! immutable once built, and carry the dependency permissions that must be
//! satisfied along with them (a resource permission typically depends on
//! its containing space's permission).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel matching any name, or any permission at all when used as a kind.
pub const WILDCARD: &str = "all";

/// An access query for a named, typed target, optionally action-qualified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    kind: String,
    name: String,
    action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<Permission>,
}

impl Permission {
    /// Create a permission for the given kind and target name.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            action: None,
            dependencies: Vec::new(),
        }
    }

    /// Qualify the permission with an action. A blank action is normalized
    /// to "no action": the permission is then checked without action
    /// granularity.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.action = if action.trim().is_empty() {
            None
        } else {
            Some(action)
        };
        self
    }

    /// Append a dependency permission.
    ///
    /// Dependencies must be handed over pre-flattened: the rule base expands
    /// one level only (`dependencies + self`) and never recurses into a
    /// dependency's own dependencies.
    pub fn with_dependency(mut self, dependency: Permission) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// The permission's category identifier.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The target's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized action, if any.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// The declared dependency permissions, in order.
    pub fn dependencies(&self) -> &[Permission] {
        &self.dependencies
    }

    /// The dependency chain followed by the permission itself. This sequence
    /// is the actual unit the rule base checks, not the permission alone.
    pub fn with_dependencies(&self) -> impl Iterator<Item = &Permission> {
        self.dependencies.iter().chain(std::iter::once(self))
    }

    /// Candidate match keys, most- to least-specific:
    ///
    /// 1. `kind:name:action` (when an action is present)
    /// 2. `kind:all:action` (when an action is present)
    /// 3. `kind:name`
    /// 4. `kind:all`
    /// 5. `all`
    ///
    /// The order is documentary only: the rule base resolves specificity by
    /// rule position, not by key generality.
    pub fn match_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(5);
        if let Some(action) = &self.action {
            keys.push(format!("{}:{}:{}", self.kind, self.name, action));
            keys.push(format!("{}:{}:{}", self.kind, WILDCARD, action));
        }
        keys.push(format!("{}:{}", self.kind, self.name));
        keys.push(format!("{}:{}", self.kind, WILDCARD));
        keys.push(WILDCARD.to_string());
        keys
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)?;
        if let Some(action) = &self.action {
            write!(f, ":{action}")?;
        }
        Ok(())
    }
}
