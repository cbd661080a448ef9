//! The `may` / `may_access` accessor surface
//!
//! Anything that can answer `has_permission` gets the convenience accessors
//! for free: resolve an application target through a registry, reject
//! actions the kind does not define, and run the check.

use crate::registry::Registry;
use warden_core::{Permission, WardenError, WardenResult};

/// Accessor methods over a permission check.
pub trait PermissionAccessors {
    /// Run a fully resolved permission through the holder's rule base.
    fn has_permission(&self, permission: &Permission) -> WardenResult<bool>;

    /// May the holder perform `action` on `target`?
    ///
    /// The target is resolved through the registry; an action outside the
    /// resolved kind's vocabulary is rejected before the rule base runs.
    fn may<T>(&self, registry: &Registry<T>, action: &str, target: &T) -> WardenResult<bool> {
        let permission = registry.resolve(target, Some(action))?;
        let available = registry
            .available_actions(permission.kind())
            .unwrap_or_default();
        if !available.iter().any(|a| a == action) {
            return Err(WardenError::action_unavailable(format!(
                "action `{action}` not available for permission kind `{}`",
                permission.kind()
            )));
        }
        self.has_permission(&permission)
    }

    /// May the holder access `target` at all? Checks without action
    /// granularity.
    fn may_access<T>(&self, registry: &Registry<T>, target: &T) -> WardenResult<bool> {
        let permission = registry.resolve(target, None)?;
        self.has_permission(&permission)
    }

    /// Negation of [`may`](Self::may).
    fn may_not<T>(&self, registry: &Registry<T>, action: &str, target: &T) -> WardenResult<bool> {
        Ok(!self.may(registry, action, target)?)
    }

    /// Negation of [`may_access`](Self::may_access).
    fn may_not_access<T>(&self, registry: &Registry<T>, target: &T) -> WardenResult<bool> {
        Ok(!self.may_access(registry, target)?)
    }
}

impl PermissionAccessors for crate::holder::RuleSet {
    fn has_permission(&self, permission: &Permission) -> WardenResult<bool> {
        crate::holder::RuleSet::has_permission(self, permission)
    }
}
