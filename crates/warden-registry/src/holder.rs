//! Holder composition: a rule collection with a cached rule base
//!
//! A holder (a user, a role, a group) owns an ordered rule collection. The
//! rule base over it is built lazily on first check and cached; swapping or
//! invalidating the rules requires exclusive access, so shared readers can
//! never observe a half-built index.

use once_cell::sync::OnceCell;
use warden_core::{Permission, Rule, RuleBase, WardenResult};

/// An ordered rule collection plus its lazily built, cached [`RuleBase`].
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    base: OnceCell<RuleBase>,
}

impl RuleSet {
    /// Create a rule set over an ordered rule collection. Append a rule to
    /// give it the highest priority.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            base: OnceCell::new(),
        }
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule base over the current rules, built on first use and cached
    /// until [`replace`](Self::replace) or [`invalidate`](Self::invalidate).
    pub fn rule_base(&self) -> WardenResult<&RuleBase> {
        self.base
            .get_or_try_init(|| RuleBase::new(self.rules.clone()))
    }

    /// Swap in a new rule collection and drop the cached rule base.
    pub fn replace(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
        self.base.take();
    }

    /// Drop the cached rule base; the next check rebuilds it.
    pub fn invalidate(&mut self) {
        self.base.take();
    }

    /// Run a permission through the holder's rule base.
    pub fn has_permission(&self, permission: &Permission) -> WardenResult<bool> {
        Ok(self.rule_base()?.run(permission))
    }
}
