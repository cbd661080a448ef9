//! Rule indexing and the last-match-wins decision algorithm
//!
//! A rule base is queried for one permission at a time. The permission and
//! all of its dependency permissions are run through the base, and the last
//! defined rule matching *any* of those checks decides the outcome.
//!
//! Consider a space permission for `crm` and a resource permission for
//! `account` that depends on it, against the rules
//!
//! 1. deny all
//! 2. allow space `crm`
//! 3. deny resource `account`
//!
//! Checking the resource permission matches rules 1 and 2 through the
//! dependency and rules 1 and 3 through the permission itself; rule 3 is
//! defined last, so access is denied. Swap rules 2 and 3 and the space rule
//! matches last: the more generic rule now overrules the specific one, and
//! access is allowed. Users editing a sequential rule list expect exactly
//! this: append a rule at the end to override anything before it.

use crate::error::WardenResult;
use crate::permission::Permission;
use crate::rule::Rule;
use std::collections::HashMap;
use tracing::{debug, trace};

/// An indexed, immutable snapshot of an ordered rule sequence.
///
/// Rebuild a new `RuleBase` when the underlying rules change; never patch
/// one in place. An instance is safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct RuleBase {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleBase {
    /// Build a rule base over an ordered rule sequence. Index 0 is the
    /// lowest priority; the last rule is the highest.
    ///
    /// Fails only when a rule has no computable key (missing or overlong
    /// fields); an empty sequence is a valid base that denies everything.
    pub fn new(rules: Vec<Rule>) -> WardenResult<Self> {
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            rule.validate()?;
            // Later rules sharing a key overwrite earlier ones, so the index
            // always holds the maximum position for each key.
            index.insert(rule.key(), position);
        }
        Ok(Self { rules, index })
    }

    /// The rule snapshot, in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the base.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the base holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run a permission through the rule base.
    ///
    /// Every permission in the dependency chain contributes its match keys;
    /// a single maximum rule position is tracked globally across the whole
    /// chain, so a rule matching a dependency can out-rank a rule matching
    /// the permission itself purely by being defined later. When nothing
    /// matches, the default policy is to deny.
    pub fn run(&self, permission: &Permission) -> bool {
        let mut winner: Option<usize> = None;

        for check in permission.with_dependencies() {
            for key in check.match_keys() {
                if let Some(&position) = self.index.get(&key) {
                    trace!(%key, position, "rule matched");
                    winner = Some(winner.map_or(position, |w| w.max(position)));
                }
            }
        }

        match winner {
            Some(position) => {
                let rule = &self.rules[position];
                debug!(%permission, rule = %rule, allow = rule.allows(), "decision");
                rule.allows()
            }
            None => {
                debug!(%permission, "no rule matched, denying");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WardenError;
    use assert_matches::assert_matches;

    #[test]
    fn empty_base_denies_everything() {
        let base = RuleBase::new(vec![]).unwrap();
        assert!(base.is_empty());
        assert!(!base.run(&Permission::new("custom", "something")));
    }

    #[test]
    fn construction_rejects_malformed_rules() {
        assert_matches!(
            RuleBase::new(vec![Rule::allow("", "account")]),
            Err(WardenError::InvalidRule { .. })
        );
    }

    #[test]
    fn duplicate_keys_are_shadowed_by_the_last_rule() {
        let base = RuleBase::new(vec![
            Rule::deny("resource", "account"),
            Rule::allow("resource", "account"),
        ])
        .unwrap();
        assert!(base.run(&Permission::new("resource", "account")));
    }

    #[test]
    fn wildcard_kind_matches_only_via_the_all_key() {
        // `all` paired with a specific name still keys as `all`; a later
        // wildcard overrides an earlier specific rule.
        let base = RuleBase::new(vec![
            Rule::deny("resource", "account"),
            Rule::allow_all(),
        ])
        .unwrap();
        assert!(base.run(&Permission::new("resource", "account")));
    }

    #[test]
    fn action_rules_do_not_match_actionless_checks() {
        let base =
            RuleBase::new(vec![Rule::allow("resource", "account").with_action("create")]).unwrap();
        assert!(!base.run(&Permission::new("resource", "account")));
        assert!(base.run(&Permission::new("resource", "account").with_action("create")));
    }

    #[test]
    fn run_is_idempotent() {
        let base = RuleBase::new(vec![Rule::deny_all(), Rule::allow_all_of("resource")]).unwrap();
        let permission = Permission::new("resource", "account");
        let first = base.run(&permission);
        assert_eq!(base.run(&permission), first);
    }
}
