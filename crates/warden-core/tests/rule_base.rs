//! End-to-end scenarios for the rule base decision algorithm.

use warden_core::{Permission, Rule, RuleBase};

#[test]
fn no_rules_denies_all_access() {
    let base = RuleBase::new(vec![]).unwrap();
    assert!(!base.run(&Permission::new("custom", "something")));
}

#[test]
fn an_allow_all_rule_allows_all_access() {
    let base = RuleBase::new(vec![Rule::allow_all()]).unwrap();
    assert!(base.run(&Permission::new("custom", "something")));
}

mod cascading_rule_set {
    use super::*;

    fn base() -> RuleBase {
        RuleBase::new(vec![
            Rule::deny_all(),
            Rule::allow_all_of("resource"),
            Rule::deny("resource", "account"),
        ])
        .unwrap()
    }

    #[test]
    fn denies_access_to_a_non_resource_permission() {
        assert!(!base().run(&Permission::new("custom", "something")));
    }

    #[test]
    fn allows_access_to_a_non_account_resource_permission() {
        assert!(base().run(&Permission::new("resource", "contact")));
    }

    #[test]
    fn denies_access_to_an_account_resource_permission() {
        assert!(!base().run(&Permission::new("resource", "account")));
    }
}

mod dependency_chain {
    use super::*;

    // A permission that requires access to space `crm` as well as resource
    // `account`. Both rules below target only the dependency's key; the one
    // defined last wins no matter which element of the chain matched it.
    fn permission() -> Permission {
        Permission::new("resource", "account").with_dependency(Permission::new("space", "crm"))
    }

    #[test]
    fn allows_access_when_the_allow_rule_is_defined_last() {
        let base = RuleBase::new(vec![
            Rule::deny("space", "crm"),
            Rule::allow("space", "crm"),
        ])
        .unwrap();
        assert!(base.run(&permission()));
    }

    #[test]
    fn denies_access_when_the_deny_rule_is_defined_last() {
        let base = RuleBase::new(vec![
            Rule::allow("space", "crm"),
            Rule::deny("space", "crm"),
        ])
        .unwrap();
        assert!(!base.run(&permission()));
    }
}

mod action_targeting {
    use super::*;

    fn base() -> RuleBase {
        RuleBase::new(vec![
            Rule::allow_all_of("resource"),
            Rule::deny_all_of("resource").with_action("create"),
            Rule::allow("resource", "account").with_action("create"),
        ])
        .unwrap()
    }

    #[test]
    fn allows_viewing_a_contact_resource() {
        assert!(base().run(&Permission::new("resource", "contact").with_action("view")));
    }

    #[test]
    fn allows_viewing_an_account_resource() {
        assert!(base().run(&Permission::new("resource", "account").with_action("view")));
    }

    #[test]
    fn denies_creating_a_contact_resource() {
        assert!(!base().run(&Permission::new("resource", "contact").with_action("create")));
    }

    #[test]
    fn allows_creating_an_account_resource() {
        assert!(base().run(&Permission::new("resource", "account").with_action("create")));
    }
}
