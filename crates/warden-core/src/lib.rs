//! # Warden Core
//!
//! Rule-based authorization: ordered allow/deny rules are indexed by
//! canonical key and evaluated against permission requests with a
//! last-match-wins policy.
//!
//! A [`Permission`] describes what is being checked: a kind (category), a
//! name (target), an optional action, and the dependency permissions that
//! must be satisfied along with it. A [`Rule`] grants or denies a
//! kind/name/action pattern, ranked purely by its position in the rule
//! sequence. The [`RuleBase`] indexes a rule snapshot and makes the
//! decision.
//!
//! ## Usage
//!
//! ```rust
//! use warden_core::{Permission, Rule, RuleBase};
//!
//! let base = RuleBase::new(vec![
//!     Rule::deny_all(),
//!     Rule::allow_all_of("space"),
//!     Rule::deny("space", "admin"),
//! ])?;
//!
//! assert!(base.run(&Permission::new("space", "crm")));
//! assert!(!base.run(&Permission::new("space", "admin")));
//! assert!(!base.run(&Permission::new("report", "sales")));
//! # Ok::<(), warden_core::WardenError>(())
//! ```
//!
//! The default policy is closed: a permission no rule matches is denied.

pub mod error;
pub mod permission;
pub mod rule;
pub mod rule_base;

pub use error::{WardenError, WardenResult};
pub use permission::{Permission, WILDCARD};
pub use rule::Rule;
pub use rule_base::RuleBase;
