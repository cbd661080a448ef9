//! # Warden Registry
//!
//! The integration layer around the warden core: a registry of permission
//! kinds that resolves application targets into [`Permission`] values, and
//! the holder composition that ties a rule collection to a cached
//! [`RuleBase`].
//!
//! The registry is built once and immutable afterwards. Resolution tries
//! each registered kind in registration order and takes the first that
//! recognizes the target.
//!
//! ## Usage
//!
//! ```rust
//! use warden_core::{Permission, Rule};
//! use warden_registry::{KindSpec, PermissionAccessors, Registry, RuleSet};
//!
//! // Targets are whatever the application checks access for.
//! struct Target(&'static str);
//!
//! let registry = Registry::builder()
//!     .register(
//!         KindSpec::new("resource", |target: &Target| {
//!             Some(Permission::new("resource", target.0))
//!         })
//!         .with_actions(["view", "create"]),
//!     )?
//!     .build();
//!
//! let holder = RuleSet::new(vec![Rule::allow_all_of("resource")]);
//! assert!(holder.may(&registry, "view", &Target("account"))?);
//! assert!(!holder.may_not(&registry, "view", &Target("account"))?);
//! # Ok::<(), warden_core::WardenError>(())
//! ```
//!
//! [`Permission`]: warden_core::Permission
//! [`RuleBase`]: warden_core::RuleBase

pub mod accessors;
pub mod holder;
pub mod registry;

pub use accessors::PermissionAccessors;
pub use holder::RuleSet;
pub use registry::{KindSpec, Registry, RegistryBuilder};
