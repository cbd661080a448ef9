//! Permission-kind registration and target resolution
//!
//! Each registered kind supplies a resolver closure that recognizes
//! application targets, the set of actions meaningful for the kind, and
//! optionally a lister that enumerates every permission of the kind. The
//! registry itself is an explicit object: build it once at startup, pass it
//! to whoever needs resolution.

use indexmap::IndexMap;
use std::fmt;
use tracing::trace;
use warden_core::{Permission, WardenError, WardenResult};

type ResolveFn<T> = Box<dyn Fn(&T) -> Option<Permission> + Send + Sync>;
type ListFn = Box<dyn Fn() -> Vec<Permission> + Send + Sync>;

/// Specification of one permission kind over application target type `T`.
pub struct KindSpec<T> {
    name: String,
    actions: Vec<String>,
    resolve: ResolveFn<T>,
    list: Option<ListFn>,
}

impl<T> KindSpec<T> {
    /// Create a kind with the given name and resolver. The resolver returns
    /// the kind's permission for targets it recognizes, including any
    /// dependency permissions the kind implies, and `None` otherwise.
    pub fn new<F>(name: impl Into<String>, resolve: F) -> Self
    where
        F: Fn(&T) -> Option<Permission> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            actions: Vec::new(),
            resolve: Box::new(resolve),
            list: None,
        }
    }

    /// Declare the actions meaningful for this kind.
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a lister enumerating every permission of this kind known to
    /// the application. Kinds without a lister are skipped when listing.
    pub fn with_lister<F>(mut self, list: F) -> Self
    where
        F: Fn() -> Vec<Permission> + Send + Sync + 'static,
    {
        self.list = Some(Box::new(list));
        self
    }
}

/// An immutable registry of permission kinds over target type `T`.
pub struct Registry<T> {
    kinds: IndexMap<String, KindSpec<T>>,
}

impl<T> Registry<T> {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder {
            kinds: IndexMap::new(),
        }
    }

    /// Resolve a target into a permission, trying each registered kind in
    /// registration order and taking the first that recognizes it. The
    /// requested action, if any, is stamped onto the resolved permission.
    pub fn resolve(&self, target: &T, action: Option<&str>) -> WardenResult<Permission> {
        for (kind, spec) in &self.kinds {
            if let Some(mut permission) = (spec.resolve)(target) {
                if let Some(action) = action {
                    permission = permission.with_action(action);
                }
                trace!(%kind, %permission, "target resolved");
                return Ok(permission);
            }
        }
        Err(WardenError::resolution(
            "no registered kind recognized the target",
        ))
    }

    /// The action vocabulary of a kind, or `None` for unregistered kinds.
    pub fn available_actions(&self, kind: &str) -> Option<&[String]> {
        self.kinds.get(kind).map(|spec| spec.actions.as_slice())
    }

    /// All known permissions organized by kind, in registration order.
    /// Only kinds with a lister contribute.
    pub fn available_permissions(&self) -> IndexMap<String, Vec<Permission>> {
        self.kinds
            .iter()
            .filter_map(|(kind, spec)| {
                let list = spec.list.as_ref()?;
                Some((kind.clone(), list()))
            })
            .collect()
    }

    /// The registered kind names, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.kinds.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`Registry`]; the registry is immutable once built.
pub struct RegistryBuilder<T> {
    kinds: IndexMap<String, KindSpec<T>>,
}

impl<T> fmt::Debug for RegistryBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("kinds", &self.kinds.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> RegistryBuilder<T> {
    /// Register a permission kind. Registration order determines resolution
    /// order. Registering the same kind name twice is an error.
    pub fn register(mut self, spec: KindSpec<T>) -> WardenResult<Self> {
        if self.kinds.contains_key(&spec.name) {
            return Err(WardenError::duplicate_kind(spec.name));
        }
        self.kinds.insert(spec.name.clone(), spec);
        Ok(self)
    }

    /// Finalize the registry.
    pub fn build(self) -> Registry<T> {
        Registry { kinds: self.kinds }
    }
}
