//! The resource-type registry.
//!
//! A [`Registry`] maps fully qualified resource type chains to the parent
//! scopes they admit. It is read-only once built and is shared by reference
//! between the parser and the builder.
//!
//! # Overview
//!
//! - [`Registry::builtin`]: the process-wide catalog, built once on first use
//! - [`RegistryBuilder`]: assembles custom registries, optionally from JSON
//! - [`ResourceDef`]: one registry entry
//! - [`ParentScope`]: the shapes an entry may admit
//!
//! # Example
//!
//! ```rust
//! use azurerm_resource_id::{ParentScope, Registry, ResourceDef, ResourceType};
//!
//! let registry = Registry::builder()
//!     .merge(Registry::builtin())
//!     .resource_def(ResourceDef::new(
//!         ResourceType::new("Contoso.Widgets/widgets").unwrap(),
//!         vec![ParentScope::ResourceGroup],
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert!(registry.lookup("Contoso.Widgets/widgets").is_some());
//! assert!(registry.lookup("Microsoft.ContainerRegistry/registries").is_some());
//! assert!(registry.lookup("Contoso.Widgets/gadgets").is_none());
//! ```

mod builtin;
mod catalog;
mod scope;

pub use scope::ParentScope;

use crate::error::RegistryError;
use crate::types::ResourceType;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// A registry entry: a resource type and the parent scopes it admits.
///
/// A type may admit more than one scope. `Microsoft.CostManagement/reports`,
/// for instance, lives under a resource group or as an extension on another
/// resource. The order of [`scopes`](Self::scopes) is the declaration order
/// and is used as the builder's tie-break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDef {
    resource_type: ResourceType,
    scopes: Vec<ParentScope>,
}

impl ResourceDef {
    /// Creates a new registry entry.
    #[must_use]
    pub fn new(resource_type: ResourceType, scopes: Vec<ParentScope>) -> Self {
        Self {
            resource_type,
            scopes,
        }
    }

    /// Creates an entry for a child type nested under its own parent chain.
    ///
    /// Returns `None` for top-level types.
    #[must_use]
    pub fn child(resource_type: ResourceType) -> Option<Self> {
        let parent = resource_type.parent_type()?;
        Some(Self::new(resource_type, vec![ParentScope::Resource(parent)]))
    }

    pub(crate) fn with_default_scopes(
        resource_type: ResourceType,
        scopes: Vec<ParentScope>,
    ) -> Result<Self, RegistryError> {
        if !scopes.is_empty() {
            return Ok(Self::new(resource_type, scopes));
        }
        let name = resource_type.to_string();
        Self::child(resource_type).ok_or(RegistryError::NoAdmissibleScopes {
            resource_type: name,
        })
    }

    /// Returns the resource type chain.
    #[must_use]
    pub const fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    /// Returns the admissible scopes in declaration order.
    #[must_use]
    pub fn scopes(&self) -> &[ParentScope] {
        &self.scopes
    }

    /// Returns `true` if `scope` is one of the admissible shapes.
    #[must_use]
    pub fn admits(&self, scope: &ParentScope) -> bool {
        self.scopes.iter().any(|s| s.same_shape(scope))
    }
}

/// A read-only table of known resource types.
///
/// Lookups are exact string matches on the type chain. An absent entry is not
/// an error; it tells the parser and builder to fall back to positional rules.
///
/// # Thread Safety
///
/// `Registry` is `Send + Sync` and never mutated after construction, so any
/// number of parse and build calls may share it without locking.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    defs: HashMap<String, Arc<ResourceDef>>,
}

// Verify Registry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
    assert_send_sync::<ResourceDef>();
};

impl Registry {
    /// Creates a new builder for a custom registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the process-wide builtin registry.
    ///
    /// The table is built on first use and never changes afterwards.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(Self::from_builtin_table)
    }

    /// Loads a registry from a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the document is malformed, names an
    /// invalid type, declares a type twice, or leaves a top-level type
    /// without scopes.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::builder().merge_json(json)?.build()
    }

    /// Looks up a resource type chain. The match is exact and case-sensitive.
    #[must_use]
    pub fn lookup(&self, resource_type: &str) -> Option<&Arc<ResourceDef>> {
        self.defs.get(resource_type)
    }

    /// Returns `true` if the type chain is registered.
    #[must_use]
    pub fn contains(&self, resource_type: &str) -> bool {
        self.defs.contains_key(resource_type)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterates over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceDef> {
        self.defs.values().map(AsRef::as_ref)
    }

    fn from_builtin_table() -> Self {
        let mut defs = HashMap::with_capacity(builtin::RESOURCE_DEFINITIONS.len());
        for (name, shapes) in builtin::RESOURCE_DEFINITIONS {
            match builtin::resource_def(name, shapes) {
                Ok(def) => {
                    defs.insert((*name).to_string(), Arc::new(def));
                }
                Err(err) => {
                    tracing::error!(
                        resource_type = %name,
                        error = %err,
                        "Skipping invalid builtin resource definition"
                    );
                }
            }
        }

        Self { defs }
    }
}

/// Builder for constructing [`Registry`] instances.
///
/// Entries keep their declaration order. Declaring a type that is already
/// present replaces the earlier entry, so a custom catalog can override the
/// builtin one after [`merge`](Self::merge).
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::Registry;
///
/// let registry = Registry::builder()
///     .merge(Registry::builtin())
///     .merge_json(r#"{ "resourceDefinitions": [
///         { "type": "Contoso.Widgets/widgets", "scopes": ["ResourceGroup"] }
///     ] }"#)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(registry.contains("Contoso.Widgets/widgets"));
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    defs: Vec<ResourceDef>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any earlier entry for the same type.
    #[must_use]
    pub fn resource_def(mut self, def: ResourceDef) -> Self {
        let key = def.resource_type().to_string();
        if let Some(&slot) = self.index.get(&key) {
            self.defs[slot] = def;
        } else {
            self.index.insert(key, self.defs.len());
            self.defs.push(def);
        }
        self
    }

    /// Adds every entry of an existing registry.
    #[must_use]
    pub fn merge(self, registry: &Registry) -> Self {
        let mut defs: Vec<&ResourceDef> = registry.iter().collect();
        defs.sort_by(|a, b| a.resource_type().as_ref().cmp(b.resource_type().as_ref()));
        defs.into_iter()
            .fold(self, |builder, def| builder.resource_def(def.clone()))
    }

    /// Adds every entry of a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the document cannot be parsed.
    pub fn merge_json(self, json: &str) -> Result<Self, RegistryError> {
        let defs = catalog::parse_catalog(json)?;
        Ok(defs
            .into_iter()
            .fold(self, |builder, def| builder.resource_def(def)))
    }

    /// Builds the [`Registry`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoAdmissibleScopes`] if an entry lists no scope.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut defs = HashMap::with_capacity(self.defs.len());
        for def in self.defs {
            if def.scopes().is_empty() {
                return Err(RegistryError::NoAdmissibleScopes {
                    resource_type: def.resource_type().to_string(),
                });
            }
            defs.insert(def.resource_type().to_string(), Arc::new(def));
        }

        tracing::debug!(resource_types = defs.len(), "Built resource type registry");

        Ok(Registry { defs })
    }
}
