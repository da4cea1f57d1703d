//! Resource identifiers.
//!
//! A [`ResourceId`] is the resolved form of an ARM identifier such as
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.ContainerRegistry/registries/{registry}?api-version=2020-11-01-preview
//! ```
//!
//! It is produced either by parsing such a string ([`parse_resource_id`],
//! [`Registry::parse`]) or by building one from a name, a parent id and a
//! `type@version` reference ([`build_resource_id`], [`Registry::build`]).
//! Both directions are pure functions of their inputs and the registry.

mod build;
mod classify;
mod parse;
mod segments;

use crate::error::ResourceIdError;
use crate::registry::{ParentScope, Registry, ResourceDef};
use crate::types::{ApiVersion, ResourceType};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A resolved resource identifier.
///
/// # Invariants
///
/// - `azure_resource_id` is `parent_id` followed by the suffix implied by the
///   resource type, scope and name
/// - `api_version` and `name` are never empty
/// - `parent_id` is empty, a subscription, a management group or a full
///   resource id; never a bare type fragment
///
/// # Serialization
///
/// `ResourceId` serializes to its [`id`](Self::id) string and deserializes by
/// parsing it against the builtin registry.
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::{ParentScope, ResourceId};
///
/// let id = ResourceId::new(
///     "/subscriptions/0000/resourceGroups/group1/providers/Microsoft.EventHub/clusters/cluster1",
///     "2020-12-01",
/// )
/// .unwrap();
///
/// assert_eq!(id.resource_type().as_ref(), "Microsoft.EventHub/clusters");
/// assert_eq!(id.name(), "cluster1");
/// assert_eq!(id.parent_id(), "/subscriptions/0000/resourceGroups/group1");
/// assert_eq!(id.scope(), &ParentScope::ResourceGroup);
/// assert_eq!(
///     id.id(),
///     "/subscriptions/0000/resourceGroups/group1/providers/Microsoft.EventHub/clusters/cluster1?api-version=2020-12-01"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceId {
    api_version: ApiVersion,
    resource_type: ResourceType,
    azure_resource_id: String,
    name: String,
    parent_id: String,
    scope: ParentScope,
    resource_def: Option<Arc<ResourceDef>>,
}

// Verify ResourceId is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceId>();
};

impl ResourceId {
    /// Resolves a URL and an API version against the builtin registry.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceIdError`] if the URL or version is malformed.
    pub fn new(url: &str, api_version: &str) -> Result<Self, ResourceIdError> {
        Registry::builtin().parse_url(url, api_version)
    }

    /// Parses `{url}?api-version={version}` against the builtin registry.
    ///
    /// # Errors
    ///
    /// See [`Registry::parse`].
    pub fn parse(raw: &str) -> Result<Self, ResourceIdError> {
        Registry::builtin().parse(raw)
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the resource type chain, e.g. `Microsoft.ContainerRegistry/registries/scopeMaps`.
    #[must_use]
    pub const fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    /// Returns the full identifier path without the `api-version` query.
    #[must_use]
    pub fn azure_resource_id(&self) -> &str {
        &self.azure_resource_id
    }

    /// Alias for [`azure_resource_id`](Self::azure_resource_id), the URL path
    /// the CRUD client addresses.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.azure_resource_id
    }

    /// Returns the leaf instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the id of the enclosing scope or resource; empty at the tenant root.
    #[must_use]
    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    /// Returns the scope this identifier was classified as.
    #[must_use]
    pub const fn scope(&self) -> &ParentScope {
        &self.scope
    }

    /// Returns the registry entry for the resource type, if the type is known.
    #[must_use]
    pub fn resource_def(&self) -> Option<&ResourceDef> {
        self.resource_def.as_deref()
    }

    /// Returns `true` if the resource type is registered.
    #[must_use]
    pub fn is_known_type(&self) -> bool {
        self.resource_def.is_some()
    }

    /// Returns the persisted form `{azure_resource_id}?api-version={api_version}`.
    ///
    /// Parsing the returned string yields an equal record.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}?api-version={}",
            self.azure_resource_id, self.api_version
        )
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (api-version {})",
            self.resource_type, self.azure_resource_id, self.api_version
        )
    }
}

impl FromStr for ResourceId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Parses an identifier against the builtin registry.
///
/// # Errors
///
/// See [`Registry::parse`].
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::parse_resource_id;
///
/// let id = parse_resource_id(
///     "/providers/Microsoft.Management/managementGroups/test?api-version=2021-04-01",
/// )
/// .unwrap();
/// assert_eq!(id.parent_id(), "");
/// assert_eq!(id.resource_type().as_ref(), "Microsoft.Management/managementGroups");
/// ```
pub fn parse_resource_id(raw: &str) -> Result<ResourceId, ResourceIdError> {
    Registry::builtin().parse(raw)
}

/// Builds an identifier against the builtin registry.
///
/// # Errors
///
/// See [`Registry::build`].
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::build_resource_id;
///
/// let id = build_resource_id(
///     "test",
///     "/subscriptions/0000",
///     "Microsoft.Resources/resourceGroups@2021-04-01",
/// )
/// .unwrap();
/// assert_eq!(id.azure_resource_id(), "/subscriptions/0000/resourceGroups/test");
/// ```
pub fn build_resource_id(
    name: &str,
    parent_id: &str,
    type_at_version: &str,
) -> Result<ResourceId, ResourceIdError> {
    Registry::builtin().build(name, parent_id, type_at_version)
}

/// Checks that an identifier parses, discarding the record.
///
/// Suitable as an import validator.
///
/// # Errors
///
/// See [`Registry::parse`].
pub fn validate_resource_id(raw: &str) -> Result<(), ResourceIdError> {
    parse_resource_id(raw).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUSTER: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.EventHub/clusters/cluster1";

    #[test]
    fn test_id_round_trips_through_parse() {
        let id = ResourceId::new(CLUSTER, "2020-12-01").unwrap();
        assert_eq!(id.url(), CLUSTER);
        let reparsed = ResourceId::parse(&id.id()).unwrap();
        assert_eq!(reparsed, id);
    }

    #[test]
    fn test_from_str() {
        let id: ResourceId = format!("{CLUSTER}?api-version=2020-12-01").parse().unwrap();
        assert_eq!(id.name(), "cluster1");
        assert!(id.is_known_type());
    }

    #[test]
    fn test_display_names_type_path_and_version() {
        let id = ResourceId::new(CLUSTER, "2020-12-01").unwrap();
        let shown = id.to_string();
        assert!(shown.starts_with("Microsoft.EventHub/clusters "));
        assert!(shown.contains(CLUSTER));
        assert!(shown.ends_with("(api-version 2020-12-01)"));
    }

    #[test]
    fn test_serde_uses_id_string() {
        let id = ResourceId::new(CLUSTER, "2020-12-01").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{CLUSTER}?api-version=2020-12-01\""));

        let restored: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);

        assert!(serde_json::from_str::<ResourceId>(&format!("\"{CLUSTER}\"")).is_err());
    }

    #[test]
    fn test_validate_resource_id() {
        assert!(validate_resource_id(&format!("{CLUSTER}?api-version=2020-12-01")).is_ok());
        assert!(validate_resource_id(CLUSTER).is_err());
        assert!(validate_resource_id("").is_err());
    }

    #[test]
    fn test_new_rejects_empty_url() {
        assert!(matches!(
            ResourceId::new("", "2020-12-01"),
            Err(ResourceIdError::EmptyInput { field: "url" })
        ));
    }
}
