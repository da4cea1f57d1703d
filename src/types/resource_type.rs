//! Validated resource type and `type@version` reference newtypes.

use super::ApiVersion;
use crate::error::ResourceIdError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fully qualified ARM resource type chain.
///
/// The chain is the resource provider namespace followed by one or more type
/// segments, without instance names: `Microsoft.ContainerRegistry/registries`
/// or `Microsoft.ContainerRegistry/registries/scopeMaps`.
///
/// Case is preserved as supplied. Registry lookups are exact; parent/child
/// relationships between chains compare ASCII case-insensitively, as ARM does.
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::ResourceType;
///
/// let scope_maps = ResourceType::new("Microsoft.ContainerRegistry/registries/scopeMaps").unwrap();
/// assert_eq!(scope_maps.namespace(), "Microsoft.ContainerRegistry");
/// assert_eq!(scope_maps.leaf_type(), "scopeMaps");
/// assert_eq!(scope_maps.depth(), 2);
///
/// let registries = scope_maps.parent_type().unwrap();
/// assert_eq!(registries.as_ref(), "Microsoft.ContainerRegistry/registries");
/// assert!(scope_maps.is_child_of(&registries));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceType {
    full: String,
    namespace_end: usize,
}

impl ResourceType {
    /// Creates a new validated resource type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::MalformedTypeReference`] if the chain has no
    /// type segment, contains an empty segment, or contains `@`.
    pub fn new(resource_type: impl Into<String>) -> Result<Self, ResourceIdError> {
        let full = resource_type.into();

        if full.is_empty() {
            return Err(ResourceIdError::malformed_type(&full, "resource type is empty"));
        }
        if full.contains('@') {
            return Err(ResourceIdError::malformed_type(
                &full,
                "resource type must not contain '@'",
            ));
        }
        if full.split('/').any(str::is_empty) {
            return Err(ResourceIdError::malformed_type(
                &full,
                "resource type contains an empty segment",
            ));
        }
        let namespace_end = full.find('/').ok_or_else(|| {
            ResourceIdError::malformed_type(&full, "expected 'Namespace/type'")
        })?;

        Ok(Self {
            full,
            namespace_end,
        })
    }

    /// Returns the resource provider namespace, e.g. `Microsoft.Storage`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.full[..self.namespace_end]
    }

    /// Returns the type segments after the namespace, in order.
    pub fn type_segments(&self) -> impl Iterator<Item = &str> {
        self.full[self.namespace_end + 1..].split('/')
    }

    /// Returns the number of type segments after the namespace.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.type_segments().count()
    }

    /// Returns the last type segment.
    #[must_use]
    pub fn leaf_type(&self) -> &str {
        self.full.rsplit('/').next().unwrap_or_default()
    }

    /// Returns the enclosing type of a child type, or `None` for a top-level type.
    #[must_use]
    pub fn parent_type(&self) -> Option<Self> {
        let last_slash = self.full.rfind('/')?;
        if last_slash == self.namespace_end {
            return None;
        }
        Some(Self {
            full: self.full[..last_slash].to_string(),
            namespace_end: self.namespace_end,
        })
    }

    /// Returns `true` if `self` is a direct child of `parent`.
    #[must_use]
    pub fn is_child_of(&self, parent: &Self) -> bool {
        self.parent_type()
            .is_some_and(|own| own.full.eq_ignore_ascii_case(&parent.full))
    }

    /// Returns `true` if both chains name the same type, ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.full.eq_ignore_ascii_case(other)
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl FromStr for ResourceType {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ResourceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full)
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A `{resourceType}@{apiVersion}` reference as accepted by the builder.
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::TypeReference;
///
/// let reference: TypeReference = "Microsoft.EventHub/clusters@2020-12-01".parse().unwrap();
/// assert_eq!(reference.resource_type().as_ref(), "Microsoft.EventHub/clusters");
/// assert_eq!(reference.api_version().as_ref(), "2020-12-01");
///
/// assert!("Microsoft.EventHub/clusters".parse::<TypeReference>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeReference {
    resource_type: ResourceType,
    api_version: ApiVersion,
}

impl TypeReference {
    /// Creates a reference from already validated parts.
    #[must_use]
    pub const fn new(resource_type: ResourceType, api_version: ApiVersion) -> Self {
        Self {
            resource_type,
            api_version,
        }
    }

    /// Returns the resource type half of the reference.
    #[must_use]
    pub const fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    /// Returns the API version half of the reference.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Splits the reference into its parts.
    #[must_use]
    pub fn into_parts(self) -> (ResourceType, ApiVersion) {
        (self.resource_type, self.api_version)
    }
}

impl FromStr for TypeReference {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('@');
        let (Some(resource_type), Some(api_version), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(ResourceIdError::malformed_type(
                s,
                "expected exactly one '@' separating type and API version",
            ));
        };

        if resource_type.is_empty() {
            return Err(ResourceIdError::malformed_type(s, "resource type is empty"));
        }
        let resource_type = ResourceType::new(resource_type)
            .map_err(|_| ResourceIdError::malformed_type(s, "invalid resource type"))?;
        let api_version = ApiVersion::new(api_version)
            .map_err(|_| ResourceIdError::malformed_type(s, "missing or invalid API version"))?;

        Ok(Self {
            resource_type,
            api_version,
        })
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.resource_type, self.api_version)
    }
}
