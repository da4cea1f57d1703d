//! Parent scope shapes.

use crate::types::ResourceType;
use std::fmt;

/// The structural context a resource identifier is anchored to.
///
/// A registry entry lists the shapes a type admits; a parsed identifier
/// carries the one shape it was classified as.
///
/// | Shape             | Parent id                                         |
/// |-------------------|---------------------------------------------------|
/// | `Tenant`          | empty                                             |
/// | `ManagementGroup` | `/providers/Microsoft.Management/managementGroups/{mg}` |
/// | `Subscription`    | `/subscriptions/{sub}`                            |
/// | `ResourceGroup`   | `/subscriptions/{sub}/resourceGroups/{rg}`        |
/// | `Extension`       | any resource id, joined by a new `providers` group |
/// | `Resource(T)`     | a resource of type `T`, same `providers` group    |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParentScope {
    /// Anchored at the tenant root.
    Tenant,
    /// Anchored at a management group.
    ManagementGroup,
    /// Anchored at a subscription.
    Subscription,
    /// Anchored at a resource group.
    ResourceGroup,
    /// Attached to another resource through a second `providers` group.
    Extension,
    /// Nested under a resource of the given type.
    Resource(ResourceType),
}

impl ParentScope {
    /// Returns `true` if both values describe the same shape.
    ///
    /// `Resource` shapes compare their parent types ignoring ASCII case.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Resource(a), Self::Resource(b)) => a.matches(b.as_ref()),
            _ => self == other,
        }
    }

    /// Returns `true` for the `Resource` (child) shape.
    #[must_use]
    pub const fn is_child(&self) -> bool {
        matches!(self, Self::Resource(_))
    }

    pub(crate) fn describe_all(scopes: &[Self]) -> String {
        scopes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl fmt::Display for ParentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tenant => f.write_str("tenant"),
            Self::ManagementGroup => f.write_str("management group"),
            Self::Subscription => f.write_str("subscription"),
            Self::ResourceGroup => f.write_str("resource group"),
            Self::Extension => f.write_str("extension"),
            Self::Resource(parent) => write!(f, "resource of type '{parent}'"),
        }
    }
}
