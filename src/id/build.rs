//! `(name, parent id, type@version)` to [`ResourceId`].
//!
//! The builder inverts the parser. It classifies the parent id, picks the
//! scope the new resource takes relative to it, and appends the matching
//! suffix:
//!
//! | Scope                         | Suffix appended to the parent id       |
//! |-------------------------------|----------------------------------------|
//! | subscription (resource group) | `/resourceGroups/{name}`               |
//! | tenant (subscription)         | `/subscriptions/{name}`                |
//! | child resource                | `/{childType}/{name}`                  |
//! | anything else                 | `/providers/{namespace}/{type}/{name}` |

use super::classify::{classify, RESOURCE_GROUP_TYPE, SUBSCRIPTION_TYPE};
use super::segments::SegmentPath;
use super::ResourceId;
use crate::error::ResourceIdError;
use crate::registry::{ParentScope, Registry, ResourceDef};
use crate::types::{ResourceType, TypeReference};

/// The structural kind of a parent id.
#[derive(Debug)]
enum ParentShape {
    Tenant,
    ManagementGroup(ResourceType),
    Subscription,
    ResourceGroup,
    Resource(ResourceType),
}

impl ParentShape {
    fn of(parent_id: &str) -> Result<Self, ResourceIdError> {
        if parent_id.is_empty() {
            return Ok(Self::Tenant);
        }

        let path = SegmentPath::parse(parent_id, parent_id)?;
        if path.is_subscription() {
            return Ok(Self::Subscription);
        }
        if path.is_resource_group() {
            return Ok(Self::ResourceGroup);
        }

        let class = classify(&path, parent_id)?;
        if path.is_management_group() {
            Ok(Self::ManagementGroup(class.resource_type))
        } else {
            Ok(Self::Resource(class.resource_type))
        }
    }

    fn resource_type(&self) -> Option<&ResourceType> {
        match self {
            Self::ManagementGroup(t) | Self::Resource(t) => Some(t),
            _ => None,
        }
    }

    /// Returns `true` if a resource of type `child` can take `scope` under this parent.
    ///
    /// Type chains compare exactly, since the parser reads them back from the
    /// path text and registry lookups are case-sensitive.
    fn fits(&self, scope: &ParentScope, child: &ResourceType) -> bool {
        match scope {
            ParentScope::Resource(expected) => self
                .resource_type()
                .is_some_and(|own| own == expected && extends(child, own)),
            _ if child.depth() != 1 => false,
            ParentScope::Tenant => matches!(self, Self::Tenant),
            ParentScope::ManagementGroup => matches!(self, Self::ManagementGroup(_)),
            ParentScope::Subscription => matches!(self, Self::Subscription),
            ParentScope::ResourceGroup => matches!(self, Self::ResourceGroup),
            ParentScope::Extension => match self {
                Self::Resource(own) => !own.matches(child.as_ref()),
                _ => false,
            },
        }
    }

    /// The scope an unregistered type takes under this parent, by position alone.
    fn infer(&self, child: &ResourceType) -> Option<ParentScope> {
        if let Some(own) = self.resource_type() {
            if extends(child, own) {
                return Some(ParentScope::Resource(own.clone()));
            }
        }
        if child.depth() != 1 {
            return None;
        }
        Some(match self {
            Self::Tenant => ParentScope::Tenant,
            Self::ManagementGroup(_) => ParentScope::ManagementGroup,
            Self::Subscription => ParentScope::Subscription,
            Self::ResourceGroup => ParentScope::ResourceGroup,
            Self::Resource(_) => ParentScope::Extension,
        })
    }
}

impl Registry {
    /// Builds a [`ResourceId`] from a name, a parent id and a `type@version`.
    ///
    /// For a registered type, the parent must fit one of its admissible
    /// scopes. When several fit, resource group scope wins over extension,
    /// otherwise the first in declaration order is taken. An unregistered
    /// type is placed by position: as a child when its type chain extends the
    /// parent's, otherwise as a top-level resource under the parent's scope
    /// (an extension when the parent is a resource).
    ///
    /// Type chains are matched exactly against the parent's own type, so a
    /// lower-cased parent id only accepts child types spelled the same way.
    /// An extension is never attached to a parent of its own type.
    ///
    /// A management group parent only satisfies management group scope. Types
    /// registered as extensions alone are rejected there, even though the
    /// parser accepts such a path and reports it as management group scope.
    ///
    /// `name` is not validated beyond being non-empty and free of `/` and `?`.
    ///
    /// # Errors
    ///
    /// - [`ResourceIdError::EmptyInput`] if `name` is empty
    /// - [`ResourceIdError::MalformedTypeReference`] if `type_at_version` is not
    ///   `Namespace/type@version`
    /// - [`ResourceIdError::MalformedIdentifier`] if `name` or `parent_id` is malformed
    /// - [`ResourceIdError::ParentScopeMismatch`] if the parent cannot hold the type
    ///
    /// # Example
    ///
    /// ```rust
    /// use azurerm_resource_id::Registry;
    ///
    /// let id = Registry::builtin()
    ///     .build(
    ///         "test",
    ///         "/subscriptions/0000/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry",
    ///         "Microsoft.CostManagement/reports@2018-08-01-preview",
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     id.azure_resource_id(),
    ///     "/subscriptions/0000/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry/providers/Microsoft.CostManagement/reports/test"
    /// );
    ///
    /// // Registries live in resource groups, not directly in subscriptions.
    /// assert!(Registry::builtin()
    ///     .build("test", "/subscriptions/0000", "Microsoft.ContainerRegistry/registries@2020-11-01-preview")
    ///     .is_err());
    /// ```
    pub fn build(
        &self,
        name: &str,
        parent_id: &str,
        type_at_version: &str,
    ) -> Result<ResourceId, ResourceIdError> {
        let reference: TypeReference = type_at_version.parse()?;
        self.build_from_reference(name, parent_id, reference)
    }

    /// Same as [`build`](Self::build) with an already parsed reference.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), minus the reference syntax errors.
    pub fn build_from_reference(
        &self,
        name: &str,
        parent_id: &str,
        reference: TypeReference,
    ) -> Result<ResourceId, ResourceIdError> {
        if name.is_empty() {
            return Err(ResourceIdError::EmptyInput { field: "name" });
        }
        if name.contains(['/', '?']) {
            return Err(ResourceIdError::malformed(
                name,
                "resource name must not contain '/' or '?'",
            ));
        }

        let (resource_type, api_version) = reference.into_parts();
        let parent = ParentShape::of(parent_id)?;
        let resource_def = self.lookup(resource_type.as_ref()).cloned();

        let scope = match &resource_def {
            Some(def) => select_scope(def, &parent, parent_id)?,
            None => parent.infer(&resource_type).ok_or_else(|| {
                ResourceIdError::ParentScopeMismatch {
                    parent_id: parent_id.to_string(),
                    resource_type: resource_type.to_string(),
                    expected: expected_for_unknown(&resource_type),
                }
            })?,
        };

        tracing::debug!(
            resource_type = %resource_type,
            scope = %scope,
            parent_id = %parent_id,
            known_type = resource_def.is_some(),
            "Built resource id"
        );

        let azure_resource_id = compose(parent_id, &scope, &resource_type, name);

        Ok(ResourceId {
            api_version,
            resource_type,
            azure_resource_id,
            name: name.to_string(),
            parent_id: parent_id.to_string(),
            scope,
            resource_def,
        })
    }
}

fn select_scope(
    def: &ResourceDef,
    parent: &ParentShape,
    parent_id: &str,
) -> Result<ParentScope, ResourceIdError> {
    let child = def.resource_type();
    let mut fitting = def.scopes().iter().filter(|scope| parent.fits(scope, child));

    let Some(first) = fitting.next() else {
        return Err(ResourceIdError::ParentScopeMismatch {
            parent_id: parent_id.to_string(),
            resource_type: child.to_string(),
            expected: ParentScope::describe_all(def.scopes()),
        });
    };

    let chosen = if *first == ParentScope::ResourceGroup {
        first
    } else {
        fitting
            .find(|scope| **scope == ParentScope::ResourceGroup)
            .unwrap_or(first)
    };
    Ok(chosen.clone())
}

fn expected_for_unknown(resource_type: &ResourceType) -> String {
    match resource_type.parent_type() {
        Some(parent) => ParentScope::Resource(parent).to_string(),
        None => "tenant, management group, subscription, resource group or extension".to_string(),
    }
}

/// Returns `true` if `child` is `parent` plus one more type segment, case included.
fn extends(child: &ResourceType, parent: &ResourceType) -> bool {
    child.parent_type().as_ref() == Some(parent)
}

fn compose(
    parent_id: &str,
    scope: &ParentScope,
    resource_type: &ResourceType,
    name: &str,
) -> String {
    match scope {
        ParentScope::Subscription if resource_type.as_ref() == RESOURCE_GROUP_TYPE => {
            format!("{parent_id}/resourceGroups/{name}")
        }
        ParentScope::Tenant if resource_type.as_ref() == SUBSCRIPTION_TYPE => {
            format!("/subscriptions/{name}")
        }
        ParentScope::Resource(_) => {
            format!("{parent_id}/{}/{name}", resource_type.leaf_type())
        }
        _ => format!(
            "{parent_id}/providers/{}/{}/{name}",
            resource_type.namespace(),
            resource_type.leaf_type()
        ),
    }
}
