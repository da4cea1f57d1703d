//! The hand-curated catalog behind [`Registry::builtin`](super::Registry::builtin).
//!
//! Supporting a new resource type means adding a row here. Child types use
//! [`Shape::Parent`], which resolves to the type chain minus its last segment.

use super::{ParentScope, ResourceDef};
use crate::error::RegistryError;
use crate::types::ResourceType;

/// Scope shapes as written in the static table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Shape {
    Tenant,
    ManagementGroup,
    Subscription,
    ResourceGroup,
    Extension,
    Parent,
}

use Shape::{Extension, ManagementGroup, Parent, ResourceGroup, Subscription, Tenant};

pub(super) const RESOURCE_DEFINITIONS: &[(&str, &[Shape])] = &[
    // Resource manager pseudo-types
    ("Microsoft.Resources/subscriptions", &[Tenant]),
    ("Microsoft.Resources/resourceGroups", &[Subscription]),
    (
        "Microsoft.Resources/deployments",
        &[Tenant, ManagementGroup, Subscription, ResourceGroup],
    ),
    ("Microsoft.Management/managementGroups", &[Tenant]),
    // Governance
    (
        "Microsoft.Authorization/policyDefinitions",
        &[Tenant, ManagementGroup, Subscription],
    ),
    (
        "Microsoft.Authorization/policySetDefinitions",
        &[Tenant, ManagementGroup, Subscription],
    ),
    (
        "Microsoft.Authorization/policyAssignments",
        &[ManagementGroup, Subscription, ResourceGroup, Extension],
    ),
    (
        "Microsoft.Authorization/roleAssignments",
        &[ManagementGroup, Subscription, ResourceGroup, Extension],
    ),
    (
        "Microsoft.Authorization/locks",
        &[Subscription, ResourceGroup, Extension],
    ),
    // Cost and monitoring
    (
        "Microsoft.CostManagement/reports",
        &[Subscription, ResourceGroup, Extension],
    ),
    ("Microsoft.Insights/diagnosticSettings", &[Extension]),
    // Container registry
    ("Microsoft.ContainerRegistry/registries", &[ResourceGroup]),
    ("Microsoft.ContainerRegistry/registries/scopeMaps", &[Parent]),
    ("Microsoft.ContainerRegistry/registries/tokens", &[Parent]),
    ("Microsoft.ContainerRegistry/registries/webhooks", &[Parent]),
    ("Microsoft.ContainerRegistry/registries/replications", &[Parent]),
    // Event hubs
    ("Microsoft.EventHub/clusters", &[ResourceGroup]),
    ("Microsoft.EventHub/namespaces", &[ResourceGroup]),
    ("Microsoft.EventHub/namespaces/eventhubs", &[Parent]),
    (
        "Microsoft.EventHub/namespaces/eventhubs/consumergroups",
        &[Parent],
    ),
    // Storage
    ("Microsoft.Storage/storageAccounts", &[ResourceGroup]),
    ("Microsoft.Storage/storageAccounts/blobServices", &[Parent]),
    (
        "Microsoft.Storage/storageAccounts/blobServices/containers",
        &[Parent],
    ),
    // Networking, identity and compute
    ("Microsoft.Network/virtualNetworks", &[ResourceGroup]),
    ("Microsoft.Network/virtualNetworks/subnets", &[Parent]),
    ("Microsoft.KeyVault/vaults", &[ResourceGroup]),
    ("Microsoft.KeyVault/vaults/secrets", &[Parent]),
    (
        "Microsoft.ManagedIdentity/userAssignedIdentities",
        &[ResourceGroup],
    ),
    ("Microsoft.Web/serverfarms", &[ResourceGroup]),
    ("Microsoft.Web/sites", &[ResourceGroup]),
];

/// Resolves one table row into a registry entry.
pub(super) fn resource_def(name: &str, shapes: &[Shape]) -> Result<ResourceDef, RegistryError> {
    let resource_type =
        ResourceType::new(name).map_err(|err| RegistryError::InvalidResourceType {
            resource_type: name.to_string(),
            reason: err.to_string(),
        })?;

    let mut scopes = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let scope = match shape {
            Tenant => ParentScope::Tenant,
            ManagementGroup => ParentScope::ManagementGroup,
            Subscription => ParentScope::Subscription,
            ResourceGroup => ParentScope::ResourceGroup,
            Extension => ParentScope::Extension,
            Parent => resource_type
                .parent_type()
                .map(ParentScope::Resource)
                .ok_or_else(|| RegistryError::InvalidResourceType {
                    resource_type: name.to_string(),
                    reason: "only child types can be nested under a parent".to_string(),
                })?,
        };
        scopes.push(scope);
    }

    Ok(ResourceDef::new(resource_type, scopes))
}
