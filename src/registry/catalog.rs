//! JSON catalog documents for custom registries.
//!
//! ```json
//! {
//!   "resourceDefinitions": [
//!     { "type": "Microsoft.Foo/bars", "scopes": ["ResourceGroup", "Extension"] },
//!     { "type": "Microsoft.Foo/bars/bazs", "scopes": [{ "parent": "Microsoft.Foo/bars" }] },
//!     { "type": "Microsoft.Foo/bars/quxs" }
//!   ]
//! }
//! ```
//!
//! A child type without `scopes` is nested under its own parent chain.

use super::{ParentScope, ResourceDef};
use crate::error::RegistryError;
use crate::types::ResourceType;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    resource_definitions: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(rename = "type")]
    resource_type: String,
    #[serde(default)]
    scopes: Vec<ScopeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScopeEntry {
    Named(NamedScope),
    Parent { parent: String },
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum NamedScope {
    Tenant,
    ManagementGroup,
    Subscription,
    ResourceGroup,
    Extension,
}

impl From<NamedScope> for ParentScope {
    fn from(scope: NamedScope) -> Self {
        match scope {
            NamedScope::Tenant => Self::Tenant,
            NamedScope::ManagementGroup => Self::ManagementGroup,
            NamedScope::Subscription => Self::Subscription,
            NamedScope::ResourceGroup => Self::ResourceGroup,
            NamedScope::Extension => Self::Extension,
        }
    }
}

/// Parses a catalog document into resource definitions, in document order.
pub(super) fn parse_catalog(json: &str) -> Result<Vec<ResourceDef>, RegistryError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut defs = Vec::with_capacity(document.resource_definitions.len());

    for entry in document.resource_definitions {
        let resource_type = parse_type(&entry.resource_type)?;
        if !seen.insert(entry.resource_type.clone()) {
            return Err(RegistryError::DuplicateResourceType {
                resource_type: entry.resource_type,
            });
        }

        let scopes = entry
            .scopes
            .into_iter()
            .map(|scope| match scope {
                ScopeEntry::Named(named) => Ok(named.into()),
                ScopeEntry::Parent { parent } => parse_type(&parent).map(ParentScope::Resource),
            })
            .collect::<Result<Vec<_>, _>>()?;

        defs.push(ResourceDef::with_default_scopes(resource_type, scopes)?);
    }

    Ok(defs)
}

fn parse_type(resource_type: &str) -> Result<ResourceType, RegistryError> {
    ResourceType::new(resource_type).map_err(|err| RegistryError::InvalidResourceType {
        resource_type: resource_type.to_string(),
        reason: err.to_string(),
    })
}
