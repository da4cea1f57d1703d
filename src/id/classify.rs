//! Scope classification.
//!
//! Classification is driven by syntax alone: the position of the last
//! `providers` keyword decides where the parent ends and which shape applies.
//! The registry is consulted afterwards, only to attach the matching
//! [`ResourceDef`](crate::ResourceDef) and to flag shapes it does not list.
//!
//! | Path ends with                                   | Scope             |
//! |--------------------------------------------------|-------------------|
//! | `/subscriptions/{sub}`                           | tenant            |
//! | `/subscriptions/{sub}/resourceGroups/{rg}`       | subscription      |
//! | `/providers/{ns}/{type}/{name}` at the root      | tenant            |
//! | the same under `/subscriptions/{sub}`            | subscription      |
//! | the same under a resource group                  | resource group    |
//! | the same under a management group resource       | management group  |
//! | the same under any other resource                | extension         |
//! | `.../{type}/{name}/{childType}/{childName}`      | child resource    |

use super::segments::{is_management_group, ProviderGroup, SegmentPath};
use crate::error::ResourceIdError;
use crate::registry::ParentScope;
use crate::types::ResourceType;

pub(crate) const SUBSCRIPTION_TYPE: &str = "Microsoft.Resources/subscriptions";
pub(crate) const RESOURCE_GROUP_TYPE: &str = "Microsoft.Resources/resourceGroups";

/// Where a path splits into parent and leaf, and what the leaf is.
#[derive(Debug)]
pub(crate) struct Classification<'a> {
    pub(crate) resource_type: ResourceType,
    pub(crate) name: &'a str,
    /// Number of leading segments that form the parent id.
    pub(crate) parent_end: usize,
    pub(crate) scope: ParentScope,
}

/// Classifies a validated path.
pub(crate) fn classify<'a>(
    path: &SegmentPath<'a>,
    id: &str,
) -> Result<Classification<'a>, ResourceIdError> {
    let len = path.segments.len();
    let name = path.segments[len - 1];

    let Some(&group) = path.groups.last() else {
        let (resource_type, parent_end, scope) = if path.resource_group {
            (RESOURCE_GROUP_TYPE, 2, ParentScope::Subscription)
        } else {
            (SUBSCRIPTION_TYPE, 0, ParentScope::Tenant)
        };
        return Ok(Classification {
            resource_type: ResourceType::new(resource_type)?,
            name,
            parent_end,
            scope,
        });
    };

    let resource_type = leaf_type(path, group, id)?;

    let (parent_end, scope) = if group.pairs > 1 {
        let parent_type = resource_type.parent_type().ok_or_else(|| {
            ResourceIdError::malformed(id, "child resource without a parent type")
        })?;
        (len - 2, ParentScope::Resource(parent_type))
    } else if path.groups.len() > 1 {
        let parent = &path.segments[..group.start];
        let scope = if is_management_group(parent) {
            ParentScope::ManagementGroup
        } else {
            ParentScope::Extension
        };
        (group.start, scope)
    } else if path.resource_group {
        (group.start, ParentScope::ResourceGroup)
    } else if path.subscription {
        (group.start, ParentScope::Subscription)
    } else {
        (group.start, ParentScope::Tenant)
    };

    Ok(Classification {
        resource_type,
        name,
        parent_end,
        scope,
    })
}

fn leaf_type(
    path: &SegmentPath<'_>,
    group: ProviderGroup,
    id: &str,
) -> Result<ResourceType, ResourceIdError> {
    let mut chain = path.namespace(group).to_string();
    for segment in path.type_segments(group) {
        chain.push('/');
        chain.push_str(segment);
    }
    ResourceType::new(chain).map_err(|err| ResourceIdError::malformed(id, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUB: &str = "/subscriptions/12345678-1234-9876-4563-123456789012";

    fn run(path: &str) -> (String, String, String, ParentScope) {
        let parsed = SegmentPath::parse(path, path).unwrap();
        let class = classify(&parsed, path).unwrap();
        (
            class.resource_type.to_string(),
            class.name.to_string(),
            parsed.prefix(class.parent_end),
            class.scope,
        )
    }

    #[test]
    fn test_bare_subscription_is_tenant_scoped() {
        let (rt, name, parent, scope) = run(SUB);
        assert_eq!(rt, SUBSCRIPTION_TYPE);
        assert_eq!(name, "12345678-1234-9876-4563-123456789012");
        assert_eq!(parent, "");
        assert_eq!(scope, ParentScope::Tenant);
    }

    #[test]
    fn test_resource_group_is_subscription_scoped() {
        let (rt, name, parent, scope) = run(&format!("{SUB}/resourceGroups/test"));
        assert_eq!(rt, RESOURCE_GROUP_TYPE);
        assert_eq!(name, "test");
        assert_eq!(parent, SUB);
        assert_eq!(scope, ParentScope::Subscription);
    }

    #[test]
    fn test_subscription_scoped_provider_resource() {
        let (rt, _, parent, scope) = run(&format!(
            "{SUB}/providers/Microsoft.Authorization/policyDefinitions/p"
        ));
        assert_eq!(rt, "Microsoft.Authorization/policyDefinitions");
        assert_eq!(parent, SUB);
        assert_eq!(scope, ParentScope::Subscription);
    }

    #[test]
    fn test_management_group_scope() {
        let (rt, _, parent, scope) = run(
            "/providers/Microsoft.Management/managementGroups/mg/providers/Microsoft.Authorization/policyDefinitions/test",
        );
        assert_eq!(rt, "Microsoft.Authorization/policyDefinitions");
        assert_eq!(parent, "/providers/Microsoft.Management/managementGroups/mg");
        assert_eq!(scope, ParentScope::ManagementGroup);
    }

    #[test]
    fn test_extension_on_child_resource() {
        let base = format!(
            "{SUB}/resourceGroups/g/providers/Microsoft.ContainerRegistry/registries/r/scopeMaps/s"
        );
        let (rt, _, parent, scope) =
            run(&format!("{base}/providers/Microsoft.Insights/diagnosticSettings/d"));
        assert_eq!(rt, "Microsoft.Insights/diagnosticSettings");
        assert_eq!(parent, base);
        assert_eq!(scope, ParentScope::Extension);
    }

    #[test]
    fn test_child_of_extension_resource() {
        let base = format!("{SUB}/resourceGroups/g/providers/Microsoft.Web/sites/app");
        let (rt, _, parent, scope) = run(&format!(
            "{base}/providers/Microsoft.Foo/bars/b/bazs/z"
        ));
        assert_eq!(rt, "Microsoft.Foo/bars/bazs");
        assert_eq!(
            parent,
            format!("{base}/providers/Microsoft.Foo/bars/b")
        );
        assert!(matches!(scope, ParentScope::Resource(t) if t.as_ref() == "Microsoft.Foo/bars"));
    }
}
