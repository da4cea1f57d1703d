//! Integration tests for resource id building.

use azurerm_resource_id::{build_resource_id, parse_resource_id, ParentScope, ResourceIdError};

const SUB: &str = "/subscriptions/12345678-1234-9876-4563-123456789012";
const RG: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1";
const REGISTRY: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry";
const LOWER_RG: &str = "/subscriptions/0000/resourcegroups/rg";
const LOWER_REGISTRY: &str =
    "/subscriptions/0000/resourcegroups/rg/providers/microsoft.containerregistry/registries/r";
const MGMT_GROUP: &str = "/providers/Microsoft.Management/managementGroups/myMgmtGroup";

struct Case {
    name: &'static str,
    parent_id: &'static str,
    type_at_version: &'static str,
    known_type: bool,
    expected_id: String,
}

fn assert_builds(case: &Case) {
    let actual = build_resource_id(case.name, case.parent_id, case.type_at_version)
        .unwrap_or_else(|err| {
            panic!(
                "expected {} under {:?} to build, got {err}",
                case.type_at_version, case.parent_id
            )
        });

    let (resource_type, api_version) = case.type_at_version.split_once('@').unwrap();
    assert_eq!(actual.azure_resource_id(), case.expected_id);
    assert_eq!(actual.api_version().as_ref(), api_version);
    assert_eq!(actual.resource_type().as_ref(), resource_type);
    assert_eq!(actual.name(), case.name);
    assert_eq!(actual.parent_id(), case.parent_id);
    assert_eq!(actual.is_known_type(), case.known_type);
}

fn assert_mismatch(parent_id: &str, type_at_version: &str) {
    let result = build_resource_id("test", parent_id, type_at_version);
    assert!(
        matches!(result, Err(ResourceIdError::ParentScopeMismatch { .. })),
        "{type_at_version} under {parent_id:?} should be a parent scope mismatch, got {result:?}"
    );
}

// ============================================================================
// Scope Shapes
// ============================================================================

#[test]
fn test_formatter_matches_url() {
    let url = format!("{RG}/providers/Microsoft.EventHub/clusters/cluster1");
    let id = build_resource_id("cluster1", RG, "Microsoft.EventHub/clusters@2020-12-01").unwrap();
    assert_eq!(id.azure_resource_id(), url);
    assert_eq!(id.id(), format!("{url}?api-version=2020-12-01"));
}

#[test]
fn test_tenant_scope() {
    assert_builds(&Case {
        name: "test",
        parent_id: "",
        type_at_version: "Microsoft.Management/managementGroups@2021-04-01",
        known_type: true,
        expected_id: "/providers/Microsoft.Management/managementGroups/test".to_string(),
    });
}

#[test]
fn test_subscription_scope() {
    assert_builds(&Case {
        name: "test",
        parent_id: SUB,
        type_at_version: "Microsoft.Resources/resourceGroups@2021-04-01",
        known_type: true,
        expected_id: format!("{SUB}/resourceGroups/test"),
    });
}

#[test]
fn test_management_group_scope() {
    assert_builds(&Case {
        name: "test",
        parent_id: "/providers/Microsoft.Management/managementGroups/myMgmtGroup",
        type_at_version: "Microsoft.Authorization/policyDefinitions@2021-06-01",
        known_type: true,
        expected_id: "/providers/Microsoft.Management/managementGroups/myMgmtGroup/providers/Microsoft.Authorization/policyDefinitions/test".to_string(),
    });
}

#[test]
fn test_resource_group_scope_top_level_resource() {
    assert_builds(&Case {
        name: "test",
        parent_id: RG,
        type_at_version: "Microsoft.ContainerRegistry/registries@2020-11-01-preview",
        known_type: true,
        expected_id: format!("{RG}/providers/Microsoft.ContainerRegistry/registries/test"),
    });
}

#[test]
fn test_resource_group_scope_child_resource() {
    assert_builds(&Case {
        name: "test",
        parent_id: REGISTRY,
        type_at_version: "Microsoft.ContainerRegistry/registries/scopeMaps@2020-11-01-preview",
        known_type: true,
        expected_id: format!("{REGISTRY}/scopeMaps/test"),
    });
}

#[test]
fn test_extension_scope() {
    assert_builds(&Case {
        name: "test",
        parent_id: REGISTRY,
        type_at_version: "Microsoft.CostManagement/reports@2018-08-01-preview",
        known_type: true,
        expected_id: format!("{REGISTRY}/providers/Microsoft.CostManagement/reports/test"),
    });
}

#[test]
fn test_ambiguous_type_under_resource_group() {
    assert_builds(&Case {
        name: "test",
        parent_id: RG,
        type_at_version: "Microsoft.CostManagement/reports@2018-08-01-preview",
        known_type: true,
        expected_id: format!("{RG}/providers/Microsoft.CostManagement/reports/test"),
    });
    let id = build_resource_id("test", RG, "Microsoft.CostManagement/reports@2018-08-01-preview")
        .unwrap();
    assert_eq!(id.scope(), &ParentScope::ResourceGroup);
}

#[test]
fn test_known_extension_only_type() {
    assert_builds(&Case {
        name: "test",
        parent_id: REGISTRY,
        type_at_version: "Microsoft.Insights/diagnosticSettings@2016-09-01",
        known_type: true,
        expected_id: format!("{REGISTRY}/providers/Microsoft.Insights/diagnosticSettings/test"),
    });
}

#[test]
fn test_unknown_type_under_resource_is_extension() {
    assert_builds(&Case {
        name: "test",
        parent_id: REGISTRY,
        type_at_version: "Microsoft.Foo/Bar@2016-09-01",
        known_type: false,
        expected_id: format!("{REGISTRY}/providers/Microsoft.Foo/Bar/test"),
    });
}

#[test]
fn test_unknown_child_type_extends_parent_chain() {
    assert_builds(&Case {
        name: "test",
        parent_id: REGISTRY,
        type_at_version: "Microsoft.ContainerRegistry/registries/foo@2020-11-01-preview",
        known_type: false,
        expected_id: format!("{REGISTRY}/foo/test"),
    });
}

#[test]
fn test_lower_case_pseudo_type_is_a_provider_resource() {
    let id = build_resource_id("rg", SUB, "microsoft.resources/resourcegroups@2021-04-01").unwrap();
    assert_eq!(
        id.azure_resource_id(),
        format!("{SUB}/providers/microsoft.resources/resourcegroups/rg")
    );
    assert_eq!(id.resource_type().as_ref(), "microsoft.resources/resourcegroups");
    assert!(!id.is_known_type());
}

#[test]
fn test_subscription_pseudo_type() {
    let id = build_resource_id(
        "12345678-1234-9876-4563-123456789012",
        "",
        "Microsoft.Resources/subscriptions@2021-04-01",
    )
    .unwrap();
    assert_eq!(id.azure_resource_id(), SUB);
    assert_eq!(id.scope(), &ParentScope::Tenant);
}

// ============================================================================
// Parent Scope Mismatches
// ============================================================================

#[test]
fn test_child_type_under_resource_group() {
    assert_mismatch(
        RG,
        "Microsoft.ContainerRegistry/registries/scopeMaps@2020-11-01-preview",
    );
}

#[test]
fn test_resource_group_type_under_subscription() {
    assert_mismatch(SUB, "Microsoft.ContainerRegistry/registries@2020-11-01-preview");
}

#[test]
fn test_tenant_type_under_subscription() {
    assert_mismatch(SUB, "Microsoft.Management/managementGroups@2021-04-01");
}

#[test]
fn test_subscription_type_at_tenant_root() {
    assert_mismatch("", "Microsoft.Resources/resourceGroups@2021-04-01");
}

#[test]
fn test_child_type_under_wrong_parent_type() {
    assert_mismatch(
        &format!("{RG}/providers/Microsoft.Web/sites/app"),
        "Microsoft.ContainerRegistry/registries/scopeMaps@2020-11-01-preview",
    );
}

#[test]
fn test_unknown_child_type_at_tenant_root() {
    assert_mismatch("", "Microsoft.Foo/bars/bazs@2024-01-01");
}

#[test]
fn test_extension_on_parent_of_same_type() {
    assert_mismatch(
        &format!("{RG}/providers/Microsoft.CostManagement/reports/r1"),
        "Microsoft.CostManagement/reports@2018-08-01-preview",
    );
}

#[test]
fn test_child_type_spelled_differently_from_parent() {
    assert_mismatch(
        LOWER_REGISTRY,
        "Microsoft.ContainerRegistry/registries/scopeMaps@2020-11-01-preview",
    );
}

#[test]
fn test_extension_only_type_under_management_group() {
    let result = build_resource_id(
        "d",
        MGMT_GROUP,
        "Microsoft.Insights/diagnosticSettings@2021-05-01",
    );
    assert!(matches!(
        result,
        Err(ResourceIdError::ParentScopeMismatch { ref expected, .. }) if expected == "extension"
    ));

    let parsed = parse_resource_id(&format!(
        "{MGMT_GROUP}/providers/Microsoft.Insights/diagnosticSettings/d?api-version=2021-05-01"
    ))
    .unwrap();
    assert_eq!(parsed.scope(), &ParentScope::ManagementGroup);
}

#[test]
fn test_mismatch_names_expected_shapes() {
    let err = build_resource_id(
        "test",
        SUB,
        "Microsoft.ContainerRegistry/registries@2020-11-01-preview",
    )
    .unwrap_err();
    assert!(err.to_string().contains("resource group"));
}

// ============================================================================
// Input Errors
// ============================================================================

#[test]
fn test_invalid_parent_id() {
    let result = build_resource_id(
        "test",
        "/providers/Microsoft.Management",
        "Microsoft.Authorization/policyDefinitions@2021-06-01",
    );
    assert!(result.is_err());
}

#[test]
fn test_malformed_type_reference() {
    for reference in [
        "Microsoft.EventHub/clusters",
        "Microsoft.EventHub/clusters@",
        "Microsoft.EventHub/clusters@2020-12-01@2021-01-01",
        "@2020-12-01",
    ] {
        assert!(
            matches!(
                build_resource_id("cluster1", RG, reference),
                Err(ResourceIdError::MalformedTypeReference { .. })
            ),
            "{reference:?} should be rejected"
        );
    }
}

#[test]
fn test_empty_name() {
    assert!(matches!(
        build_resource_id("", RG, "Microsoft.EventHub/clusters@2020-12-01"),
        Err(ResourceIdError::EmptyInput { field: "name" })
    ));
}

// ============================================================================
// Build/Parse Inverse
// ============================================================================

#[test]
fn test_built_ids_parse_back_to_same_fields() {
    let cases = [
        ("test", "", "Microsoft.Management/managementGroups@2021-04-01"),
        ("test", SUB, "Microsoft.Resources/resourceGroups@2021-04-01"),
        (
            "test",
            "/providers/Microsoft.Management/managementGroups/myMgmtGroup",
            "Microsoft.Authorization/policyDefinitions@2021-06-01",
        ),
        ("test", RG, "Microsoft.ContainerRegistry/registries@2020-11-01-preview"),
        (
            "test",
            REGISTRY,
            "Microsoft.ContainerRegistry/registries/scopeMaps@2020-11-01-preview",
        ),
        ("test", REGISTRY, "Microsoft.CostManagement/reports@2018-08-01-preview"),
        ("test", RG, "Microsoft.CostManagement/reports@2018-08-01-preview"),
        ("test", REGISTRY, "Microsoft.Foo/Bar@2016-09-01"),
        (
            "test",
            REGISTRY,
            "Microsoft.ContainerRegistry/registries/foo@2020-11-01-preview",
        ),
        ("test", LOWER_RG, "Microsoft.ContainerRegistry/registries@2020-11-01-preview"),
        (
            "test",
            LOWER_REGISTRY,
            "microsoft.containerregistry/registries/scopemaps@2020-11-01-preview",
        ),
        ("test", LOWER_REGISTRY, "Microsoft.CostManagement/reports@2018-08-01-preview"),
        ("rg", "/subscriptions/0000", "microsoft.resources/resourcegroups@2021-04-01"),
    ];

    for (name, parent_id, reference) in cases {
        let built = build_resource_id(name, parent_id, reference).unwrap();
        let parsed = parse_resource_id(&built.id()).unwrap();

        assert_eq!(parsed.name(), built.name(), "{reference}");
        assert_eq!(parsed.resource_type(), built.resource_type(), "{reference}");
        assert_eq!(parsed.parent_id(), built.parent_id(), "{reference}");
        assert_eq!(parsed.scope(), built.scope(), "{reference}");
        assert_eq!(parsed.is_known_type(), built.is_known_type(), "{reference}");
        assert_eq!(parsed, built, "{reference}");
    }
}
