//! # Azure Resource Manager resource identifiers
//!
//! Parses and builds the hierarchical identifiers used by the Azure Resource
//! Manager API. An identifier encodes a scope (tenant, management group,
//! subscription, resource group, or another resource), a typed resource
//! chain, a name and an API version.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`ResourceId`]: the resolved identifier record
//! - [`parse_resource_id`] / [`Registry::parse`]: identifier string to record
//! - [`build_resource_id`] / [`Registry::build`]: name, parent id and
//!   `type@version` to record
//! - [`Registry`]: the read-only table of known resource types and the parent
//!   scopes they admit, with a builtin catalog and JSON loading
//! - Validated newtypes for [`ApiVersion`], [`ResourceType`] and [`TypeReference`]
//!
//! ## Parsing
//!
//! ```rust
//! use azurerm_resource_id::{parse_resource_id, ParentScope};
//!
//! let id = parse_resource_id(
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry/scopeMaps/test?api-version=2020-11-01-preview",
//! )
//! .unwrap();
//!
//! assert_eq!(id.resource_type().as_ref(), "Microsoft.ContainerRegistry/registries/scopeMaps");
//! assert_eq!(id.name(), "test");
//! assert_eq!(
//!     id.parent_id(),
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry"
//! );
//! assert!(id.scope().is_child());
//! ```
//!
//! ## Building
//!
//! ```rust
//! use azurerm_resource_id::build_resource_id;
//!
//! let id = build_resource_id(
//!     "test",
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1",
//!     "Microsoft.CostManagement/reports@2018-08-01-preview",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     id.azure_resource_id(),
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.CostManagement/reports/test"
//! );
//! assert_eq!(id.api_version().as_ref(), "2018-08-01-preview");
//! ```
//!
//! ## Custom Registries
//!
//! ```rust
//! use azurerm_resource_id::Registry;
//!
//! let registry = Registry::builder()
//!     .merge(Registry::builtin())
//!     .merge_json(r#"{ "resourceDefinitions": [
//!         { "type": "Contoso.Widgets/widgets", "scopes": ["ResourceGroup"] }
//!     ] }"#)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let id = registry
//!     .build("w1", "/subscriptions/0000/resourceGroups/rg", "Contoso.Widgets/widgets@2024-01-01")
//!     .unwrap();
//! assert!(id.is_known_type());
//! ```
//!
//! ## Design Principles
//!
//! - **Syntax first**: the path shape alone decides the scope; the registry
//!   only attaches definitions and constrains what the builder accepts
//! - **No mutable global state**: the builtin registry is built once and is
//!   read-only; custom registries are passed by reference
//! - **Pure functions**: parse and build have no side effects and never
//!   return a partial record alongside an error
//! - **Thread-safe**: all types are `Send + Sync`

pub mod error;
pub mod id;
pub mod registry;
pub mod types;

// Re-export public types at crate root for convenience
pub use error::{RegistryError, ResourceIdError};
pub use id::{build_resource_id, parse_resource_id, validate_resource_id, ResourceId};
pub use registry::{ParentScope, Registry, RegistryBuilder, ResourceDef};
pub use types::{ApiVersion, ResourceType, TypeReference};
