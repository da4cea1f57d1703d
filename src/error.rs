//! Error types for resource identifier parsing and building.
//!
//! [`ResourceIdError`] covers everything that can go wrong when turning an
//! identifier string into a [`ResourceId`](crate::ResourceId) or back.
//! [`RegistryError`] is reserved for assembling a custom
//! [`Registry`](crate::Registry) from a catalog document.
//!
//! # Error Handling
//!
//! Every failure is a deterministic validation failure. Nothing is retried and
//! no partial record is ever returned alongside an error.
//!
//! # Example
//!
//! ```rust
//! use azurerm_resource_id::{parse_resource_id, ResourceIdError};
//!
//! let result = parse_resource_id("");
//! assert!(matches!(result, Err(ResourceIdError::EmptyInput { field: "id" })));
//! ```

use thiserror::Error;

/// Errors that can occur while parsing or building a resource identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// A required input was empty.
    #[error("The {field} cannot be empty.")]
    EmptyInput {
        /// Which input was empty (`"id"`, `"name"`, ...).
        field: &'static str,
    },

    /// The identifier does not follow the ARM path grammar or lacks an API version.
    #[error("Malformed resource id '{id}': {reason}")]
    MalformedIdentifier {
        /// The identifier that was provided.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A `type@version` reference could not be split or its type is invalid.
    #[error("Malformed resource type reference '{reference}': {reason}. Expected format: 'Namespace/type@version'.")]
    MalformedTypeReference {
        /// The reference that was provided.
        reference: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The parent id does not have a shape the resource type admits.
    #[error("Parent id '{parent_id}' is not a valid parent for '{resource_type}'. Expected a parent of scope: {expected}.")]
    ParentScopeMismatch {
        /// The parent id that was provided.
        parent_id: String,
        /// The resource type being built.
        resource_type: String,
        /// The admissible parent shapes, in registry order.
        expected: String,
    },

    /// An API version string was rejected.
    #[error("Invalid API version '{version}'. Expected a non-empty value such as '2021-04-01' or '2020-11-01-preview'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}

impl ResourceIdError {
    pub(crate) fn malformed(id: &str, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_type(reference: &str, reason: impl Into<String>) -> Self {
        Self::MalformedTypeReference {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while assembling a [`Registry`](crate::Registry).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("Invalid resource catalog: {reason}")]
    InvalidCatalog {
        /// The deserialization error message.
        reason: String,
    },

    /// A catalog entry names an invalid resource type.
    #[error("Invalid resource type '{resource_type}' in catalog: {reason}")]
    InvalidResourceType {
        /// The rejected type string.
        resource_type: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A top-level resource type was declared without any admissible scope.
    #[error("Resource type '{resource_type}' declares no admissible parent scope.")]
    NoAdmissibleScopes {
        /// The type with an empty scope list.
        resource_type: String,
    },

    /// The same resource type was declared twice.
    #[error("Resource type '{resource_type}' is declared more than once.")]
    DuplicateResourceType {
        /// The duplicated type.
        resource_type: String,
    },
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidCatalog {
            reason: err.to_string(),
        }
    }
}
