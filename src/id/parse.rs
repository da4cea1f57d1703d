//! Identifier string to [`ResourceId`].

use super::classify::classify;
use super::segments::SegmentPath;
use super::ResourceId;
use crate::error::ResourceIdError;
use crate::registry::Registry;
use crate::types::ApiVersion;

const API_VERSION_QUERY: &str = "?api-version=";

impl Registry {
    /// Parses `{path}?api-version={version}` into a [`ResourceId`].
    ///
    /// The scope is classified from the path shape; this registry only
    /// attaches the matching [`ResourceDef`](crate::ResourceDef). Unknown
    /// types parse successfully with no definition.
    ///
    /// # Errors
    ///
    /// - [`ResourceIdError::EmptyInput`] if `raw` is empty
    /// - [`ResourceIdError::MalformedIdentifier`] if the `api-version` query is
    ///   missing or empty, or the path breaks the segment grammar
    ///
    /// # Example
    ///
    /// ```rust
    /// use azurerm_resource_id::{ParentScope, Registry};
    ///
    /// let id = Registry::builtin()
    ///     .parse("/subscriptions/0000/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry/scopeMaps/test?api-version=2020-11-01-preview")
    ///     .unwrap();
    ///
    /// assert_eq!(id.resource_type().as_ref(), "Microsoft.ContainerRegistry/registries/scopeMaps");
    /// assert_eq!(id.name(), "test");
    /// assert_eq!(
    ///     id.parent_id(),
    ///     "/subscriptions/0000/resourceGroups/group1/providers/Microsoft.ContainerRegistry/registries/myRegistry"
    /// );
    /// assert!(id.resource_def().is_some());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<ResourceId, ResourceIdError> {
        if raw.is_empty() {
            return Err(ResourceIdError::EmptyInput { field: "id" });
        }
        let (path, api_version) = raw.split_once(API_VERSION_QUERY).ok_or_else(|| {
            ResourceIdError::malformed(raw, "missing 'api-version' query parameter")
        })?;
        self.resolve(path, api_version, raw)
    }

    /// Parses a path and an API version supplied separately.
    ///
    /// Equivalent to [`parse`](Self::parse) on `{url}?api-version={api_version}`.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_url(&self, url: &str, api_version: &str) -> Result<ResourceId, ResourceIdError> {
        if url.is_empty() {
            return Err(ResourceIdError::EmptyInput { field: "url" });
        }
        let raw = format!("{url}{API_VERSION_QUERY}{api_version}");
        self.resolve(url, api_version, &raw)
    }

    fn resolve(
        &self,
        path: &str,
        api_version: &str,
        raw: &str,
    ) -> Result<ResourceId, ResourceIdError> {
        if api_version.is_empty() {
            return Err(ResourceIdError::malformed(raw, "'api-version' is empty"));
        }
        let api_version = ApiVersion::new(api_version)
            .map_err(|err| ResourceIdError::malformed(raw, err.to_string()))?;

        let segments = SegmentPath::parse(path, raw)?;
        let class = classify(&segments, raw)?;

        let resource_def = self.lookup(class.resource_type.as_ref()).cloned();
        match &resource_def {
            Some(def) if !def.admits(&class.scope) => {
                tracing::warn!(
                    resource_type = %class.resource_type,
                    scope = %class.scope,
                    admitted = ?def.scopes(),
                    "Resource id resolves to a scope the registry does not list for its type"
                );
            }
            _ => {}
        }

        let parent_id = segments.prefix(class.parent_end);
        tracing::debug!(
            resource_type = %class.resource_type,
            scope = %class.scope,
            parent_id = %parent_id,
            known_type = resource_def.is_some(),
            "Parsed resource id"
        );

        Ok(ResourceId {
            api_version,
            azure_resource_id: path.to_string(),
            name: class.name.to_string(),
            parent_id,
            resource_type: class.resource_type,
            scope: class.scope,
            resource_def,
        })
    }
}
