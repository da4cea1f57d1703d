//! Path segment grammar.
//!
//! An identifier path is a sequence of `(keyword, value)` pairs:
//!
//! ```text
//! [/subscriptions/{sub} [/resourceGroups/{rg}]] (/providers/{namespace} (/{type}/{name})+)*
//! ```
//!
//! A path with neither a subscription nor a `providers` group is rejected.
//! Keywords match ASCII case-insensitively; every segment keeps its original
//! text.

use crate::error::ResourceIdError;

const SUBSCRIPTIONS: &str = "subscriptions";
const RESOURCE_GROUPS: &str = "resourceGroups";
const PROVIDERS: &str = "providers";

/// One `providers/{namespace}/{type}/{name}...` group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ProviderGroup {
    /// Index of the `providers` keyword.
    pub(crate) start: usize,
    /// Number of `{type}/{name}` pairs after the namespace.
    pub(crate) pairs: usize,
}

/// A path split into segments and checked against the grammar.
#[derive(Debug)]
pub(crate) struct SegmentPath<'a> {
    pub(crate) segments: Vec<&'a str>,
    pub(crate) subscription: bool,
    pub(crate) resource_group: bool,
    pub(crate) groups: Vec<ProviderGroup>,
}

impl<'a> SegmentPath<'a> {
    /// Splits `path` into segments and validates the keyword structure.
    ///
    /// Errors name `id` as the offending identifier so callers can report the
    /// full input rather than the bare path.
    pub(crate) fn parse(path: &'a str, id: &str) -> Result<Self, ResourceIdError> {
        if path.is_empty() {
            return Err(ResourceIdError::malformed(id, "path is empty"));
        }
        if path.contains('?') {
            return Err(ResourceIdError::malformed(
                id,
                "unexpected query string in path",
            ));
        }
        let Some(rest) = path.strip_prefix('/') else {
            return Err(ResourceIdError::malformed(id, "path must start with '/'"));
        };

        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ResourceIdError::malformed(id, "path contains an empty segment"));
        }
        if segments.len() % 2 != 0 {
            return Err(ResourceIdError::malformed(
                id,
                format!(
                    "expected keyword/value pairs but found {} segments",
                    segments.len()
                ),
            ));
        }

        let mut path = Self {
            segments,
            subscription: false,
            resource_group: false,
            groups: Vec::new(),
        };
        path.check_grammar(id)?;
        Ok(path)
    }

    fn check_grammar(&mut self, id: &str) -> Result<(), ResourceIdError> {
        let len = self.segments.len();
        let mut pos = 0;

        if keyword(self.segments[0], SUBSCRIPTIONS) {
            self.subscription = true;
            pos = 2;
            if pos < len && keyword(self.segments[pos], RESOURCE_GROUPS) {
                self.resource_group = true;
                pos += 2;
            }
        }

        while pos < len {
            let segment = self.segments[pos];
            if !keyword(segment, PROVIDERS) {
                return Err(ResourceIdError::malformed(
                    id,
                    format!("unexpected keyword '{segment}' at segment {}", pos + 1),
                ));
            }

            let start = pos;
            pos += 2;
            let mut pairs = 0;
            while pos < len && !keyword(self.segments[pos], PROVIDERS) {
                pairs += 1;
                pos += 2;
            }
            if pairs == 0 {
                return Err(ResourceIdError::malformed(
                    id,
                    format!(
                        "provider namespace '{}' is not followed by a resource type and name",
                        self.segments[start + 1]
                    ),
                ));
            }
            self.groups.push(ProviderGroup { start, pairs });
        }

        Ok(())
    }

    /// Returns the resource provider namespace of a group.
    pub(crate) fn namespace(&self, group: ProviderGroup) -> &'a str {
        self.segments[group.start + 1]
    }

    /// Returns the type segments of a group, in order.
    pub(crate) fn type_segments(&self, group: ProviderGroup) -> impl Iterator<Item = &'a str> + '_ {
        (0..group.pairs).map(move |k| self.segments[group.start + 2 + 2 * k])
    }

    /// Returns `true` for a bare `/subscriptions/{sub}` path.
    pub(crate) fn is_subscription(&self) -> bool {
        self.subscription && !self.resource_group && self.groups.is_empty()
    }

    /// Returns `true` for a bare `/subscriptions/{sub}/resourceGroups/{rg}` path.
    pub(crate) fn is_resource_group(&self) -> bool {
        self.resource_group && self.groups.is_empty()
    }

    /// Returns `true` for `/providers/Microsoft.Management/managementGroups/{mg}`.
    pub(crate) fn is_management_group(&self) -> bool {
        is_management_group(&self.segments)
    }

    /// Joins the first `end` segments back into a path; empty for `end == 0`.
    pub(crate) fn prefix(&self, end: usize) -> String {
        if end == 0 {
            return String::new();
        }
        format!("/{}", self.segments[..end].join("/"))
    }
}

/// Returns `true` if `segments` is exactly a management group resource path.
pub(crate) fn is_management_group(segments: &[&str]) -> bool {
    matches!(
        segments,
        [providers, namespace, kind, _]
            if keyword(providers, PROVIDERS)
                && namespace.eq_ignore_ascii_case("Microsoft.Management")
                && kind.eq_ignore_ascii_case("managementGroups")
    )
}

fn keyword(segment: &str, expected: &str) -> bool {
    segment.eq_ignore_ascii_case(expected)
}
