//! ARM API version strings.
//!
//! This module provides the [`ApiVersion`] newtype carried by every
//! [`ResourceId`](crate::ResourceId).

use crate::error::ResourceIdError;
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An ARM API version, such as `2021-04-01` or `2020-11-01-preview`.
///
/// Resource providers publish dated versions, optionally followed by a
/// channel suffix (`-preview`, `-beta`, `-privatepreview`). The value is kept
/// verbatim; only the empty string and strings that would corrupt the
/// `api-version` query parameter are rejected.
///
/// # Ordering
///
/// Dated versions order by date, with the stable release of a date sorting
/// before its previews. Undated versions sort after all dated ones,
/// lexicographically.
///
/// # Example
///
/// ```rust
/// use azurerm_resource_id::ApiVersion;
///
/// let version: ApiVersion = "2020-11-01-preview".parse().unwrap();
/// assert!(version.is_preview());
/// assert_eq!(version.as_ref(), "2020-11-01-preview");
///
/// let stable = ApiVersion::new("2020-11-01").unwrap();
/// assert!(stable < version);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    const DATE_LEN: usize = "YYYY-MM-DD".len();

    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::InvalidApiVersion`] if the version is empty
    /// or contains whitespace or URL delimiters.
    pub fn new(version: impl Into<String>) -> Result<Self, ResourceIdError> {
        let version = version.into();
        if version.is_empty() || !Self::is_valid_version(&version) {
            return Err(ResourceIdError::InvalidApiVersion { version });
        }
        Ok(Self(version))
    }

    /// Returns the release date encoded in the version, if any.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        let date = self.0.get(..Self::DATE_LEN)?;
        match self.0.as_bytes().get(Self::DATE_LEN) {
            None | Some(b'-') => NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            Some(_) => None,
        }
    }

    /// Returns `true` for dated versions with a channel suffix.
    ///
    /// ```rust
    /// use azurerm_resource_id::ApiVersion;
    ///
    /// assert!(ApiVersion::new("2018-08-01-preview").unwrap().is_preview());
    /// assert!(!ApiVersion::new("2021-04-01").unwrap().is_preview());
    /// ```
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.date().is_some() && self.0.len() > Self::DATE_LEN
    }

    fn is_valid_version(s: &str) -> bool {
        !s.chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '&' | '#' | '/' | '='))
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.date(), other.date()) {
            (Some(a), Some(b)) => a
                .cmp(&b)
                .then_with(|| self.is_preview().cmp(&other.is_preview()))
                .then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
