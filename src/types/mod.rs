//! Validated value types shared by the parser, builder and registry.
//!
//! - [`ApiVersion`]: the `api-version` carried by every identifier
//! - [`ResourceType`]: a `Namespace/type[/childType...]` chain
//! - [`TypeReference`]: the builder's `type@version` input

mod resource_type;
mod version;

pub use resource_type::{ResourceType, TypeReference};
pub use version::ApiVersion;
