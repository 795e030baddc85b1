//! Pathstone Asset - Manifest-driven asset path resolution
//!
//! This crate loads a JSON-shaped asset manifest from a file or URL and
//! resolves dotted lookup keys (e.g. `images.logo`) to path strings prefixed
//! with the manifest's root directory.

mod resolver;
mod source;
mod types;

pub use resolver::AssetResolver;
pub use source::ManifestSource;
pub use types::{AssetNode, ROOT_DIR_KEY};
