//! Dotted-key resolution over a loaded manifest

use crate::source::ManifestSource;
use crate::types::{AssetNode, ROOT_DIR_KEY};
use pathstone_core::Result;

/// Resolves dotted asset keys to root-prefixed path strings
///
/// Holds at most one loaded manifest at a time. `load_config` must succeed
/// before `get_asset` can resolve anything; querying earlier is a soft
/// failure that warns and returns the empty string.
#[derive(Debug)]
pub struct AssetResolver {
    source: ManifestSource,
    document: Option<AssetNode>,
    root_dir: String,
}

impl AssetResolver {
    /// Create a resolver for the manifest named by `locator`
    pub fn new(locator: &str) -> Self {
        Self::with_source(ManifestSource::from_locator(locator))
    }

    /// Create a resolver over an already-classified source
    pub fn with_source(source: ManifestSource) -> Self {
        Self {
            source,
            document: None,
            root_dir: String::new(),
        }
    }

    /// Fetch and parse the manifest, replacing any previously loaded one
    ///
    /// The previous document is dropped before the fetch starts, so a failed
    /// reload leaves the resolver unloaded rather than serving stale paths.
    /// Returns the loaded document for direct inspection.
    pub fn load_config(&mut self) -> Result<&AssetNode> {
        self.document = None;
        self.root_dir.clear();

        let text = match self.source.fetch() {
            Ok(text) => text,
            Err(e) => {
                log::error!(
                    "Failed to fetch asset manifest from {}: {}",
                    self.source.locator(),
                    e
                );
                return Err(e);
            }
        };

        let document: AssetNode = match serde_json::from_str(&text) {
            Ok(document) => document,
            Err(e) => {
                log::error!(
                    "Failed to parse asset manifest from {}: {}",
                    self.source.locator(),
                    e
                );
                return Err(e.into());
            }
        };

        self.root_dir = document
            .child(ROOT_DIR_KEY)
            .and_then(|node| node.as_path())
            .unwrap_or("")
            .to_string();

        Ok(self.document.insert(document))
    }

    /// Resolve a dotted key to a root-prefixed path
    ///
    /// Lookup failures are non-fatal: a missing key, a key naming a group,
    /// or a query before `load_config` all warn and return the empty string.
    /// Callers treat `""` as "no asset for this key".
    pub fn get_asset(&self, key: &str) -> String {
        let Some(document) = &self.document else {
            log::warn!("Asset manifest not loaded; call load_config() before get_asset()");
            return String::new();
        };

        match document.lookup(key) {
            Some(relative) => format!("{}{}", self.root_dir, relative),
            None => {
                log::warn!("No asset configured for key '{}'", key);
                String::new()
            }
        }
    }

    /// Walk a dotted key to its unprefixed relative path
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.document.as_ref()?.lookup(key)
    }

    /// The root directory prefix extracted at load time
    pub fn root_dir(&self) -> &str {
        &self.root_dir
    }

    /// Whether a manifest is currently loaded
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// The loaded manifest, if any
    pub fn document(&self) -> Option<&AssetNode> {
        self.document.as_ref()
    }
}
