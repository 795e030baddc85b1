//! Manifest tree definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved top-level manifest key naming the root directory prefix
pub const ROOT_DIR_KEY: &str = "root directory";

/// A node in the asset manifest tree
///
/// Manifests are JSON-shaped: every value is either a relative path string
/// or a nested mapping of names to further nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetNode {
    /// A relative asset path
    Path(String),
    /// A named group of child nodes
    Group(HashMap<String, AssetNode>),
}

impl AssetNode {
    /// Get a direct child by name, if this node is a group
    pub fn child(&self, name: &str) -> Option<&AssetNode> {
        match self {
            AssetNode::Group(children) => children.get(name),
            AssetNode::Path(_) => None,
        }
    }

    /// Get the leaf path value, if this node is a path
    pub fn as_path(&self) -> Option<&str> {
        match self {
            AssetNode::Path(path) => Some(path),
            AssetNode::Group(_) => None,
        }
    }

    /// Walk a dotted key through the tree to a leaf value
    ///
    /// Returns `None` if any segment is missing, a leaf is hit before the
    /// key is exhausted, or the key names a group. An empty-string leaf
    /// counts as unset rather than a valid resolution.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for segment in key.split('.') {
            node = node.child(segment)?;
        }
        node.as_path().filter(|path| !path.is_empty())
    }

    /// Collect every dotted leaf key in the tree with its value, sorted by key
    pub fn flatten(&self) -> Vec<(String, &str)> {
        let mut leaves = Vec::new();
        self.collect_leaves(String::new(), &mut leaves);
        leaves.sort_by(|a, b| a.0.cmp(&b.0));
        leaves
    }

    fn collect_leaves<'a>(&'a self, prefix: String, leaves: &mut Vec<(String, &'a str)>) {
        match self {
            AssetNode::Path(path) => leaves.push((prefix, path.as_str())),
            AssetNode::Group(children) => {
                for (name, child) in children {
                    let key = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    child.collect_leaves(key, leaves);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> AssetNode {
        serde_json::from_str(
            r#"{
                "root directory": "/assets/",
                "images": {
                    "logo": "logo.png",
                    "icons": {
                        "send": "icons/send.svg"
                    }
                },
                "sounds": {
                    "notify": "notify.ogg"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_untagged_deserialize() {
        let tree = sample_tree();
        assert!(matches!(tree, AssetNode::Group(_)));
        assert!(matches!(
            tree.child("images").unwrap(),
            AssetNode::Group(_)
        ));
        assert_eq!(
            tree.child(ROOT_DIR_KEY).unwrap().as_path(),
            Some("/assets/")
        );
    }

    #[test]
    fn test_lookup_nested_key() {
        let tree = sample_tree();
        assert_eq!(tree.lookup("images.logo"), Some("logo.png"));
        assert_eq!(tree.lookup("images.icons.send"), Some("icons/send.svg"));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let tree = sample_tree();
        assert_eq!(tree.lookup("images.missing"), None);
        assert_eq!(tree.lookup("videos.intro"), None);
    }

    #[test]
    fn test_lookup_group_is_not_a_leaf() {
        let tree = sample_tree();
        assert_eq!(tree.lookup("images"), None);
        assert_eq!(tree.lookup("images.icons"), None);
    }

    #[test]
    fn test_lookup_through_leaf_fails() {
        let tree = sample_tree();
        assert_eq!(tree.lookup("images.logo.extra"), None);
    }

    #[test]
    fn test_lookup_empty_leaf_is_unset() {
        let tree: AssetNode = serde_json::from_str(r#"{"images": {"logo": ""}}"#).unwrap();
        assert_eq!(tree.lookup("images.logo"), None);
    }

    #[test]
    fn test_flatten_yields_every_leaf_once() {
        let tree = sample_tree();
        let leaves = tree.flatten();
        let keys: Vec<&str> = leaves.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "images.icons.send",
                "images.logo",
                "root directory",
                "sounds.notify"
            ]
        );
    }

    #[test]
    fn test_non_string_leaf_fails_to_parse() {
        let result: std::result::Result<AssetNode, _> =
            serde_json::from_str(r#"{"images": {"logo": 42}}"#);
        assert!(result.is_err());
    }
}
