use serde::Serialize;
use serde_json::Value;

/// One entry in the diff tree, keyed by the property name it describes.
///
/// Serializes with a `state` tag so the `json` output format is
/// self-describing:
///
/// `{ "state": "added", "key": "follow", "value": false }`
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DiffNode {
    Added {
        key: String,
        value: Value,
    },
    Removed {
        key: String,
        value: Value,
    },
    Updated {
        key: String,
        #[serde(rename = "oldValue")]
        old: Value,
        #[serde(rename = "newValue")]
        new: Value,
    },
    Unchanged {
        key: String,
        value: Value,
    },
    Nested {
        key: String,
        children: Vec<DiffNode>,
    },
}

impl DiffNode {
    pub fn added(key: impl Into<String>, value: Value) -> Self {
        DiffNode::Added {
            key: key.into(),
            value,
        }
    }

    pub fn removed(key: impl Into<String>, value: Value) -> Self {
        DiffNode::Removed {
            key: key.into(),
            value,
        }
    }

    pub fn updated(key: impl Into<String>, old: Value, new: Value) -> Self {
        DiffNode::Updated {
            key: key.into(),
            old,
            new,
        }
    }

    pub fn unchanged(key: impl Into<String>, value: Value) -> Self {
        DiffNode::Unchanged {
            key: key.into(),
            value,
        }
    }

    pub fn nested(key: impl Into<String>, children: Vec<DiffNode>) -> Self {
        DiffNode::Nested {
            key: key.into(),
            children,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            DiffNode::Added { key, .. }
            | DiffNode::Removed { key, .. }
            | DiffNode::Updated { key, .. }
            | DiffNode::Unchanged { key, .. }
            | DiffNode::Nested { key, .. } => key,
        }
    }
}
