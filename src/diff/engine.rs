use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::DiffNode;

/// Compares two objects key by key over the sorted union of their key sets.
///
/// A key held by both sides recurses when both values are objects, even if
/// they are equal, so the formatters can keep descending into unchanged
/// subtrees. Equality is checked only after that, which makes an
/// object-to-scalar change a plain update.
pub(super) fn diff_maps(left: &Map<String, Value>, right: &Map<String, Value>) -> Vec<DiffNode> {
    let mut keys = BTreeSet::new();
    keys.extend(left.keys());
    keys.extend(right.keys());

    let mut nodes = Vec::with_capacity(keys.len());
    for key in keys {
        let node = match (left.get(key), right.get(key)) {
            (Some(Value::Object(left_map)), Some(Value::Object(right_map))) => {
                DiffNode::nested(key.as_str(), diff_maps(left_map, right_map))
            }
            (Some(left_value), Some(right_value)) if left_value == right_value => {
                DiffNode::unchanged(key.as_str(), left_value.clone())
            }
            (Some(left_value), Some(right_value)) => {
                DiffNode::updated(key.as_str(), left_value.clone(), right_value.clone())
            }
            (Some(left_value), None) => DiffNode::removed(key.as_str(), left_value.clone()),
            (None, Some(right_value)) => DiffNode::added(key.as_str(), right_value.clone()),
            // The union only holds keys present on at least one side.
            (None, None) => unreachable!(),
        };
        nodes.push(node);
    }

    nodes
}
