use serde_json::Value;

use crate::diff::{Diff, DiffNode};

pub(super) fn render(diff: &Diff) -> String {
    let mut lines = Vec::new();
    let mut trail = Vec::new();
    walk(diff, &mut trail, &mut lines);

    lines.join("\n")
}

fn walk(nodes: &[DiffNode], trail: &mut Vec<String>, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            DiffNode::Added { key, value } => lines.push(format!(
                "Property '{}' was added with value: {}",
                property(trail, key),
                render_value(value)
            )),
            DiffNode::Removed { key, .. } => {
                lines.push(format!("Property '{}' was removed", property(trail, key)));
            }
            DiffNode::Updated { key, old, new } => lines.push(format!(
                "Property '{}' was updated. From {} to {}",
                property(trail, key),
                render_value(old),
                render_value(new)
            )),
            DiffNode::Unchanged { .. } => {}
            DiffNode::Nested { key, children } => {
                trail.push(key.clone());
                walk(children, trail, lines);
                trail.pop();
            }
        }
    }
}

fn property(trail: &[String], key: &str) -> String {
    if trail.is_empty() {
        key.to_string()
    } else {
        format!("{}.{key}", trail.join("."))
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => "[complex value]".to_string(),
        Value::String(text) => format!("'{text}'"),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
