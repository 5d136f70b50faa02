use serde_json::Value;

use crate::diff::{Diff, DiffNode};

const INDENT_WIDTH: usize = 4;

// Markers sit two columns to the left of the keys they annotate:
//
// {
//     common: {
//       + follow: false
//         setting1: Value 1
//     }
// }
pub(super) fn render(diff: &Diff) -> String {
    let mut lines = Vec::new();
    render_nodes(diff, 1, &mut lines);

    format!("{{\n{}\n}}", lines.join("\n"))
}

fn render_nodes(nodes: &[DiffNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            DiffNode::Unchanged { key, value } => {
                lines.push(format!("{}{key}: {}", pad(depth), render_value(value, depth)));
            }
            DiffNode::Added { key, value } => {
                lines.push(format!(
                    "{}+ {key}: {}",
                    marker_pad(depth),
                    render_value(value, depth)
                ));
            }
            DiffNode::Removed { key, value } => {
                lines.push(format!(
                    "{}- {key}: {}",
                    marker_pad(depth),
                    render_value(value, depth)
                ));
            }
            DiffNode::Updated { key, old, new } => {
                lines.push(format!(
                    "{}- {key}: {}",
                    marker_pad(depth),
                    render_value(old, depth)
                ));
                lines.push(format!(
                    "{}+ {key}: {}",
                    marker_pad(depth),
                    render_value(new, depth)
                ));
            }
            DiffNode::Nested { key, children } => {
                if children.is_empty() {
                    lines.push(format!("{}{key}: {{}}", pad(depth)));
                    continue;
                }
                lines.push(format!("{}{key}: {{", pad(depth)));
                render_nodes(children, depth + 1, lines);
                lines.push(format!("{}}}", pad(depth)));
            }
        }
    }
}

// Objects expand over multiple lines at the depth they appear; arrays and
// anything inside them render inline.
fn render_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let mut out = String::from("{\n");
            for (key, inner) in map {
                out.push_str(&format!(
                    "{}{key}: {}\n",
                    pad(depth + 1),
                    render_value(inner, depth + 1)
                ));
            }
            out.push_str(&format!("{}}}", pad(depth)));
            out
        }
        other => render_inline(other),
    }
}

fn render_inline(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let items: Vec<_> = items.iter().map(render_inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(key, inner)| format!("{key}: {}", render_inline(inner)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn pad(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}

fn marker_pad(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH - 2)
}
