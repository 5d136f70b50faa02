mod engine;
mod error;
mod node;

use std::ops::Deref;

use serde::Serialize;
use serde_json::{Map, Value};

pub use error::{DiffError, Side};
pub use node::DiffNode;

/// The computed difference between two documents, one node per key.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diff(Vec<DiffNode>);

impl Diff {
    pub fn new(nodes: Vec<DiffNode>) -> Self {
        Diff(nodes)
    }
}

impl Deref for Diff {
    type Target = Vec<DiffNode>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Compares two documents and returns their diff tree.
///
/// Both documents must be objects at the top level; configuration files with
/// a scalar or sequence root are rejected.
pub fn diff(left: &Value, right: &Value) -> Result<Diff, DiffError> {
    let left = root_object(left, Side::Left)?;
    let right = root_object(right, Side::Right)?;

    Ok(Diff(engine::diff_maps(left, right)))
}

fn root_object(doc: &Value, side: Side) -> Result<&Map<String, Value>, DiffError> {
    doc.as_object()
        .ok_or_else(|| DiffError::unexpected_root(side, doc))
}
