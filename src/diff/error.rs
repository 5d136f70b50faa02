use std::fmt;

use serde_json::Value;

use crate::resolve::value_type_desc;

/// Which of the two input documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "first"),
            Side::Right => write!(f, "second"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DiffError {
    #[error("the {side} document must be an object at the top level, found {found}")]
    UnexpectedRoot { side: Side, found: String },
}

impl DiffError {
    pub fn unexpected_root(side: Side, found: &Value) -> Self {
        DiffError::UnexpectedRoot {
            side,
            found: value_type_desc(found).to_string(),
        }
    }
}
