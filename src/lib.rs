//! Structural comparison of configuration files.
//!
//! Two JSON or YAML documents are parsed into [`serde_json::Value`] trees,
//! compared key by key into a [`diff::Diff`] tree, and rendered with one of
//! the output formats in [`format`].

pub mod diff;
pub mod format;
pub mod input;
pub mod path;
pub mod resolve;

pub use diff::{Diff, DiffNode, diff};
pub use format::Format;
pub use input::read_file;
