mod error;
mod parser;

use std::fmt;

pub use error::PathError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Represents a field in an object.
    Field(String),

    /// Represents an index in an array.
    Index(usize),
}

/// A parsed path into a document, e.g. `/common/setting6` or `/servers/0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spath {
    segments: Vec<Segment>,
}

impl Spath {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }
}

impl<'a> IntoIterator for &'a Spath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl TryFrom<&str> for Spath {
    type Error = PathError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let (rest, path) = parser::parse_path(raw).map_err(|e| match e {
            nom::Err::Error(ve) | nom::Err::Failure(ve) => error::convert_verbose_error(raw, ve),
            nom::Err::Incomplete(_) => PathError::invalid_syntax(raw.len(), "incomplete input"),
        })?;

        if !rest.is_empty() {
            return Err(error::trailing_input_error(raw, rest));
        }

        Ok(path)
    }
}

impl fmt::Display for Spath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Field(name) => {
                    write!(f, "/{}", name.replace('~', "~0").replace('/', "~1"))?
                }
                Segment::Index(index) => write!(f, "/{}", index)?,
            }
        }
        Ok(())
    }
}
