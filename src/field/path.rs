//! Field path used to address validation errors.
//!
//! Example: spec -> filters -> 0 -> parser -> parse  =>  "spec.filters[0].parser.parse"
//!
//! Paths are values: `child`, `index` and `key` return an extended copy and
//! leave the receiver untouched, so sibling branches of a recursive walk never
//! see each other's segments.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
    Key(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn new(root: &str) -> Self {
        Self(vec![Segment::Field(root.to_string())])
    }

    pub fn child(&self, name: &str) -> Self {
        self.extend(Segment::Field(name.to_string()))
    }

    pub fn index(&self, i: usize) -> Self {
        self.extend(Segment::Index(i))
    }

    pub fn key(&self, k: &str) -> Self {
        self.extend(Segment::Key(k.to_string()))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    fn extend(&self, seg: Segment) -> Self {
        let mut segs = self.0.clone();
        segs.push(seg);
        Self(segs)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                Segment::Field(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Field(name) => write!(f, ".{}", name)?,
                Segment::Index(idx) => write!(f, "[{}]", idx)?,
                Segment::Key(k) => write!(f, "[{}]", k)?,
            }
        }
        Ok(())
    }
}
