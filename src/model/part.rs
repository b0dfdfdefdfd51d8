use serde::{Deserialize, Serialize};
use std::fmt;

/// A named unit of construction.
///
/// Parts are opaque labels: two parts are the same part if their labels match,
/// and nothing else about them is inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Part(String);

impl Part {
    /// Creates a part from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label this part was created with.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Part {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Part {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// The standard parts a [`PartBuilder`](crate::builder::PartBuilder) knows how to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    A,
    B,
    C,
}

impl PartKind {
    /// The label written into a product when this kind of part is built.
    pub const fn label(self) -> &'static str {
        match self {
            PartKind::A => "PartA1",
            PartKind::B => "PartB1",
            PartKind::C => "PartC1",
        }
    }
}

impl From<PartKind> for Part {
    fn from(kind: PartKind) -> Self {
        Self::new(kind.label())
    }
}
