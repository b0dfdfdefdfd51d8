use super::Part;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label that prefixes every [`Product::list_parts`] rendering.
pub const LISTING_PREFIX: &str = "Product parts: ";

/// Separator placed between part labels in a listing.
pub const LISTING_SEPARATOR: &str = ", ";

/// The object under construction.
///
/// A product is an ordered sequence of [`Part`]s. The order in which parts were
/// added is the order in which they are listed. Parts can only be appended.
///
/// # Example
///
/// ```
/// use builder_recipe::model::Product;
///
/// let mut product = Product::new();
/// product.add_part("PartA1");
/// product.add_part("PartC1");
/// assert_eq!(product.list_parts(), "Product parts: PartA1, PartC1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    parts: Vec<Part>,
}

impl Product {
    /// Creates an empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part. Duplicates are kept.
    pub fn add_part(&mut self, part: impl Into<Part>) {
        self.parts.push(part.into());
    }

    /// Renders the parts in insertion order.
    ///
    /// The listing is [`LISTING_PREFIX`] followed by the labels joined with
    /// [`LISTING_SEPARATOR`]. An empty product renders as the bare prefix.
    pub fn list_parts(&self) -> String {
        let labels: Vec<&str> = self.parts.iter().map(Part::label).collect();
        format!("{}{}", LISTING_PREFIX, labels.join(LISTING_SEPARATOR))
    }

    /// The parts added so far, in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts added so far.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no part has been added yet.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_parts())
    }
}
