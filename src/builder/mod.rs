//! Staged assembly of a [`Product`] with retrieve-and-reset extraction.

pub mod traits;

pub use traits::*;

use crate::model::{Part, PartKind, Product};
use tracing::debug;

/// Accumulates parts into exactly one in-progress [`Product`].
///
/// A builder always owns a product. It starts empty, grows with every
/// `build_*` call, and is swapped for a fresh empty product by
/// [`Builder::extract_and_reset`]. There is no terminal state: the same builder
/// can run any number of construction sessions.
///
/// # Example
///
/// ```
/// use builder_recipe::builder::Builder;
///
/// let mut builder = Builder::new();
/// builder.build_part_a().build_part_c();
///
/// let product = builder.extract_and_reset();
/// assert_eq!(product.list_parts(), "Product parts: PartA1, PartC1");
/// assert!(builder.product().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    product: Product,
}

impl Builder {
    /// Creates a builder holding an empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary named part to the in-progress product.
    pub fn build_part(&mut self, part: impl Into<Part>) -> &mut Self {
        let part = part.into();
        debug!(part = %part, size = self.product.len() + 1, "Adding part");
        self.product.add_part(part);
        self
    }

    /// Appends the standard part A (`PartA1`).
    pub fn build_part_a(&mut self) -> &mut Self {
        self.build_part(PartKind::A)
    }

    /// Appends the standard part B (`PartB1`).
    pub fn build_part_b(&mut self) -> &mut Self {
        self.build_part(PartKind::B)
    }

    /// Appends the standard part C (`PartC1`).
    pub fn build_part_c(&mut self) -> &mut Self {
        self.build_part(PartKind::C)
    }

    /// Read-only view of the product being assembled. Does not reset.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Hands over the accumulated product and installs a new, empty one.
    ///
    /// # Side Effects
    /// The builder's internal product is replaced. Parts built after this call
    /// never show up in the returned product, and calling this twice in a row
    /// yields an empty product the second time.
    pub fn extract_and_reset(&mut self) -> Product {
        let product = std::mem::take(&mut self.product);
        debug!(size = product.len(), "Extracted product, builder reset");
        product
    }
}

impl PartBuilder for Builder {
    fn build_part_a(&mut self) {
        Builder::build_part_a(self);
    }

    fn build_part_b(&mut self) {
        Builder::build_part_b(self);
    }

    fn build_part_c(&mut self) {
        Builder::build_part_c(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_starts_empty() {
        let builder = Builder::new();
        assert!(builder.product().is_empty());
    }

    #[test]
    fn test_extract_swaps_in_fresh_product() {
        let mut builder = Builder::new();
        builder.build_part_b();

        let first = builder.extract_and_reset();
        let second = builder.extract_and_reset();

        assert_eq!(first.list_parts(), "Product parts: PartB1");
        assert!(second.is_empty());
    }

    #[test]
    fn test_trait_dispatch_matches_inherent_steps() {
        let mut via_trait = Builder::new();
        PartBuilder::build(&mut via_trait, PartKind::C);
        PartBuilder::build(&mut via_trait, PartKind::A);

        let mut direct = Builder::new();
        direct.build_part_c().build_part_a();

        assert_eq!(via_trait.extract_and_reset(), direct.extract_and_reset());
    }

    #[test]
    fn test_custom_part_names_are_accepted() {
        let mut builder = Builder::new();
        builder.build_part("spoiler").build_part(String::from("spoiler"));

        let product = builder.extract_and_reset();
        assert_eq!(product.list_parts(), "Product parts: spoiler, spoiler");
    }
}
