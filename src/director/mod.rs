//! Orchestration of standard construction recipes over an attached builder.
//!
//! The [`Director`] knows *what* to build (see [`Recipe`]); the builder knows
//! *how*. The director never owns the builder, never resets it and never
//! extracts a product on the caller's behalf.

pub mod error;
pub mod recipe;

pub use error::*;
pub use recipe::*;

use crate::builder::{Builder, PartBuilder};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

/// Runs fixed sequences of builder steps against a builder it does not own.
///
/// # Association
/// The caller owns the builder as `Rc<RefCell<B>>` and hands the director a
/// reference to it, either at construction ([`Director::with_builder`]) or later
/// ([`Director::set_builder`]). The director keeps only a [`Weak`] handle, so it
/// can neither keep the builder alive nor dispose of it. Several directors may
/// share one builder.
///
/// # Accumulation
/// Recipes do not reset the builder between calls. Running the minimal recipe
/// and then the full recipe without extracting in between leaves
/// `PartA1, PartA1, PartB1, PartC1` on the same product. Callers may also mix in
/// manual builder calls before the single final extraction.
///
/// # Example
///
/// ```
/// use builder_recipe::builder::Builder;
/// use builder_recipe::director::Director;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let builder = Rc::new(RefCell::new(Builder::new()));
/// let director = Director::with_builder(&builder);
///
/// director.build_full_featured_product().unwrap();
/// let product = builder.borrow_mut().extract_and_reset();
/// assert_eq!(product.list_parts(), "Product parts: PartA1, PartB1, PartC1");
/// ```
#[derive(Debug)]
pub struct Director<B: PartBuilder = Builder> {
    builder: Option<Weak<RefCell<B>>>,
}

impl<B: PartBuilder> Default for Director<B> {
    fn default() -> Self {
        Self { builder: None }
    }
}

impl<B: PartBuilder> Director<B> {
    /// Creates a director with no builder attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a director already attached to `builder`.
    pub fn with_builder(builder: &Rc<RefCell<B>>) -> Self {
        Self {
            builder: Some(Rc::downgrade(builder)),
        }
    }

    /// Attaches `builder`, replacing any previous association.
    pub fn set_builder(&mut self, builder: &Rc<RefCell<B>>) {
        if self.builder.is_some() {
            debug!("Replacing attached builder");
        }
        self.builder = Some(Rc::downgrade(builder));
    }

    /// Removes the builder association. The builder itself is untouched.
    pub fn detach(&mut self) {
        self.builder = None;
    }

    /// Whether a builder is attached and still alive.
    pub fn has_builder(&self) -> bool {
        self.builder
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Issues exactly one step: part A.
    pub fn build_minimal_viable_product(&self) -> Result<(), DirectorError> {
        self.construct(Recipe::MinimalViable)
    }

    /// Issues parts A, B and C, in that order.
    pub fn build_full_featured_product(&self) -> Result<(), DirectorError> {
        self.construct(Recipe::FullFeatured)
    }

    /// Issues every step of `recipe` on the attached builder.
    ///
    /// # Errors
    /// - [`DirectorError::NoBuilderAttached`] if no builder was ever attached
    ///   (or it was detached).
    /// - [`DirectorError::BuilderDropped`] if the builder's owner dropped it.
    /// - [`DirectorError::BuilderBusy`] if the builder is mutably borrowed
    ///   somewhere else.
    ///
    /// On error no step has been issued.
    #[tracing::instrument(skip(self))]
    pub fn construct(&self, recipe: Recipe) -> Result<(), DirectorError> {
        let builder = self
            .builder
            .as_ref()
            .ok_or(DirectorError::NoBuilderAttached)?
            .upgrade()
            .ok_or(DirectorError::BuilderDropped)?;

        let mut builder = builder
            .try_borrow_mut()
            .map_err(|e| DirectorError::BuilderBusy(e.to_string()))?;

        for &kind in recipe.steps() {
            builder.build(kind);
        }

        info!(steps = recipe.steps().len(), "Recipe applied");
        Ok(())
    }
}
