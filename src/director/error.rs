//! Error types for the Director.

use thiserror::Error;

/// Errors returned when a director cannot reach its builder.
///
/// All of these are programming errors on the caller's side. They are reported
/// instead of silently skipping the recipe so callers and tests can match on them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectorError {
    /// A recipe ran before any builder was attached.
    #[error("No builder attached to director")]
    NoBuilderAttached,

    /// The attached builder has since been dropped by its owner.
    #[error("Attached builder was dropped")]
    BuilderDropped,

    /// The builder is already mutably borrowed elsewhere.
    #[error("Builder is busy: {0}")]
    BuilderBusy(String),
}

/// Error returned when a recipe name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown recipe: {0} (expected \"minimal\" or \"full\")")]
pub struct RecipeParseError(pub String);
