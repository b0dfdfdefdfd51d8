//! Pure data structures: the [`Product`] under construction and the [`Part`]s it is made of.

pub mod part;
pub mod product;

pub use part::*;
pub use product::*;
