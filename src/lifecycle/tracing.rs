//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for
//! the demo binary. Library code only emits events; it never installs a subscriber.
//!
//! ## What Gets Traced
//!
//! - **Builder steps**: every part added, with the product size after the add (`debug`)
//! - **Extraction**: size of the product handed over (`debug`)
//! - **Recipes**: a `construct` span per recipe run, with a summary event (`info`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Recipe summaries only
//! RUST_LOG=info cargo run
//!
//! # Every part and extraction
//! RUST_LOG=debug cargo run
//!
//! # Only the director
//! RUST_LOG=builder_recipe::director=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a full-featured run looks like:
//!
//! ```text
//! DEBUG construct: Adding part recipe=FullFeatured part=PartA1 size=1
//! DEBUG construct: Adding part recipe=FullFeatured part=PartB1 size=2
//! DEBUG construct: Adding part recipe=FullFeatured part=PartC1 size=3
//! INFO construct: Recipe applied recipe=FullFeatured steps=3
//! DEBUG Extracted product, builder reset size=3
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
