#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Builder Recipe
//!
//! > **Staged, resettable object construction in Rust.**
//!
//! This crate demonstrates the Builder pattern with a separate Director: the
//! builder accumulates parts into one product, the director knows which fixed
//! sequences of steps make up a standard product, and the caller decides when
//! to take the finished product out.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **How vs. What**: [`Builder`](builder::Builder) knows how to add a part.
//!   [`Director`](director::Director) knows which parts, in which order.
//! - **Retrieve-and-reset**: [`extract_and_reset`](builder::Builder::extract_and_reset)
//!   hands the product over and leaves a fresh empty one behind. It is a
//!   side-effecting operation, not a getter, and its signature says so (`&mut self`).
//! - **Non-owning orchestration**: the director holds a `Weak` handle to a
//!   builder owned by the caller. It never creates, resets, extracts from or
//!   drops that builder.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Builder and product operations cannot fail. The only failure is running a
//! recipe on a director whose builder is missing, which is reported as a
//! [`DirectorError`](director::DirectorError) rather than silently ignored.
//!
//! ### 2. Concurrency Model
//! None. Everything is single-threaded and synchronous; the director/builder
//! association uses `Rc`/`RefCell`.
//!
//! ### 3. Observability
//! `tracing` events for every part added, every extraction and every recipe run.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Product`](model::Product) and [`Part`](model::Part).
//! - [`builder`]: [`Builder`](builder::Builder) and the [`PartBuilder`](builder::PartBuilder) steps trait.
//! - [`director`]: [`Director`](director::Director), [`Recipe`](director::Recipe) and errors.
//! - [`lifecycle`]: tracing setup for binaries.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use builder_recipe::builder::Builder;
//! use builder_recipe::director::Director;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let builder = Rc::new(RefCell::new(Builder::new()));
//! let director = Director::with_builder(&builder);
//!
//! // Standard recipe, then an extra manual step, then one extraction.
//! director.build_minimal_viable_product().unwrap();
//! builder.borrow_mut().build_part_c();
//!
//! let product = builder.borrow_mut().extract_and_reset();
//! assert_eq!(product.list_parts(), "Product parts: PartA1, PartC1");
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Default scenario
//! RUST_LOG=info cargo run
//!
//! # Run named recipes, one product each
//! cargo run -- full minimal
//! ```

pub mod builder;
pub mod director;
pub mod lifecycle;
pub mod model;
