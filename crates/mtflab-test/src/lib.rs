//! Shared test fixtures for mtflab crates.
//!
//! This crate provides sequence builders and a naive reference simulator
//! for testing. It does NOT depend on `mtflab-engine` or `mtflab-search`,
//! so those crates can cross-check themselves against it without circular
//! dependencies.
//!
//! - [`sequences`] - request-sequence builders
//! - [`reference`] - independent move-to-front simulator and enumerator
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! mtflab-test = { workspace = true }
//! ```

pub mod reference;
pub mod sequences;

use mtflab_core::Element;

// Re-export commonly used fixtures at crate root for convenience
pub use reference::{enumerate_sequences, reference_total_cost};
pub use sequences::{alternate, repeat, tile};

/// The five-element universe used throughout the analysis scenarios.
pub fn standard_universe() -> Vec<Element> {
    vec![0, 1, 2, 3, 4]
}
