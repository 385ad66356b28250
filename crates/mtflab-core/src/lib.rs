//! mtflab Core - Core types for list-update analysis
//!
//! This crate provides the fundamental abstractions for mtflab:
//! - [`ListState`] for the current ordering of a self-adjusting list
//! - [`Cost`] for per-access and aggregate access costs
//! - [`AccessRecord`] for per-request trace entries
//! - [`AccessError`] for caller contract violations

pub mod cost;
pub mod error;
pub mod list;
pub mod record;

#[cfg(test)]
mod tests;

pub use cost::Cost;
pub use error::{AccessError, Result};
pub use list::{Element, ListState};
pub use record::AccessRecord;
