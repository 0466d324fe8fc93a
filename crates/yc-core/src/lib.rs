//! # yc-core
//!
//! Core types and error definitions for yearcal.
//!
//! This crate provides the foundational building blocks shared by the other
//! crates in the workspace: the error hierarchy with its `ensure!`
//! macro, and plural selection for count labels.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use utilities::data_formatters::{decline, plural_form, PluralForm};
