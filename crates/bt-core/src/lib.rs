//! # bt-core
//!
//! Error definitions and shared aliases for businesstime.
//!
//! The arithmetic itself lives in `bt-time`; this crate only holds what every
//! other crate in the workspace agrees on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Fractional number of hours, as accepted by the duration operations.
pub type Hours = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
