//! Derive macros shared across the calculator modules.

pub use derive_more::Display;
