//! Common types and utilities shared by the assembler and the package writer.

// Submodule declarations
pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RGBColor;
pub use error::{Error, Result};
