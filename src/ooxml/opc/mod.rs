//! Open Packaging Convention building blocks used by the package writer.

pub mod constants;
pub mod rel;

pub use rel::{Relationship, Relationships};
