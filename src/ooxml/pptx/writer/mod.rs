//! Presentation writer components for PPTX.

pub mod pres;
pub(crate) mod relmap;
pub(crate) mod shape;
pub(crate) mod slide;

// Re-export main types
pub use pres::PresentationWriter;
