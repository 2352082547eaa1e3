//! Slide-deck layout.
//!
//! The assembler turns a [`DeckSpec`] (titles, bullets, worked examples,
//! optional illustration and speaker notes per slide) into a [`Deck`] of
//! positioned elements. Layout is a pure function of the input and the
//! [`LayoutConstants`]; nothing here performs I/O.
//!
//! # Example
//!
//! ```rust
//! use deckhand::deck::{assemble, DeckSpec, ElementRole, LayoutConstants, SlideSpec};
//!
//! let spec = DeckSpec::new(
//!     "Vectors",
//!     vec![SlideSpec::new("Intro").with_bullets(["a", "b"])],
//! );
//! let deck = assemble(spec, &LayoutConstants::default());
//!
//! assert_eq!(deck.slide_count(), 2);
//! assert!(deck.slides[1].element(ElementRole::Placeholder).is_some());
//! ```

// Submodule declarations
mod assemble;
pub mod fit;
mod layout;
mod model;
mod spec;

// Re-exports
pub use assemble::{
    COVER_CAPTION, EXAMPLES_LABEL, NO_IMAGE_CAPTION, assemble, assemble_with_direction,
    try_assemble,
};
pub use layout::{Geometry, LayoutConstants};
pub use model::{
    Alignment, Deck, Element, ElementContent, ElementKind, ElementRole, ListStyle, Picture, Rect,
    ShapeFill, Slide, SlideKind, TextBlock, TextDirection, TextFit, TextStyle,
};
pub use spec::{DeckSpec, Illustration, SlideSpec};
