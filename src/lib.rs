//! Deckhand - deterministic slide-deck layout with PPTX export
//!
//! This library turns a structured deck description (titles, bullet points,
//! worked examples, optional illustrations and speaker notes) into a laid-out
//! presentation and writes it as an Office Open XML `.pptx` package.
//!
//! # Features
//!
//! - **Deck assembler**: pure, deterministic layout of a cover slide and one
//!   content slide per record, with right-to-left text by default
//! - **Shrink-to-fit**: every text box reports the font size at which its text
//!   fits, so long content never spills out of its frame
//! - **Graceful degradation**: a missing illustration becomes a grey "no image"
//!   placeholder instead of an error
//! - **PPTX writer**: minimal, valid PresentationML packages with speaker notes
//!   and embedded media
//! - **Upstream pipeline** (`fetch` feature): outline parsing, slide-count
//!   validation, export naming and order-preserving illustration fetching
//!
//! # Example - Assembling and saving a deck
//!
//! ```no_run
//! use deckhand::deck::{assemble, DeckSpec, LayoutConstants, SlideSpec};
//! use deckhand::ooxml::pptx::PresentationWriter;
//! use deckhand::pipeline::export_file_name;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = DeckSpec::new(
//!     "Linear Algebra",
//!     vec![SlideSpec::new("Vectors")
//!         .with_bullets(["Magnitude and direction", "Written as columns"])
//!         .with_examples(["(1, 2) + (3, 4) = (4, 6)"])],
//! );
//!
//! let deck = assemble(spec, &LayoutConstants::default());
//! PresentationWriter::new(&deck).save(export_file_name(&deck.title))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Left-to-right decks
//!
//! ```
//! use deckhand::deck::{assemble_with_direction, DeckSpec, ElementRole, LayoutConstants,
//!     SlideSpec, TextDirection};
//!
//! let constants = LayoutConstants::default();
//! let deck = assemble_with_direction(
//!     DeckSpec::new("Intro", vec![SlideSpec::new("Hello")]),
//!     &constants,
//!     TextDirection::LeftToRight,
//! );
//!
//! let placeholder = deck.slides[1].element(ElementRole::Placeholder).unwrap();
//! assert_eq!(placeholder.frame.x, constants.slide_width - constants.margin
//!     - constants.image_region_width);
//! ```

/// Common types and utilities shared across the crate
pub mod common;

/// Slide-deck model and layout
pub mod deck;

/// Office Open XML package output
pub mod ooxml;

/// Upstream preparation: outlines, slide counts, naming, illustrations
pub mod pipeline;

/// Configuration files
pub mod config;

/// Logging setup for the command-line tool
#[cfg(feature = "cli")]
pub mod logging;

// Re-export commonly used types
pub use common::{Error, RGBColor, Result};
pub use config::Config;
pub use deck::{Deck, DeckSpec, LayoutConstants, SlideSpec, assemble};
pub use ooxml::pptx::PresentationWriter;
