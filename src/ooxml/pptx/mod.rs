//! PowerPoint (.pptx) presentation output.
//!
//! A laid-out [`Deck`](crate::deck::Deck) is written as a PresentationML
//! package with one blank layout; every element carries its own absolute
//! position, so nothing depends on layout placeholders.
//!
//! ```rust,no_run
//! use deckhand::deck::{assemble, DeckSpec, LayoutConstants};
//! use deckhand::ooxml::pptx::PresentationWriter;
//!
//! let deck = assemble(DeckSpec::new("Deck", vec![]), &LayoutConstants::default());
//! PresentationWriter::new(&deck).save("deck.pptx")?;
//! # Ok::<(), deckhand::ooxml::OoxmlError>(())
//! ```

pub mod format;
pub mod template;
pub mod writer;

pub use format::ImageFormat;
pub use writer::PresentationWriter;
