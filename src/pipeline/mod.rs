//! Upstream preparation of a deck.
//!
//! Everything that happens before layout: validating the requested slide
//! count, turning a generated outline into a [`DeckSpec`], fetching
//! illustrations and choosing the export file name.
//!
//! ```rust,no_run
//! # #[cfg(feature = "fetch")]
//! # async fn run() -> deckhand::Result<()> {
//! use deckhand::pipeline::{prepare_deck, DeckOutline, DirectorySource};
//!
//! let outline = DeckOutline::load("outline.json")?;
//! let spec = prepare_deck(outline, &DirectorySource::new("images"), 1).await;
//! # let _ = spec;
//! # Ok(())
//! # }
//! ```

pub mod count;
pub mod naming;
pub mod outline;

#[cfg(feature = "fetch")]
pub mod illustrate;

pub use count::SlideCount;
pub use naming::{export_file_name, sanitize_file_stem};
pub use outline::{DeckOutline, IllustrationRequest, SlideOutline};

#[cfg(feature = "fetch")]
pub use illustrate::{DirectorySource, IllustrationSource, fetch_illustrations};

#[cfg(feature = "fetch")]
use crate::deck::DeckSpec;

/// Fetch the outline's illustrations and build the assembler input.
///
/// Fetch failures never fail the deck; the affected slides simply get the
/// "no image" placeholder.
#[cfg(feature = "fetch")]
pub async fn prepare_deck<S>(outline: DeckOutline, source: &S, workers: usize) -> DeckSpec
where
    S: IllustrationSource + ?Sized,
{
    let requests = outline.illustration_requests();
    let illustrations =
        fetch_illustrations(source, &requests, outline.slides.len(), workers).await;
    outline.into_deck_spec(illustrations)
}
