//! Generated deck outlines.
//!
//! An outline is the structured content description produced upstream (by a
//! person or a generator): a deck title and one record per slide, each with an
//! optional description of the illustration to fetch for it.
use crate::common::Result;
use crate::deck::{DeckSpec, Illustration, SlideSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::count::SlideCount;

/// Deck-level outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOutline {
    pub title: String,
    pub slides: Vec<SlideOutline>,
}

/// One slide of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideOutline {
    pub title: String,
    /// Required; an empty list is fine
    pub bullets: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
}

/// A single illustration to fetch, keyed by slide position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllustrationRequest {
    /// Zero-based slide index within the outline
    pub index: usize,
    pub prompt: String,
}

impl DeckOutline {
    /// Parse an outline from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an outline file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Keep at most `count` slides.
    pub fn truncate(&mut self, count: SlideCount) {
        self.slides.truncate(count.get());
    }

    /// Illustrations to fetch, one per slide that describes one.
    ///
    /// Slides whose prompt is missing or blank are skipped.
    pub fn illustration_requests(&self) -> Vec<IllustrationRequest> {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| {
                let prompt = slide.image_prompt.as_deref()?.trim();
                (!prompt.is_empty()).then(|| IllustrationRequest {
                    index,
                    prompt: prompt.to_string(),
                })
            })
            .collect()
    }

    /// Build the assembler input.
    ///
    /// `illustrations` is indexed like the outline's slides; missing entries
    /// mean "no illustration".
    pub fn into_deck_spec(self, mut illustrations: Vec<Option<Illustration>>) -> DeckSpec {
        illustrations.resize(self.slides.len(), None);

        let slides = self
            .slides
            .into_iter()
            .zip(illustrations)
            .map(|(outline, illustration)| {
                let mut slide = SlideSpec::new(outline.title)
                    .with_bullets(outline.bullets)
                    .with_examples(outline.examples);
                if let Some(illustration) = illustration {
                    slide = slide.with_illustration(illustration);
                }
                if let Some(notes) = outline.speaker_notes {
                    slide = slide.with_speaker_notes(notes);
                }
                slide
            })
            .collect();

        DeckSpec::new(self.title, slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    const OUTLINE: &str = r#"{
        "title": "Vectors",
        "slides": [
            {"title": "Intro", "bullets": ["a", "b"], "image_prompt": "arrows"},
            {"title": "Sum", "bullets": [], "examples": ["1+1"], "image_prompt": "  "},
            {"title": "Dot", "bullets": ["c"], "speaker_notes": "remember"}
        ]
    }"#;

    #[test]
    fn test_parse_defaults() {
        let outline = DeckOutline::from_json(OUTLINE).unwrap();
        assert_eq!(outline.slides.len(), 3);
        assert!(outline.slides[0].examples.is_empty());
        assert_eq!(outline.slides[1].examples, vec!["1+1"]);
        assert_eq!(outline.slides[2].speaker_notes.as_deref(), Some("remember"));
    }

    #[test]
    fn test_missing_bullets_is_rejected() {
        let err = DeckOutline::from_json(r#"{"title":"t","slides":[{"title":"x"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Outline(_)));
    }

    #[test]
    fn test_requests_skip_blank_prompts() {
        let outline = DeckOutline::from_json(OUTLINE).unwrap();
        let requests = outline.illustration_requests();
        assert_eq!(
            requests,
            vec![IllustrationRequest {
                index: 0,
                prompt: "arrows".to_string()
            }]
        );
    }

    #[test]
    fn test_into_deck_spec() {
        let mut outline = DeckOutline::from_json(OUTLINE).unwrap();
        outline.truncate(SlideCount::new(2).unwrap());

        let spec = outline.into_deck_spec(vec![]);
        assert_eq!(spec.title, "Vectors");
        assert_eq!(spec.slides.len(), 2);
        assert!(spec.slides.iter().all(|s| s.illustration.is_none()));
        assert_eq!(spec.slides[1].examples, vec!["1+1"]);
    }
}
