//! Deck assembly: from [`DeckSpec`] to a laid-out [`Deck`].

use super::fit::{contain, fit_text};
use super::layout::{Geometry, LayoutConstants};
use super::model::{
    Alignment, Deck, Element, ElementContent, ElementRole, ListStyle, Picture, Rect, ShapeFill,
    Slide, SlideKind, TextBlock, TextDirection, TextStyle,
};
use super::spec::{DeckSpec, SlideSpec};
use crate::common::color::palette;
use crate::common::{RGBColor, Result};

/// Caption under the deck title on the cover slide.
pub const COVER_CAPTION: &str = "Created with Deckhand";
/// Caption drawn over the placeholder when a slide has no illustration.
pub const NO_IMAGE_CAPTION: &str = "no image";
/// Label above the numbered examples list.
pub const EXAMPLES_LABEL: &str = "Examples:";

const COVER_TITLE_SIZE: f64 = 40.0;
const COVER_CAPTION_SIZE: f64 = 18.0;
const TITLE_SIZE: f64 = 32.0;
const BULLETS_SIZE: f64 = 20.0;
const PLACEHOLDER_CAPTION_SIZE: f64 = 16.0;
const EXAMPLES_LABEL_SIZE: f64 = 18.0;
const EXAMPLES_LIST_SIZE: f64 = 16.0;

/// Lay out a right-to-left deck.
///
/// Pure and deterministic: the same input always produces the same geometry
/// and element order. `constants` must satisfy [`LayoutConstants::validate`];
/// use [`try_assemble`] when they come from outside the program.
pub fn assemble(spec: DeckSpec, constants: &LayoutConstants) -> Deck {
    assemble_with_direction(spec, constants, TextDirection::RightToLeft)
}

/// Validate `constants`, then [`assemble`].
pub fn try_assemble(spec: DeckSpec, constants: &LayoutConstants) -> Result<Deck> {
    constants.validate()?;
    Ok(assemble(spec, constants))
}

/// Lay out a deck in the given reading direction.
///
/// For left-to-right decks the two content columns swap sides and text is
/// aligned to the left edge.
pub fn assemble_with_direction(
    spec: DeckSpec,
    constants: &LayoutConstants,
    direction: TextDirection,
) -> Deck {
    debug_assert!(constants.validate().is_ok(), "layout constants must be validated");

    let geometry = Geometry::compute(constants, direction);
    let builder = SlideBuilder {
        geometry: &geometry,
        direction,
    };

    let DeckSpec { title, slides } = spec;
    tracing::debug!(title = %title, content_slides = slides.len(), ?direction, "assembling deck");

    let mut out = Vec::with_capacity(slides.len() + 1);
    out.push(builder.cover(&title));
    out.extend(slides.into_iter().enumerate().map(|(index, slide)| {
        tracing::trace!(index, title = %slide.title, "laying out slide");
        builder.content(slide)
    }));

    Deck {
        title,
        width: geometry.slide_width,
        height: geometry.slide_height,
        slides: out,
    }
}

struct SlideBuilder<'a> {
    geometry: &'a Geometry,
    direction: TextDirection,
}

impl SlideBuilder<'_> {
    fn cover(&self, title: &str) -> Slide {
        let g = self.geometry;
        let elements = vec![
            self.text(
                ElementRole::CoverTitle,
                g.cover_title,
                vec![title.to_string()],
                ListStyle::Plain,
                style(COVER_TITLE_SIZE, palette::HEADING, Alignment::Center, true),
            ),
            self.text(
                ElementRole::CoverCaption,
                g.cover_caption,
                vec![COVER_CAPTION.to_string()],
                ListStyle::Plain,
                style(COVER_CAPTION_SIZE, palette::MUTED, Alignment::Center, false),
            ),
        ];

        Slide {
            kind: SlideKind::Cover,
            background: palette::COVER_BACKGROUND,
            elements,
            notes: None,
        }
    }

    fn content(&self, slide: SlideSpec) -> Slide {
        let g = self.geometry;
        let leading = self.direction.leading_alignment();
        let SlideSpec {
            title,
            bullets,
            examples,
            illustration,
            speaker_notes,
        } = slide;

        let mut elements = Vec::with_capacity(5);
        elements.push(self.text(
            ElementRole::Title,
            g.title_band,
            vec![title],
            ListStyle::Plain,
            style(TITLE_SIZE, palette::HEADING, leading, true),
        ));

        match illustration {
            Some(illustration) => {
                let placement = contain(&g.image_column, illustration.dimensions());
                elements.push(Element {
                    role: ElementRole::Illustration,
                    frame: g.image_column,
                    direction: self.direction,
                    style: style(BULLETS_SIZE, palette::BODY, Alignment::Center, false),
                    content: ElementContent::Image(Picture {
                        illustration,
                        placement,
                    }),
                });
            },
            None => {
                elements.push(Element {
                    role: ElementRole::Placeholder,
                    frame: g.image_column,
                    direction: self.direction,
                    style: style(BULLETS_SIZE, palette::PLACEHOLDER_FILL, Alignment::Center, false),
                    content: ElementContent::Shape(ShapeFill {
                        fill: palette::PLACEHOLDER_FILL,
                    }),
                });
                elements.push(self.text(
                    ElementRole::PlaceholderCaption,
                    g.image_column,
                    vec![NO_IMAGE_CAPTION.to_string()],
                    ListStyle::Plain,
                    style(PLACEHOLDER_CAPTION_SIZE, palette::MUTED, Alignment::Center, false),
                ));
            },
        }

        elements.push(self.text(
            ElementRole::Bullets,
            g.text_column,
            bullets,
            ListStyle::Bulleted,
            style(BULLETS_SIZE, palette::BODY, leading, false),
        ));

        if !examples.is_empty() {
            elements.push(self.text(
                ElementRole::ExamplesLabel,
                g.examples_label,
                vec![EXAMPLES_LABEL.to_string()],
                ListStyle::Plain,
                style(EXAMPLES_LABEL_SIZE, palette::HEADING, leading, true),
            ));
            elements.push(self.text(
                ElementRole::ExamplesList,
                g.examples_list,
                examples,
                ListStyle::Numbered,
                style(EXAMPLES_LIST_SIZE, palette::BODY, leading, false),
            ));
        }

        Slide {
            kind: SlideKind::Content,
            background: palette::CONTENT_BACKGROUND,
            elements,
            notes: speaker_notes,
        }
    }

    fn text(
        &self,
        role: ElementRole,
        frame: Rect,
        paragraphs: Vec<String>,
        list: ListStyle,
        style: TextStyle,
    ) -> Element {
        let fit = fit_text(&paragraphs, &frame, style.font_size, list.marker_indent());

        Element {
            role,
            frame,
            direction: self.direction,
            style,
            content: ElementContent::Text(TextBlock {
                paragraphs,
                list,
                fit,
            }),
        }
    }
}

fn style(font_size: f64, color: RGBColor, alignment: Alignment, bold: bool) -> TextStyle {
    TextStyle {
        font_size,
        color,
        alignment,
        bold,
    }
}
