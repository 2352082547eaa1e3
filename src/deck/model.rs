//! Layout-resolved output of the assembler.
//!
//! A [`Deck`] owns its [`Slide`]s and each slide owns its [`Element`]s. Nothing
//! is shared and nothing is mutated after assembly.

use super::spec::Illustration;
use crate::common::RGBColor;
use serde::Serialize;

/// Axis-aligned rectangle in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn right(&self) -> i64 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside `self` (edges may touch).
    pub const fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// A finished presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub title: String,
    /// Slide width in EMU
    pub width: i64,
    /// Slide height in EMU
    pub height: i64,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Content slides, in input order.
    pub fn content_slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter().filter(|s| s.kind == SlideKind::Content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Cover,
    Content,
}

/// A slide: positioned elements plus optional speaker notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub kind: SlideKind,
    pub background: RGBColor,
    pub elements: Vec<Element>,
    /// Speaker notes, kept as an annotation and never drawn.
    pub notes: Option<String>,
}

impl Slide {
    /// Elements that play `role`, in drawing order.
    pub fn elements_with_role(&self, role: ElementRole) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.role == role)
    }

    /// First element that plays `role`.
    pub fn element(&self, role: ElementRole) -> Option<&Element> {
        self.elements_with_role(role).next()
    }
}

/// What an element is for on its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    CoverTitle,
    CoverCaption,
    Title,
    Illustration,
    Placeholder,
    PlaceholderCaption,
    Bullets,
    ExamplesLabel,
    ExamplesList,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    #[default]
    RightToLeft,
    LeftToRight,
}

impl TextDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }

    /// Alignment of the edge where reading starts.
    pub fn leading_alignment(self) -> Alignment {
        match self {
            Self::RightToLeft => Alignment::Right,
            Self::LeftToRight => Alignment::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Requested text styling. The size actually drawn lives in [`TextFit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f64,
    pub color: RGBColor,
    pub alignment: Alignment,
    pub bold: bool,
}

/// A positioned element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub role: ElementRole,
    pub frame: Rect,
    pub direction: TextDirection,
    pub style: TextStyle,
    pub content: ElementContent,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self.content {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Shape(_) => ElementKind::Shape,
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match &self.content {
            ElementContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_picture(&self) -> Option<&Picture> {
        match &self.content {
            ElementContent::Image(picture) => Some(picture),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementContent {
    Text(TextBlock),
    Image(Picture),
    Shape(ShapeFill),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Plain,
    Bulleted,
    Numbered,
}

impl ListStyle {
    /// Left margin and hanging indent of each paragraph, in EMU.
    ///
    /// The marker sits in the hanging indent, so this is also the width the
    /// text itself loses on every line.
    pub const fn marker_indent(self) -> i64 {
        match self {
            ListStyle::Plain => 0,
            ListStyle::Bulleted => 342_900,
            ListStyle::Numbered => 457_200,
        }
    }
}

/// Paragraphs of a text element together with their fitted size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub paragraphs: Vec<String>,
    pub list: ListStyle,
    pub fit: TextFit,
}

/// Result of shrink-to-fit for one text element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextFit {
    /// Size the text is drawn at, in points
    pub effective_font_size: f64,
    /// Wrapped line count at the effective size
    pub line_count: usize,
    /// Set only if no size could contain the text
    pub overflow: bool,
}

/// An illustration and where it is drawn inside its element frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Picture {
    pub illustration: Illustration,
    /// Contain-fit rectangle, always inside the element frame
    pub placement: Rect,
}

/// Solid-filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeFill {
    pub fill: RGBColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(outer.contains(&outer));
        assert!(outer.contains(&Rect::new(10, 10, 80, 80)));
        assert!(!outer.contains(&Rect::new(10, 10, 91, 80)));
        assert!(!outer.contains(&Rect::new(-1, 0, 10, 10)));
    }

    #[test]
    fn test_direction_alignment() {
        assert_eq!(TextDirection::RightToLeft.leading_alignment(), Alignment::Right);
        assert_eq!(TextDirection::LeftToRight.leading_alignment(), Alignment::Left);
        assert!(TextDirection::default().is_rtl());
    }
}
