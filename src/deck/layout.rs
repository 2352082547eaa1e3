//! Layout constants and the slide geometry derived from them.
//!
//! ```text
//!  margin                                                    margin
//!  |<->|<------------------ content width ------------------>|<->|
//!      +-----------------------------------------------------+      margin
//!      |                    title band                       |
//!      +----------------+-----+------------------------------+      content_top
//!      |  image column  | gap |          text column         |
//!      |                |     |                              |
//!      +----------------+-----+------------------------------+
//!      |  examples label                                     |
//!      |  examples list                                      |
//!      +-----------------------------------------------------+      slide edge
//! ```
//!
//! The examples band takes whatever height the margin, title band and content
//! region leave, so it ends on the bottom edge of the slide.
//!
//! The sketch shows right-to-left reading order: the image column sits on the
//! visual left, which is the trailing side for the reader.

use super::fit::{TEXT_INSET_X, TEXT_INSET_Y};
use super::model::{ListStyle, Rect, TextDirection};
use crate::common::unit::inches_to_emu;
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Numeric layout parameters, all in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    pub slide_width: i64,
    pub slide_height: i64,
    /// Uniform outer margin
    pub margin: i64,
    pub title_band_height: i64,
    pub image_region_width: i64,
    /// Horizontal gap between the image and text columns
    pub gap: i64,
    /// Top edge of the two-column content region
    pub content_top: i64,
    pub content_height: i64,
    pub examples_label_height: i64,
}

impl Default for LayoutConstants {
    /// 16:9 widescreen with half-inch margins.
    fn default() -> Self {
        let margin = inches_to_emu(0.5);
        let title_band_height = inches_to_emu(1.0);
        Self {
            slide_width: 12_192_000,
            slide_height: 6_858_000,
            margin,
            title_band_height,
            image_region_width: inches_to_emu(5.0),
            gap: inches_to_emu(0.3),
            content_top: margin + title_band_height,
            content_height: inches_to_emu(3.6),
            examples_label_height: inches_to_emu(0.4),
        }
    }
}

impl LayoutConstants {
    /// Width shared by the title band and the examples band.
    #[inline]
    pub fn content_width(&self) -> i64 {
        self.slide_width - 2 * self.margin
    }

    #[inline]
    pub fn text_region_width(&self) -> i64 {
        self.content_width() - self.image_region_width - self.gap
    }

    #[inline]
    pub fn examples_top(&self) -> i64 {
        self.content_top + self.content_height
    }

    /// Height of the band under the content region: what the top margin,
    /// the title band and the content region leave of the slide.
    #[inline]
    pub fn examples_region_height(&self) -> i64 {
        self.slide_height - self.content_height - self.title_band_height - self.margin
    }

    /// Check every geometric invariant the assembler relies on.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("slide_width", self.slide_width),
            ("slide_height", self.slide_height),
            ("margin", self.margin),
            ("title_band_height", self.title_band_height),
            ("image_region_width", self.image_region_width),
            ("content_height", self.content_height),
            ("examples_label_height", self.examples_label_height),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(Error::InvalidLayout(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.gap < 0 {
            return Err(Error::InvalidLayout(format!(
                "gap must not be negative, got {}",
                self.gap
            )));
        }
        if self.text_region_width() <= 0 {
            return Err(Error::InvalidLayout(format!(
                "no room for the text column: image {} + gap {} exceed content width {}",
                self.image_region_width,
                self.gap,
                self.content_width()
            )));
        }
        let text_frames = [
            ("title_band_height", self.title_band_height, 2 * TEXT_INSET_Y),
            ("examples_label_height", self.examples_label_height, 2 * TEXT_INSET_Y),
            ("image_region_width", self.image_region_width, 2 * TEXT_INSET_X),
            (
                "text region width",
                self.text_region_width(),
                2 * TEXT_INSET_X + ListStyle::Bulleted.marker_indent(),
            ),
            (
                "content width",
                self.content_width(),
                2 * TEXT_INSET_X + ListStyle::Numbered.marker_indent(),
            ),
        ];
        for (name, value, insets) in text_frames {
            if value <= insets {
                return Err(Error::InvalidLayout(format!(
                    "{name} of {value} EMU leaves no room inside {insets} EMU of insets and list indent"
                )));
            }
        }
        if self.content_top < self.margin + self.title_band_height {
            return Err(Error::InvalidLayout(format!(
                "content_top {} overlaps the title band ending at {}",
                self.content_top,
                self.margin + self.title_band_height
            )));
        }
        let band_bottom = self.examples_top() + self.examples_region_height();
        if band_bottom > self.slide_height {
            return Err(Error::InvalidLayout(format!(
                "content_top {} pushes the examples band to {}, past the slide height {}",
                self.content_top, band_bottom, self.slide_height
            )));
        }
        // The examples band needs its label plus at least as much again for one list line.
        if self.examples_region_height() < 2 * self.examples_label_height {
            return Err(Error::InvalidLayout(format!(
                "examples band of {} EMU cannot hold a label of {} EMU and a list",
                self.examples_region_height(),
                self.examples_label_height
            )));
        }
        Ok(())
    }
}

/// Every rectangle the assembler places, computed once per deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub slide_width: i64,
    pub slide_height: i64,
    pub cover_title: Rect,
    pub cover_caption: Rect,
    pub title_band: Rect,
    pub image_column: Rect,
    pub text_column: Rect,
    pub examples_label: Rect,
    pub examples_list: Rect,
}

impl Geometry {
    /// Derive slide rectangles for the given reading direction.
    ///
    /// The image column sits on the trailing side of the reading order: the
    /// visual left for right-to-left decks and the visual right otherwise.
    pub fn compute(c: &LayoutConstants, direction: TextDirection) -> Self {
        let content_width = c.content_width();
        let text_width = c.text_region_width();

        let (image_x, text_x) = match direction {
            TextDirection::RightToLeft => (c.margin, c.margin + c.image_region_width + c.gap),
            TextDirection::LeftToRight => (c.margin + text_width + c.gap, c.margin),
        };

        let cover_title = Rect::new(c.margin, c.slide_height / 3, content_width, c.slide_height / 6);
        let cover_caption = Rect::new(
            c.margin,
            cover_title.bottom(),
            content_width,
            c.slide_height / 12,
        );

        let examples_top = c.examples_top();
        let examples_label = Rect::new(c.margin, examples_top, content_width, c.examples_label_height);
        let examples_list = Rect::new(
            c.margin,
            examples_label.bottom(),
            content_width,
            c.examples_region_height() - c.examples_label_height,
        );

        Self {
            slide_width: c.slide_width,
            slide_height: c.slide_height,
            cover_title,
            cover_caption,
            title_band: Rect::new(c.margin, c.margin, content_width, c.title_band_height),
            image_column: Rect::new(image_x, c.content_top, c.image_region_width, c.content_height),
            text_column: Rect::new(text_x, c.content_top, text_width, c.content_height),
            examples_label,
            examples_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        LayoutConstants::default().validate().unwrap();
    }

    #[test]
    fn test_width_invariant() {
        let c = LayoutConstants::default();
        assert_eq!(
            c.image_region_width + c.gap + c.text_region_width() + 2 * c.margin,
            c.slide_width
        );
        assert!(c.content_height + c.examples_region_height() + c.margin <= c.slide_height);
    }

    #[test]
    fn test_examples_band_fills_the_rest_of_the_slide() {
        let c = LayoutConstants::default();
        assert_eq!(
            c.examples_region_height(),
            c.slide_height - c.content_height - c.title_band_height - c.margin
        );
        // 7.5" - 3.6" - 1.0" - 0.5"
        assert_eq!(c.examples_region_height(), inches_to_emu(2.4));
        assert_eq!(c.examples_top() + c.examples_region_height(), c.slide_height);
    }

    #[test]
    fn test_rejects_content_pushed_below_the_title_band() {
        let c = LayoutConstants {
            content_top: 457_200 + 914_400 + 1,
            ..LayoutConstants::default()
        };
        assert!(matches!(c.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_rejects_text_column_narrower_than_bullet_indent() {
        let c = LayoutConstants::default();
        let c = LayoutConstants {
            image_region_width: c.content_width() - c.gap - 2 * TEXT_INSET_X - 342_900,
            ..c
        };
        assert!(c.text_region_width() > 2 * TEXT_INSET_X);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_image_column() {
        let c = LayoutConstants {
            image_region_width: 12_000_000,
            ..LayoutConstants::default()
        };
        assert!(matches!(c.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_rejects_content_over_title_band() {
        let c = LayoutConstants {
            content_top: 100,
            ..LayoutConstants::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_missing_examples_room() {
        let c = LayoutConstants {
            content_height: 4_800_000,
            ..LayoutConstants::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_band_thinner_than_insets() {
        let c = LayoutConstants {
            title_band_height: 2 * TEXT_INSET_Y,
            content_top: 457_200 + 2 * TEXT_INSET_Y,
            ..LayoutConstants::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive() {
        let c = LayoutConstants {
            margin: 0,
            ..LayoutConstants::default()
        };
        assert!(c.validate().is_err());
        let c = LayoutConstants {
            gap: -1,
            ..LayoutConstants::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rtl_puts_image_on_the_left() {
        let c = LayoutConstants::default();
        let g = Geometry::compute(&c, TextDirection::RightToLeft);
        assert_eq!(g.image_column.x, c.margin);
        assert_eq!(g.text_column.right(), c.slide_width - c.margin);
        assert_eq!(g.image_column.right() + c.gap, g.text_column.x);
    }

    #[test]
    fn test_ltr_mirrors_columns() {
        let c = LayoutConstants::default();
        let rtl = Geometry::compute(&c, TextDirection::RightToLeft);
        let ltr = Geometry::compute(&c, TextDirection::LeftToRight);
        assert_eq!(ltr.text_column.x, c.margin);
        assert_eq!(ltr.image_column.right(), c.slide_width - c.margin);
        assert_eq!(ltr.image_column.width, rtl.image_column.width);
        assert_eq!(ltr.text_column.width, rtl.text_column.width);
    }

    #[test]
    fn test_regions_stack_inside_slide() {
        let c = LayoutConstants::default();
        let g = Geometry::compute(&c, TextDirection::RightToLeft);
        let slide = Rect::new(0, 0, c.slide_width, c.slide_height);
        for rect in [
            g.cover_title,
            g.cover_caption,
            g.title_band,
            g.image_column,
            g.text_column,
            g.examples_label,
            g.examples_list,
        ] {
            assert!(slide.contains(&rect), "{rect:?} escapes the slide");
        }
        assert!(g.title_band.bottom() <= g.image_column.y);
        assert_eq!(g.image_column.bottom(), g.examples_label.y);
        assert_eq!(g.examples_label.height + g.examples_list.height, c.examples_region_height());
        assert_eq!(g.examples_list.bottom(), c.slide_height);
    }

    #[test]
    fn test_cover_title_in_upper_middle_third() {
        let c = LayoutConstants::default();
        let g = Geometry::compute(&c, TextDirection::RightToLeft);
        assert!(g.cover_title.y >= c.slide_height / 3);
        assert!(g.cover_title.bottom() <= c.slide_height * 2 / 3);
        assert_eq!(
            g.cover_title.x,
            c.slide_width - g.cover_title.right(),
            "cover title is horizontally centred"
        );
    }
}
