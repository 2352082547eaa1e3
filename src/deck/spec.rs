//! Input description of a deck before layout.

use crate::common::{Error, Result};
use crate::ooxml::pptx::format::ImageFormat;
use bytes::Bytes;
use serde::Serialize;
use std::io::Cursor;

/// An entire presentation before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSpec {
    pub title: String,
    pub slides: Vec<SlideSpec>,
}

impl DeckSpec {
    pub fn new(title: impl Into<String>, slides: Vec<SlideSpec>) -> Self {
        Self {
            title: title.into(),
            slides,
        }
    }
}

/// One slide's content before layout.
///
/// `bullets` and `examples` may be empty. A missing illustration is rendered
/// as a placeholder of identical geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSpec {
    pub title: String,
    pub bullets: Vec<String>,
    pub examples: Vec<String>,
    pub illustration: Option<Illustration>,
    pub speaker_notes: Option<String>,
}

impl SlideSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_illustration(mut self, illustration: Illustration) -> Self {
        self.illustration = Some(illustration);
        self
    }

    pub fn with_speaker_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = Some(notes.into());
        self
    }
}

/// An encoded image together with its pixel dimensions.
///
/// Dimensions are probed once at construction so that layout never has to
/// decode image data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Illustration {
    #[serde(skip)]
    data: Bytes,
    format: ImageFormat,
    width_px: u32,
    height_px: u32,
}

impl Illustration {
    /// Build an illustration from encoded image bytes.
    ///
    /// Fails with [`Error::InvalidImage`] when the signature is not a format a
    /// presentation can embed, or when the header does not yield a non-empty
    /// size.
    pub fn from_bytes(data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| Error::InvalidImage("unrecognised image signature".to_string()))?;

        let mut reader = image::ImageReader::new(Cursor::new(&data[..]));
        reader.set_format(format.to_image_crate());
        let (width_px, height_px) = reader.into_dimensions()?;

        Self::with_dimensions(data, width_px, height_px)
    }

    /// Build an illustration whose pixel size is already known.
    pub fn with_dimensions(data: impl Into<Bytes>, width_px: u32, height_px: u32) -> Result<Self> {
        let data = data.into();
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| Error::InvalidImage("unrecognised image signature".to_string()))?;
        if width_px == 0 || height_px == 0 {
            return Err(Error::InvalidImage(format!(
                "empty image ({width_px}x{height_px})"
            )));
        }

        Ok(Self {
            data,
            format,
            width_px,
            height_px,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Pixel size as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }
}
