/// Relationship ID mapper for tracking relationships during presentation generation.
///
/// Relationships for every slide are created before any slide XML is written,
/// so slide XML can reference the actual ids instead of placeholders.
use crate::deck::{Deck, ElementContent};
use crate::ooxml::opc::Relationships;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::pptx::format::ImageFormat;
use std::collections::HashMap;

/// A media part and the picture it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaPart {
    pub slide_index: usize,
    pub element_index: usize,
    /// Part name inside the archive, e.g. `ppt/media/image1.png`
    pub part_name: String,
    pub format: ImageFormat,
}

/// Maps presentation elements to their relationship IDs, per slide.
#[derive(Debug, Default)]
pub(crate) struct RelationshipMapper {
    /// Relationships of each slide part, indexed by slide
    slide_rels: Vec<Relationships>,
    /// Maps (slide_index, element_index) to the image relationship ID
    image_ids: HashMap<(usize, usize), String>,
    /// Maps slide_index to its notes slide relationship ID
    notes_ids: HashMap<usize, String>,
    media: Vec<MediaPart>,
}

impl RelationshipMapper {
    /// Allocate relationships for every slide of `deck`.
    ///
    /// Each slide relates to the blank layout as `rId1`, then to its pictures
    /// in element order, then to its notes slide.
    pub fn build(deck: &Deck) -> Self {
        let mut mapper = Self::default();

        for (slide_index, slide) in deck.slides.iter().enumerate() {
            let mut rels = Relationships::new();
            rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            for (element_index, element) in slide.elements.iter().enumerate() {
                if let ElementContent::Image(picture) = &element.content {
                    let format = picture.illustration.format();
                    let file_name = format!("image{}.{}", mapper.media.len() + 1, format.extension());
                    let r_id = rels.add(rt::IMAGE, format!("../media/{file_name}"));
                    mapper.image_ids.insert((slide_index, element_index), r_id);
                    mapper.media.push(MediaPart {
                        slide_index,
                        element_index,
                        part_name: format!("ppt/media/{file_name}"),
                        format,
                    });
                }
            }

            if slide.notes.is_some() {
                let r_id = rels.add(
                    rt::NOTES_SLIDE,
                    format!("../notesSlides/notesSlide{}.xml", slide_index + 1),
                );
                mapper.notes_ids.insert(slide_index, r_id);
            }

            mapper.slide_rels.push(rels);
        }

        mapper
    }

    /// Relationship ID of the picture at `element_index` on a slide.
    pub fn get_image_id(&self, slide_index: usize, element_index: usize) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, element_index))
            .map(|s| s.as_str())
    }

    /// Notes slide relationship ID of a slide.
    pub fn get_notes_id(&self, slide_index: usize) -> Option<&str> {
        self.notes_ids.get(&slide_index).map(|s| s.as_str())
    }

    pub fn slide_rels(&self, slide_index: usize) -> Option<&Relationships> {
        self.slide_rels.get(slide_index)
    }

    pub fn media(&self) -> &[MediaPart] {
        &self.media
    }

    pub fn has_notes(&self) -> bool {
        !self.notes_ids.is_empty()
    }
}
