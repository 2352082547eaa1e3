/// Presentation package writer.
///
/// Writes a laid-out [`Deck`] as a PresentationML package: content types,
/// package and part relationships, the presentation part, one slide master
/// with a blank layout, themes, slides, notes slides and media.
use crate::common::xml::escape_xml;
use crate::deck::Deck;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::Relationships;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::pptx::template;
use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

use super::relmap::RelationshipMapper;
use super::slide::SlidePart;

/// First slide id; PowerPoint reserves ids below 256.
const FIRST_SLIDE_ID: u32 = 256;
const SLIDE_MASTER_ID: u32 = 2_147_483_648;
/// Portrait letter page for the notes view.
const NOTES_WIDTH: i64 = 6_858_000;
const NOTES_HEIGHT: i64 = 9_144_000;
const CREATOR: &str = "Deckhand";

/// Serializes a [`Deck`] to a `.pptx` package.
///
/// # Examples
///
/// ```rust
/// use deckhand::deck::{assemble, DeckSpec, LayoutConstants, SlideSpec};
/// use deckhand::ooxml::pptx::PresentationWriter;
///
/// let deck = assemble(
///     DeckSpec::new("Demo", vec![SlideSpec::new("First").with_bullets(["a"])]),
///     &LayoutConstants::default(),
/// );
/// let bytes = PresentationWriter::new(&deck).write_to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), deckhand::ooxml::OoxmlError>(())
/// ```
pub struct PresentationWriter<'a> {
    deck: &'a Deck,
    rel_mapper: RelationshipMapper,
}

/// `ppt/_rels/presentation.xml.rels` with the ids presentation.xml refers to.
struct PresentationRels {
    rels: Relationships,
    slide_ids: Vec<String>,
    notes_master_id: Option<String>,
}

impl<'a> PresentationWriter<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self {
            deck,
            rel_mapper: RelationshipMapper::build(deck),
        }
    }

    /// Write the package to a file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = self.write_to(BufWriter::new(file))?;
        writer.flush()?;
        tracing::debug!(path = %path.as_ref().display(), "presentation saved");
        Ok(())
    }

    /// Write the package into memory.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.write_to(Cursor::new(Vec::new()))?.into_inner())
    }

    /// Write the package to `writer` and hand the writer back.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        let has_notes = self.rel_mapper.has_notes();

        let add = |zip: &mut ZipWriter<W>, name: &str, content: &[u8]| -> Result<()> {
            zip.start_file(name, options)?;
            zip.write_all(content)?;
            Ok(())
        };

        add(&mut zip, "[Content_Types].xml", self.content_types_xml()?.as_bytes())?;
        add(&mut zip, "_rels/.rels", package_rels().to_xml()?.as_bytes())?;
        add(&mut zip, "docProps/core.xml", self.core_properties_xml()?.as_bytes())?;

        let pres_rels = self.presentation_rels();
        add(
            &mut zip,
            "ppt/presentation.xml",
            self.presentation_xml(&pres_rels)?.as_bytes(),
        )?;
        add(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            pres_rels.rels.to_xml()?.as_bytes(),
        )?;

        // Master, layout and theme
        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        add(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            template::slide_master_xml().as_bytes(),
        )?;
        add(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            master_rels.to_xml()?.as_bytes(),
        )?;

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        add(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            template::slide_layout_xml().as_bytes(),
        )?;
        add(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            layout_rels.to_xml()?.as_bytes(),
        )?;
        add(
            &mut zip,
            "ppt/theme/theme1.xml",
            template::theme_xml("Office Theme").as_bytes(),
        )?;

        if has_notes {
            let mut notes_master_rels = Relationships::new();
            notes_master_rels.add(rt::THEME, "../theme/theme2.xml");
            add(
                &mut zip,
                "ppt/notesMasters/notesMaster1.xml",
                template::notes_master_xml().as_bytes(),
            )?;
            add(
                &mut zip,
                "ppt/notesMasters/_rels/notesMaster1.xml.rels",
                notes_master_rels.to_xml()?.as_bytes(),
            )?;
            add(
                &mut zip,
                "ppt/theme/theme2.xml",
                template::theme_xml("Notes Theme").as_bytes(),
            )?;
        }

        for (index, slide) in self.deck.slides.iter().enumerate() {
            let number = index + 1;
            let part = SlidePart::new(slide, index);
            let rels = self
                .rel_mapper
                .slide_rels(index)
                .ok_or_else(|| OoxmlError::PartNotFound(format!("slide{number}.xml.rels")))?;

            add(
                &mut zip,
                &format!("ppt/slides/slide{number}.xml"),
                part.to_xml(&self.rel_mapper)?.as_bytes(),
            )?;
            add(
                &mut zip,
                &format!("ppt/slides/_rels/slide{number}.xml.rels"),
                rels.to_xml()?.as_bytes(),
            )?;

            if let Some(notes) = part.notes_xml() {
                let mut notes_rels = Relationships::new();
                notes_rels.add(rt::NOTES_MASTER, "../notesMasters/notesMaster1.xml");
                notes_rels.add(rt::SLIDE, format!("../slides/slide{number}.xml"));
                add(
                    &mut zip,
                    &format!("ppt/notesSlides/notesSlide{number}.xml"),
                    notes?.as_bytes(),
                )?;
                add(
                    &mut zip,
                    &format!("ppt/notesSlides/_rels/notesSlide{number}.xml.rels"),
                    notes_rels.to_xml()?.as_bytes(),
                )?;
            }
        }

        for media in self.rel_mapper.media() {
            let picture = self
                .deck
                .slides
                .get(media.slide_index)
                .and_then(|slide| slide.elements.get(media.element_index))
                .and_then(|element| element.as_picture())
                .ok_or_else(|| OoxmlError::PartNotFound(media.part_name.clone()))?;
            add(&mut zip, &media.part_name, picture.illustration.data())?;
        }

        tracing::debug!(
            slides = self.deck.slide_count(),
            media = self.rel_mapper.media().len(),
            "presentation package written"
        );

        Ok(zip.finish()?)
    }

    fn content_types_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;
        write!(
            xml,
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            ct::OPC_RELATIONSHIPS
        )?;
        write!(xml, r#"<Default Extension="xml" ContentType="{}"/>"#, ct::XML)?;

        let formats: BTreeSet<_> = self
            .rel_mapper
            .media()
            .iter()
            .map(|media| (media.format.extension(), media.format.mime_type()))
            .collect();
        for (extension, mime_type) in formats {
            write!(
                xml,
                r#"<Default Extension="{extension}" ContentType="{mime_type}"/>"#
            )?;
        }

        let over = |xml: &mut String, part: &str, content_type: &str| -> Result<()> {
            write!(
                xml,
                r#"<Override PartName="/{part}" ContentType="{content_type}"/>"#
            )?;
            Ok(())
        };

        over(&mut xml, "ppt/presentation.xml", ct::PML_PRESENTATION_MAIN)?;
        over(&mut xml, "ppt/slideMasters/slideMaster1.xml", ct::PML_SLIDE_MASTER)?;
        over(&mut xml, "ppt/slideLayouts/slideLayout1.xml", ct::PML_SLIDE_LAYOUT)?;
        over(&mut xml, "ppt/theme/theme1.xml", ct::OFC_THEME)?;
        if self.rel_mapper.has_notes() {
            over(&mut xml, "ppt/notesMasters/notesMaster1.xml", ct::PML_NOTES_MASTER)?;
            over(&mut xml, "ppt/theme/theme2.xml", ct::OFC_THEME)?;
        }
        for index in 0..self.deck.slides.len() {
            let number = index + 1;
            over(&mut xml, &format!("ppt/slides/slide{number}.xml"), ct::PML_SLIDE)?;
            if self.rel_mapper.get_notes_id(index).is_some() {
                over(
                    &mut xml,
                    &format!("ppt/notesSlides/notesSlide{number}.xml"),
                    ct::PML_NOTES_SLIDE,
                )?;
            }
        }
        over(&mut xml, "docProps/core.xml", ct::OPC_CORE_PROPERTIES)?;

        xml.push_str("</Types>");
        Ok(xml)
    }

    fn core_properties_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
            namespace::OPC_CORE_PROPERTIES
        )?;
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(&self.deck.title))?;
        write!(xml, "<dc:creator>{CREATOR}</dc:creator>")?;
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }

    /// Relationships of the presentation part.
    ///
    /// The master is `rId1` and its theme `rId2`, followed by the slides and
    /// finally the notes master.
    fn presentation_rels(&self) -> PresentationRels {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        rels.add(rt::THEME, "theme/theme1.xml");

        let slide_ids = (1..=self.deck.slides.len())
            .map(|number| rels.add(rt::SLIDE, format!("slides/slide{number}.xml")))
            .collect();

        let notes_master_id = self
            .rel_mapper
            .has_notes()
            .then(|| rels.add(rt::NOTES_MASTER, "notesMasters/notesMaster1.xml"));

        PresentationRels {
            rels,
            slide_ids,
            notes_master_id,
        }
    }

    /// Generate presentation.xml content with actual relationship IDs.
    fn presentation_xml(&self, pres_rels: &PresentationRels) -> Result<String> {
        let slide_rel_ids = &pres_rels.slide_ids;
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{SLIDE_MASTER_ID}" r:id="rId1"/>"#
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if let Some(notes_rel) = &pres_rels.notes_master_id {
            write!(
                xml,
                r#"<p:notesMasterIdLst><p:notesMasterId r:id="{notes_rel}"/></p:notesMasterIdLst>"#
            )?;
        }

        // Write slide ID list
        if !slide_rel_ids.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, rel_id) in slide_rel_ids.iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    FIRST_SLIDE_ID + index as u32,
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.deck.width, self.deck.height
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{NOTES_WIDTH}" cy="{NOTES_HEIGHT}"/>"#
        )?;
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

/// Package-level relationships: the presentation part and core properties.
fn package_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
    rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
    rels
}
