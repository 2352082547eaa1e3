/// Slide and notes-slide parts for a laid-out deck.
use crate::common::xml::escape_xml;
use crate::deck::Slide;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::relmap::RelationshipMapper;
use super::shape::write_element;

/// Shape id 1 is taken by the group shape of the slide.
const FIRST_SHAPE_ID: u32 = 2;

/// One slide of the deck, at its position in the package.
pub(crate) struct SlidePart<'a> {
    pub slide: &'a Slide,
    pub index: usize,
}

impl<'a> SlidePart<'a> {
    pub fn new(slide: &'a Slide, index: usize) -> Self {
        Self { slide, index }
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    pub fn to_xml(&self, rel_mapper: &RelationshipMapper) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        xml.push_str("<p:bg><p:bgPr>");
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            self.slide.background.to_hex()
        )?;
        xml.push_str("<a:effectLst/></p:bgPr></p:bg>");

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for (element_index, element) in self.slide.elements.iter().enumerate() {
            let shape_id = FIRST_SHAPE_ID + element_index as u32;
            let image_rel_id = rel_mapper.get_image_id(self.index, element_index);
            write_element(&mut xml, element, shape_id, image_rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content, if the slide has speaker notes.
    ///
    /// Each line of the notes becomes its own paragraph.
    pub fn notes_xml(&self) -> Option<Result<String>> {
        let notes = self.slide.notes.as_deref()?;
        Some(Self::write_notes(notes))
    }

    fn write_notes(notes: &str) -> Result<String> {
        let mut xml = String::with_capacity(1024 + notes.len());

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:notes xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>");
        xml.push_str("<a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str("<p:nvPr><p:ph type=\"body\" idx=\"1\"/></p:nvPr>");
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in notes.lines() {
            xml.push_str("<a:p>");
            if !line.is_empty() {
                write!(
                    xml,
                    r#"<a:r><a:rPr dirty="0"/><a:t>{}</a:t></a:r>"#,
                    escape_xml(line)
                )?;
            }
            xml.push_str("</a:p>");
        }
        if notes.is_empty() {
            xml.push_str("<a:p/>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Ok(xml)
    }
}
