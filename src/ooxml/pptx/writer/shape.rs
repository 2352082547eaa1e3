/// Shape XML for laid-out deck elements.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::deck::fit::{TEXT_INSET_X, TEXT_INSET_Y};
use crate::deck::{
    Alignment, Element, ElementContent, ElementRole, ListStyle, Picture, Rect, ShapeFill,
    TextBlock,
};
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

/// Bullet glyph for bulleted lists.
const BULLET_CHAR: &str = "\u{2022}";

/// Write one element as a DrawingML shape.
///
/// Pictures need the relationship ID of their media part.
pub(crate) fn write_element(
    xml: &mut String,
    element: &Element,
    shape_id: u32,
    image_rel_id: Option<&str>,
) -> Result<()> {
    match &element.content {
        ElementContent::Text(text) => write_text_box(xml, element, text, shape_id),
        ElementContent::Shape(fill) => write_rectangle(xml, &element.frame, fill, shape_id),
        ElementContent::Image(picture) => {
            let rel_id = image_rel_id.ok_or_else(|| {
                OoxmlError::PartNotFound(format!("media relationship for shape {shape_id}"))
            })?;
            write_picture(xml, picture, shape_id, rel_id)
        },
    }
}

fn write_xfrm(xml: &mut String, rect: &Rect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn shape_name(role: ElementRole) -> &'static str {
    match role {
        ElementRole::CoverTitle => "Cover Title",
        ElementRole::CoverCaption => "Cover Caption",
        ElementRole::Title => "Title",
        ElementRole::Illustration => "Illustration",
        ElementRole::Placeholder => "Image Placeholder",
        ElementRole::PlaceholderCaption => "Image Placeholder Caption",
        ElementRole::Bullets => "Bullets",
        ElementRole::ExamplesLabel => "Examples Label",
        ElementRole::ExamplesList => "Examples",
    }
}

/// Vertical anchor for a text role.
fn anchor(role: ElementRole) -> &'static str {
    match role {
        ElementRole::CoverTitle | ElementRole::Title | ElementRole::PlaceholderCaption => "ctr",
        ElementRole::CoverCaption
        | ElementRole::Bullets
        | ElementRole::ExamplesLabel
        | ElementRole::ExamplesList
        | ElementRole::Illustration
        | ElementRole::Placeholder => "t",
    }
}

/// Run size in centipoints, plus the autofit scale in thousandths of a
/// percent when the fitted size is below the smallest size a run can carry.
fn run_size(effective_font_size: f64) -> (u32, Option<u32>) {
    let size = pt_to_centipoints(effective_font_size);
    let fitted = effective_font_size * 100.0;
    if fitted >= f64::from(size) {
        return (size, None);
    }
    let scale = (fitted / f64::from(size) * 100_000.0).floor() as u32;
    (size, Some(scale.clamp(1_000, 100_000)))
}

fn alignment_attr(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
        Alignment::Right => "r",
    }
}

fn write_text_box(xml: &mut String, element: &Element, text: &TextBlock, shape_id: u32) -> Result<()> {
    let rtl = u8::from(element.direction.is_rtl());

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        shape_name(element.role),
        shape_id
    )?;
    xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &element.frame)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="square" lIns="{x}" tIns="{y}" rIns="{x}" bIns="{y}" rtlCol="{rtl}" anchor="{anchor}">"#,
        x = TEXT_INSET_X,
        y = TEXT_INSET_Y,
        rtl = rtl,
        anchor = anchor(element.role),
    )?;
    let (size, font_scale) = run_size(text.fit.effective_font_size);
    match font_scale {
        Some(scale) => write!(xml, r#"<a:normAutofit fontScale="{scale}"/>"#)?,
        None => xml.push_str("<a:normAutofit/>"),
    }
    xml.push_str("</a:bodyPr>");
    xml.push_str("<a:lstStyle/>");

    let mut run_props = String::with_capacity(96);
    write!(run_props, r#"<a:rPr sz="{size}""#)?;
    if element.style.bold {
        run_props.push_str(r#" b="1""#);
    }
    run_props.push_str(r#" dirty="0">"#);
    write!(
        run_props,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        element.style.color.to_hex()
    )?;
    run_props.push_str("</a:rPr>");

    let algn = alignment_attr(element.style.alignment);
    let indent = text.list.marker_indent();
    if text.paragraphs.is_empty() {
        write!(xml, r#"<a:p><a:pPr algn="{algn}" rtl="{rtl}"/>"#)?;
        write!(xml, r#"<a:endParaRPr sz="{size}" dirty="0"/></a:p>"#)?;
    }
    for paragraph in &text.paragraphs {
        xml.push_str("<a:p>");
        match text.list {
            ListStyle::Plain => {
                write!(xml, r#"<a:pPr algn="{algn}" rtl="{rtl}"><a:buNone/></a:pPr>"#)?;
            },
            ListStyle::Bulleted => {
                write!(
                    xml,
                    r#"<a:pPr marL="{indent}" indent="-{indent}" algn="{algn}" rtl="{rtl}">"#
                )?;
                write!(
                    xml,
                    r#"<a:buFont typeface="Arial"/><a:buChar char="{BULLET_CHAR}"/></a:pPr>"#
                )?;
            },
            ListStyle::Numbered => {
                write!(
                    xml,
                    r#"<a:pPr marL="{indent}" indent="-{indent}" algn="{algn}" rtl="{rtl}">"#
                )?;
                xml.push_str(r#"<a:buFont typeface="+mj-lt"/><a:buAutoNum type="arabicPeriod"/></a:pPr>"#);
            },
        }

        for (i, line) in paragraph.split('\n').enumerate() {
            if i > 0 {
                write!(xml, r#"<a:br><a:rPr sz="{size}" dirty="0"/></a:br>"#)?;
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            xml.push_str(&run_props);
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }
        xml.push_str("</a:p>");
    }

    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_rectangle(xml: &mut String, frame: &Rect, fill: &ShapeFill, shape_id: u32) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        shape_name(ElementRole::Placeholder),
        shape_id
    )?;
    xml.push_str("<p:cNvSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, frame)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        fill.fill.to_hex()
    )?;
    xml.push_str("<a:ln><a:noFill/></a:ln>");
    xml.push_str("</p:spPr>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_picture(xml: &mut String, picture: &Picture, shape_id: u32, rel_id: &str) -> Result<()> {
    xml.push_str("<p:pic>");
    xml.push_str("<p:nvPicPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        shape_name(ElementRole::Illustration),
        shape_id
    )?;
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvPicPr>");

    xml.push_str("<p:blipFill>");
    write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id)?;
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
    xml.push_str("</p:blipFill>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &picture.placement)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fit::fit_text;
    use crate::deck::{DeckSpec, Illustration, LayoutConstants, SlideSpec, assemble};

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn content_slide(slide: SlideSpec) -> crate::deck::Slide {
        let deck = assemble(DeckSpec::new("t", vec![slide]), &LayoutConstants::default());
        deck.slides.into_iter().nth(1).unwrap()
    }

    #[test]
    fn test_bullets_are_rtl_list() {
        let slide = content_slide(SlideSpec::new("s").with_bullets(["one", "two & three"]));
        let bullets = slide.element(ElementRole::Bullets).unwrap();
        let mut xml = String::new();
        write_element(&mut xml, bullets, 5, None).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="5" name="Bullets 5"/>"#));
        assert_eq!(xml.matches("<a:buChar").count(), 2);
        assert_eq!(xml.matches(r#"algn="r" rtl="1""#).count(), 2);
        assert!(xml.contains(r#"rtlCol="1""#));
        assert!(xml.contains("<a:t>two &amp; three</a:t>"));
        assert!(xml.contains(r#"sz="2000""#));
    }

    #[test]
    fn test_numbered_examples() {
        let slide = content_slide(SlideSpec::new("s").with_examples(["2+2=4", "3*3=9"]));
        let list = slide.element(ElementRole::ExamplesList).unwrap();
        let mut xml = String::new();
        write_element(&mut xml, list, 7, None).unwrap();
        assert_eq!(xml.matches(r#"<a:buAutoNum type="arabicPeriod"/>"#).count(), 2);
    }

    #[test]
    fn test_empty_list_still_has_paragraph() {
        let slide = content_slide(SlideSpec::new("s"));
        let bullets = slide.element(ElementRole::Bullets).unwrap();
        let mut xml = String::new();
        write_element(&mut xml, bullets, 4, None).unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 1);
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_line_breaks_inside_paragraph() {
        let slide = content_slide(SlideSpec::new("s").with_bullets(["first\nsecond"]));
        let bullets = slide.element(ElementRole::Bullets).unwrap();
        let mut xml = String::new();
        write_element(&mut xml, bullets, 4, None).unwrap();
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert_eq!(xml.matches("<a:r>").count(), 2);
    }

    #[test]
    fn test_placeholder_rectangle() {
        let slide = content_slide(SlideSpec::new("s"));
        let placeholder = slide.element(ElementRole::Placeholder).unwrap();
        let mut xml = String::new();
        write_element(&mut xml, placeholder, 3, None).unwrap();
        assert!(xml.contains(r#"<a:srgbClr val="D1D5DB"/>"#));
        assert!(xml.contains(&format!(
            r#"<a:off x="{}" y="{}"/>"#,
            placeholder.frame.x, placeholder.frame.y
        )));
    }

    #[test]
    fn test_picture_uses_placement_and_rel_id() {
        let picture = Illustration::with_dimensions(PNG_SIGNATURE.to_vec(), 200, 100).unwrap();
        let slide = content_slide(SlideSpec::new("s").with_illustration(picture));
        let image = slide.element(ElementRole::Illustration).unwrap();
        let placement = image.as_picture().unwrap().placement;

        let mut xml = String::new();
        write_element(&mut xml, image, 3, Some("rId2")).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(&format!(
            r#"<a:ext cx="{}" cy="{}"/>"#,
            placement.width, placement.height
        )));

        let mut xml = String::new();
        assert!(write_element(&mut xml, image, 3, None).is_err());
    }

    #[test]
    fn test_list_indent_is_what_the_fitter_measured() {
        let slide = content_slide(
            SlideSpec::new("s")
                .with_bullets(["word ".repeat(120)])
                .with_examples(["step ".repeat(90)]),
        );
        for role in [ElementRole::Bullets, ElementRole::ExamplesList] {
            let element = slide.element(role).unwrap();
            let text = element.as_text().unwrap();
            let indent = text.list.marker_indent();
            assert!(indent > 0);

            let mut xml = String::new();
            write_element(&mut xml, element, 4, None).unwrap();
            assert!(xml.contains(&format!(r#"marL="{indent}" indent="-{indent}""#)));

            let refit = fit_text(&text.paragraphs, &element.frame, element.style.font_size, indent);
            assert_eq!(refit, text.fit, "{role:?}");
        }
    }

    #[test]
    fn test_sub_point_fit_uses_autofit_scale() {
        let bullets: Vec<String> = (0..600).map(|i| format!("b{i}")).collect();
        let slide = content_slide(SlideSpec::new("s").with_bullets(bullets));
        let element = slide.element(ElementRole::Bullets).unwrap();
        let fit = element.as_text().unwrap().fit;
        assert!(fit.effective_font_size < 1.0);

        let mut xml = String::new();
        write_element(&mut xml, element, 4, None).unwrap();
        assert!(xml.contains(r#"sz="100""#));
        let (_, scale) = run_size(fit.effective_font_size);
        let scale = scale.unwrap();
        assert!(xml.contains(&format!(r#"<a:normAutofit fontScale="{scale}"/>"#)));
        assert!(f64::from(scale) / 100_000.0 <= fit.effective_font_size);
    }

    #[test]
    fn test_run_size() {
        assert_eq!(run_size(20.0), (2000, None));
        assert_eq!(run_size(1.0), (100, None));
        assert_eq!(run_size(0.5), (100, Some(50_000)));
        assert_eq!(run_size(0.25), (100, Some(25_000)));
    }
}
