//! Presentation template parts.
//!
//! Every slide positions its own shapes, so the package only needs the bare
//! structure PowerPoint requires: one slide master, one blank layout, a theme
//! and, when speaker notes exist, a notes master.

/// Colour map shared by the slide master and the notes master.
const CLR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

/// Empty shape tree header.
const EMPTY_SP_TREE: &str = concat!(
    "<p:spTree>",
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    "</p:spTree>",
);

const PML_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

/// Slide master with a single blank layout referenced as `rId1`.
pub fn slide_master_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "<p:sldMaster {ns}>",
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>{tree}</p:cSld>"#,
            "{clr_map}",
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "</p:sldMaster>",
        ),
        ns = PML_NAMESPACES,
        tree = EMPTY_SP_TREE,
        clr_map = CLR_MAP,
    )
}

/// Blank slide layout.
pub fn slide_layout_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<p:sldLayout {ns} type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank">{tree}</p:cSld>"#,
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sldLayout>",
        ),
        ns = PML_NAMESPACES,
        tree = EMPTY_SP_TREE,
    )
}

/// Notes master; its theme is referenced as `rId1`.
pub fn notes_master_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "<p:notesMaster {ns}>",
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>{tree}</p:cSld>"#,
            "{clr_map}",
            "</p:notesMaster>",
        ),
        ns = PML_NAMESPACES,
        tree = EMPTY_SP_TREE,
        clr_map = CLR_MAP,
    )
}

/// Office theme with neutral colours and Arial for every script.
///
/// Arial carries Hebrew and Arabic glyphs, so right-to-left text renders
/// without font substitution.
pub fn theme_xml(name: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{name}">"#,
            "<a:themeElements>",
            r#"<a:clrScheme name="Deckhand">"#,
            r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
            r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
            r#"<a:dk2><a:srgbClr val="1F2937"/></a:dk2>"#,
            r#"<a:lt2><a:srgbClr val="E8ECF1"/></a:lt2>"#,
            r#"<a:accent1><a:srgbClr val="2563EB"/></a:accent1>"#,
            r#"<a:accent2><a:srgbClr val="059669"/></a:accent2>"#,
            r#"<a:accent3><a:srgbClr val="D97706"/></a:accent3>"#,
            r#"<a:accent4><a:srgbClr val="DC2626"/></a:accent4>"#,
            r#"<a:accent5><a:srgbClr val="7C3AED"/></a:accent5>"#,
            r#"<a:accent6><a:srgbClr val="0891B2"/></a:accent6>"#,
            r#"<a:hlink><a:srgbClr val="1D4ED8"/></a:hlink>"#,
            r#"<a:folHlink><a:srgbClr val="6D28D9"/></a:folHlink>"#,
            "</a:clrScheme>",
            r#"<a:fontScheme name="Deckhand">"#,
            r#"<a:majorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface="Arial"/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface="Arial"/></a:minorFont>"#,
            "</a:fontScheme>",
            r#"<a:fmtScheme name="Deckhand">"#,
            "<a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>",
            "<a:lnStyleLst>{line}{line}{line}</a:lnStyleLst>",
            "<a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>",
            "<a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>",
            "</a:fmtScheme>",
            "</a:themeElements>",
            "<a:objectDefaults/><a:extraClrSchemeLst/>",
            "</a:theme>",
        ),
        name = crate::common::xml::escape_xml(name),
        fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
        effect = "<a:effectStyle><a:effectLst/></a:effectStyle>",
    )
}
