use deckhand::PresentationWriter;
use deckhand::deck::{
    DeckSpec, Illustration, LayoutConstants, SlideSpec, TextDirection, assemble,
    assemble_with_direction,
};
use deckhand::pipeline::{DeckOutline, DirectorySource, export_file_name, prepare_deck};
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn png(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbImage::new(width, height);
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

struct Package {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl Package {
    fn open(bytes: Vec<u8>) -> Self {
        Self {
            archive: ZipArchive::new(Cursor::new(bytes)).unwrap(),
        }
    }

    fn names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    fn text(&mut self, name: &str) -> String {
        let mut content = String::new();
        self.archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn bytes(&mut self, name: &str) -> Vec<u8> {
        let mut content = Vec::new();
        self.archive
            .by_name(name)
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        content
    }
}

#[test]
fn every_slide_has_a_part() {
    let slides = (1..=4)
        .map(|i| SlideSpec::new(format!("Slide {i}")).with_bullets(["point"]))
        .collect();
    let deck = assemble(DeckSpec::new("Parts", slides), &LayoutConstants::default());
    let mut package = Package::open(PresentationWriter::new(&deck).write_to_bytes().unwrap());
    let names = package.names();

    for number in 1..=deck.slide_count() {
        assert!(names.contains(&format!("ppt/slides/slide{number}.xml")));
        assert!(names.contains(&format!("ppt/slides/_rels/slide{number}.xml.rels")));
    }
    assert!(!names.iter().any(|n| n.starts_with("ppt/notesSlides/")));
    assert!(!names.iter().any(|n| n.starts_with("ppt/media/")));

    let presentation = package.text("ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 5);
}

#[test]
fn text_direction_reaches_the_xml() {
    let spec = || {
        DeckSpec::new(
            "Direction",
            vec![SlideSpec::new("כותרת").with_bullets(["שורה ראשונה", "שורה שנייה"])],
        )
    };
    let constants = LayoutConstants::default();

    let rtl = assemble(spec(), &constants);
    let mut package = Package::open(PresentationWriter::new(&rtl).write_to_bytes().unwrap());
    let slide = package.text("ppt/slides/slide2.xml");
    assert!(slide.contains(r#"rtl="1""#));
    assert!(slide.contains(r#"rtlCol="1""#));
    assert!(slide.contains("שורה ראשונה"));

    let ltr = assemble_with_direction(spec(), &constants, TextDirection::LeftToRight);
    let mut package = Package::open(PresentationWriter::new(&ltr).write_to_bytes().unwrap());
    let slide = package.text("ppt/slides/slide2.xml");
    assert!(!slide.contains(r#"rtl="1""#));
}

#[test]
fn notes_and_media_match_the_deck() {
    let image = png(64, 48);
    let spec = DeckSpec::new(
        "Media",
        vec![
            SlideSpec::new("One").with_illustration(Illustration::from_bytes(image.clone()).unwrap()),
            SlideSpec::new("Two").with_speaker_notes("mention the graph"),
            SlideSpec::new("Three").with_illustration(Illustration::from_bytes(png(10, 10)).unwrap()),
        ],
    );
    let deck = assemble(spec, &LayoutConstants::default());
    let mut package = Package::open(PresentationWriter::new(&deck).write_to_bytes().unwrap());
    let names = package.names();

    let media: Vec<_> = names.iter().filter(|n| n.starts_with("ppt/media/")).collect();
    assert_eq!(media.len(), 2);
    assert_eq!(package.bytes("ppt/media/image1.png"), image);

    let notes: Vec<_> = names
        .iter()
        .filter(|n| n.starts_with("ppt/notesSlides/notesSlide"))
        .collect();
    assert_eq!(notes, vec!["ppt/notesSlides/notesSlide3.xml"]);
    assert!(package
        .text("ppt/notesSlides/notesSlide3.xml")
        .contains("mention the graph"));

    assert!(package
        .text("ppt/slides/_rels/slide4.xml.rels")
        .contains("../media/image2.png"));
}

#[tokio::test]
async fn outline_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir(&images).unwrap();
    std::fs::write(images.join("slide-1.png"), png(30, 20)).unwrap();
    // unreadable as an image: the slide falls back to the placeholder
    std::fs::write(images.join("slide-2.png"), b"garbage").unwrap();

    let outline = DeckOutline::from_json(
        r#"{
            "title": "Fractions 101",
            "slides": [
                {"title": "Halves", "bullets": ["1/2 + 1/2 = 1"], "image_prompt": "pie"},
                {"title": "Thirds", "bullets": [], "image_prompt": "pie in three"},
                {"title": "Quarters", "bullets": ["1/4"], "examples": ["1/4 + 1/4 = 1/2"]}
            ]
        }"#,
    )
    .unwrap();

    let spec = prepare_deck(outline, &DirectorySource::new(&images), 2).await;
    assert!(spec.slides[0].illustration.is_some());
    assert!(spec.slides[1].illustration.is_none());
    assert!(spec.slides[2].illustration.is_none());

    let deck = assemble(spec, &LayoutConstants::default());
    let path = dir.path().join(export_file_name(&deck.title));
    PresentationWriter::new(&deck).save(&path).unwrap();

    assert_eq!(path.file_name().unwrap(), "Fractions101.pptx");
    let mut package = Package::open(std::fs::read(&path).unwrap());
    assert!(package.names().contains(&"ppt/media/image1.png".to_string()));
    assert!(package.text("ppt/slides/slide3.xml").contains("no image"));
    assert!(package.text("ppt/slides/slide4.xml").contains("1/4 + 1/4 = 1/2"));
}
