use deckhand::deck::{
    DeckSpec, ElementContent, ElementRole, Illustration, LayoutConstants, SlideKind, SlideSpec,
    assemble,
};
use deckhand::deck::fit::TEXT_INSET_Y;
use proptest::prelude::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 +=().,]{0,80}",
        "[\u{05D0}-\u{05EA} ]{1,60}",
        "[a-z]{1,12}( [a-z]{1,12}){0,400}",
    ]
}

prop_compose! {
    fn illustration()(width in 1u32..4000, height in 1u32..4000) -> Illustration {
        Illustration::with_dimensions(PNG_SIGNATURE.to_vec(), width, height).unwrap()
    }
}

prop_compose! {
    fn slide_spec()(
        title in text(),
        bullets in prop::collection::vec(text(), 0..6),
        examples in prop::collection::vec(text(), 0..4),
        illustration in prop::option::of(illustration()),
    ) -> SlideSpec {
        let mut slide = SlideSpec::new(title).with_bullets(bullets).with_examples(examples);
        if let Some(illustration) = illustration {
            slide = slide.with_illustration(illustration);
        }
        slide
    }
}

prop_compose! {
    fn deck_spec()(title in text(), slides in prop::collection::vec(slide_spec(), 0..5)) -> DeckSpec {
        DeckSpec::new(title, slides)
    }
}

fn paragraphs(slide: &deckhand::deck::Slide, role: ElementRole) -> Vec<String> {
    slide
        .element(role)
        .and_then(|e| e.as_text())
        .map(|t| t.paragraphs.clone())
        .unwrap_or_default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn assembly_is_deterministic(spec in deck_spec()) {
        let constants = LayoutConstants::default();
        let first = assemble(spec.clone(), &constants);
        let second = assemble(spec, &constants);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn placeholder_occupies_the_image_box(slide in slide_spec(), picture in illustration()) {
        let constants = LayoutConstants::default();
        let mut without = slide.clone();
        without.illustration = None;
        let with = slide.with_illustration(picture);

        let deck = assemble(DeckSpec::new("t", vec![without, with]), &constants);
        let placeholder = deck.slides[1].element(ElementRole::Placeholder).unwrap();
        let image = deck.slides[2].element(ElementRole::Illustration).unwrap();

        prop_assert_eq!(placeholder.frame, image.frame);
        prop_assert!(matches!(placeholder.content, ElementContent::Shape(_)));
        prop_assert!(matches!(image.content, ElementContent::Image(_)));
    }

    #[test]
    fn examples_band_only_when_examples_exist(slide in slide_spec()) {
        let has_examples = !slide.examples.is_empty();
        let deck = assemble(DeckSpec::new("t", vec![slide]), &LayoutConstants::default());
        let content = &deck.slides[1];

        let labels = content.elements_with_role(ElementRole::ExamplesLabel).count();
        let lists = content.elements_with_role(ElementRole::ExamplesList).count();
        if has_examples {
            prop_assert_eq!((labels, lists), (1, 1));
        } else {
            prop_assert_eq!((labels, lists), (0, 0));
        }
    }

    #[test]
    fn order_is_preserved(spec in deck_spec()) {
        let deck = assemble(spec.clone(), &LayoutConstants::default());

        prop_assert_eq!(deck.slides.len(), spec.slides.len() + 1);
        prop_assert_eq!(deck.slides[0].kind, SlideKind::Cover);
        for (input, output) in spec.slides.iter().zip(deck.content_slides()) {
            prop_assert_eq!(paragraphs(output, ElementRole::Title), vec![input.title.clone()]);
            prop_assert_eq!(paragraphs(output, ElementRole::Bullets), input.bullets.clone());
            prop_assert_eq!(paragraphs(output, ElementRole::ExamplesList), input.examples.clone());
        }
    }

    #[test]
    fn text_never_overflows(spec in deck_spec()) {
        let deck = assemble(spec, &LayoutConstants::default());
        for element in deck.slides.iter().flat_map(|s| s.elements.iter()) {
            if let Some(text) = element.as_text() {
                prop_assert!(!text.fit.overflow, "{:?} overflowed", element.role);
                prop_assert!(text.fit.effective_font_size <= element.style.font_size);
            }
            if let Some(picture) = element.as_picture() {
                prop_assert!(element.frame.contains(&picture.placement));
            }
        }
    }

    #[test]
    fn long_lists_never_overflow(count in 0usize..800, breaks in 0usize..300) {
        let bullets: Vec<String> = (0..count).map(|i| format!("b{i}")).collect();
        let example = "step\n".repeat(breaks);
        let spec = DeckSpec::new(
            "Long lists",
            vec![SlideSpec::new("Many").with_bullets(bullets).with_examples([example])],
        );
        let deck = assemble(spec, &LayoutConstants::default());
        for role in [ElementRole::Bullets, ElementRole::ExamplesList] {
            let fit = deck.slides[1].element(role).unwrap().as_text().unwrap().fit;
            prop_assert!(!fit.overflow, "{:?} overflowed", role);
            prop_assert!(fit.effective_font_size > 0.0);
        }
    }
}

#[test]
fn very_long_bullet_is_shrunk_not_overflowing() {
    let long = "x".repeat(2500);
    let words = "word ".repeat(600);
    let spec = DeckSpec::new(
        "Long",
        vec![
            SlideSpec::new("Unbroken")
                .with_bullets([long.clone()])
                .with_examples([long]),
            SlideSpec::new("Words").with_bullets([words]),
        ],
    );
    let deck = assemble(spec, &LayoutConstants::default());

    for slide in deck.content_slides() {
        let bullets = slide.element(ElementRole::Bullets).unwrap().as_text().unwrap();
        assert!(!bullets.fit.overflow);
        assert!(bullets.fit.effective_font_size < 20.0);
    }
}

#[test]
fn hundreds_of_bullets_and_line_breaks_still_fit() {
    let bullets: Vec<String> = (0..600).map(|i| format!("b{i}")).collect();
    let spec = DeckSpec::new(
        "Crowded",
        vec![
            SlideSpec::new("Bullets").with_bullets(bullets),
            SlideSpec::new("Steps").with_examples(["step\n".repeat(120)]),
        ],
    );
    let deck = assemble(spec, &LayoutConstants::default());

    let bullets = deck.slides[1].element(ElementRole::Bullets).unwrap().as_text().unwrap();
    assert_eq!(bullets.fit.line_count, 600);
    assert!(!bullets.fit.overflow);
    assert!(bullets.fit.effective_font_size < 1.0);

    let steps = deck.slides[2].element(ElementRole::ExamplesList).unwrap();
    let fit = steps.as_text().unwrap().fit;
    assert_eq!(fit.line_count, 121);
    assert!(!fit.overflow);
    // 121 lines at 1.2em inside the band, less its top and bottom insets
    let inner_pt = (steps.frame.height - 2 * TEXT_INSET_Y) as f64 / 12_700.0;
    assert!(121.0 * 1.2 * fit.effective_font_size <= inner_pt);
}
