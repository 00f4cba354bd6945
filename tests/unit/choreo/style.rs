use super::*;

fn frame(pairs: &[(&str, f64)]) -> StyleFrame {
    StyleFrame::new(
        0.0,
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    )
}

#[test]
fn unset_properties_take_initial_values() {
    let f = frame(&[("hero.opacity", 0.5)]);
    let s = f.element("hero");
    assert_eq!(s.opacity, 0.5);
    assert_eq!(s.translate_y, 0.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.clip, None);
    assert_eq!(s.interactive, None);

    let missing = f.element("nope");
    assert_eq!(missing.opacity, 1.0);
}

#[test]
fn clip_path_css() {
    let f = frame(&[
        ("image.inset_top", 28.0),
        ("image.inset_right", 20.0),
        ("image.inset_bottom", 18.0),
        ("image.inset_left", 20.0),
        ("image.radius", 12.0),
    ]);
    let clip = f.element("image").clip.unwrap();
    assert_eq!(clip.to_css(), "inset(28% 20% 18% 20% round 12px)");

    let open = ClipInset {
        top: 0.0,
        right: 50.0,
        bottom: 0.0,
        left: 0.0,
        radius: 0.0,
    };
    assert_eq!(open.to_css(), "inset(0% 50% 0% 0%)");
}

#[test]
fn uniform_inset_shorthand() {
    let f = frame(&[("full.inset", 40.0), ("full.inset_top", 10.0)]);
    let clip = f.element("full").clip.unwrap();
    assert_eq!(clip.top, 10.0);
    assert_eq!(clip.right, 40.0);
    assert_eq!(clip.bottom, 40.0);
    assert_eq!(clip.left, 40.0);
}

#[test]
fn clip_geometry() {
    let clip = ClipInset {
        top: 10.0,
        right: 50.0,
        bottom: 10.0,
        left: 0.0,
        radius: 500.0,
    };
    let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
    let rr = clip.clip(bounds);
    assert_eq!(rr.rect(), Rect::new(0.0, 10.0, 100.0, 90.0));
    assert_eq!(rr.radii().top_left, 40.0);
}

#[test]
fn css_declarations() {
    let f = frame(&[
        ("title.translate_y_vh", 40.0),
        ("title.scale", 2.2),
        ("title.interactive", 0.0),
    ]);
    let css = f.element("title").to_css();
    assert_eq!(css["transform"], "translate(0px, 40vh) scale(2.2)");
    assert_eq!(css["pointer-events"], "none");
    assert_eq!(css["opacity"], "1");
    assert!(!css.contains_key("clip-path"));
}

#[test]
fn elements_are_listed_once() {
    let f = frame(&[("a.opacity", 1.0), ("a.scale", 1.0), ("b.opacity", 0.0)]);
    assert_eq!(f.elements(), vec!["a", "b"]);
}
