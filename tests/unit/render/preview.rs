use std::collections::BTreeMap;

use super::*;

fn frame(values: &[(&str, f64)]) -> StyleFrame {
    let values: BTreeMap<String, f64> = values.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    StyleFrame::new(0.5, values)
}

fn opts() -> PreviewOpts {
    PreviewOpts {
        width: 100,
        height: 100,
        background: [0, 0, 0, 255],
    }
}

#[test]
fn clipped_layer_covers_only_its_inset() {
    let img = rasterize(&frame(&[("box.inset", 25.0)]), opts()).unwrap();
    assert_eq!(img.get_pixel(50, 50).0, layer_color("box"));
    assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(80, 50).0, [0, 0, 0, 255]);
}

#[test]
fn invisible_layers_are_skipped() {
    let img = rasterize(&frame(&[("box.opacity", 0.0)]), opts()).unwrap();
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn translate_in_viewport_heights() {
    let f = frame(&[("box.translate_y_vh", 50.0), ("box.opacity", 1.0)]);
    let style = f.element("box");
    let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(layer_bounds(&style, canvas), Rect::new(0.0, 50.0, 100.0, 150.0));
    let img = rasterize(&f, opts()).unwrap();
    assert_eq!(img.get_pixel(50, 25).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(50, 75).0, layer_color("box"));
}

#[test]
fn scale_is_about_the_center() {
    let f = frame(&[("box.scale", 0.5)]);
    let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
        layer_bounds(&f.element("box"), canvas),
        Rect::new(25.0, 25.0, 75.0, 75.0)
    );
}

#[test]
fn rejects_empty_canvas() {
    let bad = PreviewOpts {
        width: 0,
        ..opts()
    };
    assert!(rasterize(&frame(&[]), bad).is_err());
}

#[test]
fn writes_png() {
    let dir = std::env::temp_dir().join(format!("scrollfx-preview-{}", std::process::id()));
    let path = dir.join("nested").join("f.png");
    let img = rasterize(&frame(&[("box.inset", 10.0)]), opts()).unwrap();
    save_png(&img, &path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (100, 100));
    let _ = std::fs::remove_dir_all(dir);
}
