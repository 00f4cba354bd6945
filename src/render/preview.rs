//! Debug rasterizer: paints every element of a [`StyleFrame`] as a flat colored layer so a
//! choreography can be inspected frame by frame without a browser.

use std::path::Path;

use anyhow::Context as _;
use image::{ImageFormat, Rgba, RgbaImage};
use kurbo::Shape as _;

use crate::{
    choreo::style::{ElementStyle, StyleFrame},
    foundation::{
        core::{Point, Rect, RoundedRect, Vec2},
        error::{ScrollfxError, ScrollfxResult},
    },
    render::blend::{PremulRgba8, over},
};

/// Largest accepted canvas edge.
pub const MAX_PREVIEW_EDGE: u32 = 8192;

const PALETTE: [PremulRgba8; 8] = [
    [230, 57, 70, 255],
    [69, 123, 157, 255],
    [241, 250, 238, 255],
    [42, 157, 143, 255],
    [233, 196, 106, 255],
    [244, 162, 97, 255],
    [131, 56, 236, 255],
    [58, 134, 255, 255],
];

/// Canvas settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreviewOpts {
    /// Canvas width, px.
    pub width: u32,
    /// Canvas height, px.
    pub height: u32,
    /// Opaque background color.
    pub background: PremulRgba8,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            background: [0, 0, 0, 255],
        }
    }
}

/// Stable color for an element name.
pub fn layer_color(name: &str) -> PremulRgba8 {
    // FNV-1a
    let mut h: u32 = 0x811c_9dc5;
    for b in name.bytes() {
        h ^= u32::from(b);
        h = h.wrapping_mul(0x0100_0193);
    }
    PALETTE[(h as usize) % PALETTE.len()]
}

/// Full-canvas element box after its transform (scale about the center, then translate).
pub fn layer_bounds(style: &ElementStyle, canvas: Rect) -> Rect {
    let scale = if style.scale.is_finite() { style.scale.max(0.0) } else { 1.0 };
    let size = canvas.size() * scale;
    let ty = style
        .translate_y_vh
        .map_or(style.translate_y, |vh| vh / 100.0 * canvas.height());
    Rect::from_center_size(canvas.center(), size) + Vec2::new(style.translate_x, ty)
}

/// Visible shape of the element.
pub fn layer_shape(style: &ElementStyle, canvas: Rect) -> RoundedRect {
    let bounds = layer_bounds(style, canvas);
    match style.clip {
        Some(clip) => clip.clip(bounds),
        None => RoundedRect::from_rect(bounds, 0.0),
    }
}

/// Paint `frame` with elements stacked in name order.
#[tracing::instrument(skip(frame), fields(progress = frame.progress))]
pub fn rasterize(frame: &StyleFrame, opts: PreviewOpts) -> ScrollfxResult<RgbaImage> {
    if opts.width == 0
        || opts.height == 0
        || opts.width > MAX_PREVIEW_EDGE
        || opts.height > MAX_PREVIEW_EDGE
    {
        return Err(ScrollfxError::validation(format!(
            "preview size must be within 1..={MAX_PREVIEW_EDGE} (got {}x{})",
            opts.width, opts.height
        )));
    }

    let mut img = RgbaImage::from_pixel(opts.width, opts.height, Rgba(opts.background));
    let canvas = Rect::new(0.0, 0.0, f64::from(opts.width), f64::from(opts.height));

    for name in frame.elements() {
        let style = frame.element(name);
        if style.opacity <= 0.0 {
            continue;
        }
        let shape = layer_shape(&style, canvas);
        let Some((x0, y0, x1, y1)) = pixel_span(shape.bounding_box(), opts) else {
            continue;
        };
        let color = layer_color(name);
        tracing::trace!(element = name, opacity = style.opacity, "paint layer");
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if shape.contains(center) {
                    let px = img.get_pixel_mut(x, y);
                    px.0 = over(px.0, color, style.opacity);
                }
            }
        }
    }
    Ok(img)
}

/// Write a PNG, creating parent directories.
pub fn save_png(img: &RgbaImage, path: &Path) -> ScrollfxResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn pixel_span(bbox: Rect, opts: PreviewOpts) -> Option<(u32, u32, u32, u32)> {
    let clamp_x = |v: f64| v.clamp(0.0, f64::from(opts.width)) as u32;
    let clamp_y = |v: f64| v.clamp(0.0, f64::from(opts.height)) as u32;
    if !(bbox.x0.is_finite() && bbox.y0.is_finite() && bbox.x1.is_finite() && bbox.y1.is_finite()) {
        return None;
    }
    let (x0, x1) = (clamp_x(bbox.x0.floor()), clamp_x(bbox.x1.ceil()));
    let (y0, y1) = (clamp_y(bbox.y0.floor()), clamp_y(bbox.y1.ceil()));
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
