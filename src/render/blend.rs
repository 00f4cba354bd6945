use crate::foundation::math::clamp_unit;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied `src` onto `dst`, with `src` first scaled by `opacity`.
///
/// NaN or non-positive opacity leaves `dst` untouched.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f64) -> PremulRgba8 {
    let coverage = (clamp_unit(opacity) * 255.0).round() as u16;
    let src = src.map(|c| scale(c, coverage));
    if src[3] == 0 {
        return dst;
    }
    let keep = 255 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(scale(dst[i], keep)))
}

// Rounded `c * by / 255`.
fn scale(c: u8, by: u16) -> u8 {
    ((u32::from(c) * u32::from(by) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
