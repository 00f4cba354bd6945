use std::collections::BTreeMap;

use crate::foundation::core::{Insets, Rect, RoundedRect};

/// Resolved style values for one frame, keyed by `"<element>.<property>"`.
///
/// This is the whole output of the choreography engine; whichever UI layer hosts it is
/// responsible for applying the values to rendered nodes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleFrame {
    /// Progress the frame was evaluated at.
    pub progress: f64,
    /// Property values.
    pub values: BTreeMap<String, f64>,
}

impl StyleFrame {
    /// Frame from raw values.
    pub fn new(progress: f64, values: BTreeMap<String, f64>) -> Self {
        Self { progress, values }
    }

    /// Value of one property.
    pub fn get(&self, property: &str) -> Option<f64> {
        self.values.get(property).copied()
    }

    /// Element names present in the frame, sorted.
    pub fn elements(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .values
            .keys()
            .filter_map(|k| k.split_once('.').map(|(e, _)| e))
            .collect();
        out.dedup();
        out
    }

    /// Typed view of one element's properties.
    pub fn element(&self, name: &str) -> ElementStyle {
        let get = |prop: &str| self.get(&format!("{name}.{prop}"));
        let uniform = get("inset");
        let side = |prop: &str| get(prop).or(uniform);
        let clip = match (
            side("inset_top"),
            side("inset_right"),
            side("inset_bottom"),
            side("inset_left"),
        ) {
            (None, None, None, None) => None,
            (top, right, bottom, left) => Some(ClipInset {
                top: top.unwrap_or(0.0),
                right: right.unwrap_or(0.0),
                bottom: bottom.unwrap_or(0.0),
                left: left.unwrap_or(0.0),
                radius: get("radius").unwrap_or(0.0),
            }),
        };
        ElementStyle {
            opacity: get("opacity").unwrap_or(1.0),
            translate_x: get("translate_x").unwrap_or(0.0),
            translate_y: get("translate_y").unwrap_or(0.0),
            translate_y_vh: get("translate_y_vh"),
            scale: get("scale").unwrap_or(1.0),
            clip,
            interactive: get("interactive").map(|v| v > 0.5),
        }
    }
}

/// `inset()` clip-path: edge offsets in percent of the element box, corner radius in px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipInset {
    /// Top inset, percent.
    pub top: f64,
    /// Right inset, percent.
    pub right: f64,
    /// Bottom inset, percent.
    pub bottom: f64,
    /// Left inset, percent.
    pub left: f64,
    /// Corner radius, px.
    pub radius: f64,
}

impl ClipInset {
    /// CSS `clip-path` value.
    pub fn to_css(self) -> String {
        let base = format!(
            "inset({}% {}% {}% {}%",
            fmt_num(self.top),
            fmt_num(self.right),
            fmt_num(self.bottom),
            fmt_num(self.left)
        );
        if self.radius > 0.0 {
            format!("{base} round {}px)", fmt_num(self.radius))
        } else {
            format!("{base})")
        }
    }

    /// Pixel insets for an element box.
    pub fn insets_for(self, bounds: Rect) -> Insets {
        let w = bounds.width() / 100.0;
        let h = bounds.height() / 100.0;
        Insets::new(self.left * w, self.top * h, self.right * w, self.bottom * h)
    }

    /// Visible region of `bounds` after clipping.
    pub fn clip(self, bounds: Rect) -> RoundedRect {
        let inner = (bounds - self.insets_for(bounds)).abs();
        let max_r = inner.width().min(inner.height()) / 2.0;
        RoundedRect::from_rect(inner, self.radius.clamp(0.0, max_r.max(0.0)))
    }
}

/// Typed style for one element; unset properties take CSS initial values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    /// Opacity.
    pub opacity: f64,
    /// Horizontal translation, px.
    pub translate_x: f64,
    /// Vertical translation, px.
    pub translate_y: f64,
    /// Vertical translation in viewport heights (overrides px when set).
    pub translate_y_vh: Option<f64>,
    /// Uniform scale.
    pub scale: f64,
    /// Clip path, if any inset property is bound.
    pub clip: Option<ClipInset>,
    /// Pointer-events switch, if bound.
    pub interactive: Option<bool>,
}

impl ElementStyle {
    /// CSS transform value.
    pub fn transform_css(&self) -> String {
        let ty = match self.translate_y_vh {
            Some(vh) => format!("{}vh", fmt_num(vh)),
            None => format!("{}px", fmt_num(self.translate_y)),
        };
        let mut out = format!("translate({}px, {ty})", fmt_num(self.translate_x));
        if self.scale != 1.0 {
            out.push_str(&format!(" scale({})", fmt_num(self.scale)));
        }
        out
    }

    /// CSS declarations for this element.
    pub fn to_css(&self) -> BTreeMap<&'static str, String> {
        let mut css = BTreeMap::new();
        css.insert("opacity", fmt_num(self.opacity));
        css.insert("transform", self.transform_css());
        if let Some(clip) = self.clip {
            css.insert("clip-path", clip.to_css());
        }
        if let Some(interactive) = self.interactive {
            css.insert(
                "pointer-events",
                if interactive { "auto" } else { "none" }.to_string(),
            );
        }
        css
    }
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/style.rs"]
mod tests;
