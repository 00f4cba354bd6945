//! Character-staggered text reveal.
//!
//! A single reveal progress sweeps across the characters of one or more paragraphs; each
//! character brightens from a dim floor to full opacity over its own slice of progress.

use crate::foundation::math::clamp_unit;

/// Opacity of a character that has not been reached yet.
pub const DIM_OPACITY: f64 = 0.15;

/// Progress of character `index` out of `total`: `clamp((p - i/total) * total, 0, 1)`.
pub fn char_progress(progress: f64, index: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    let n = total as f64;
    clamp_unit((progress - index as f64 / n) * n)
}

/// `DIM_OPACITY + (1 - DIM_OPACITY) * char_progress`.
pub fn char_opacity(progress: f64, index: usize, total: usize) -> f64 {
    DIM_OPACITY + (1.0 - DIM_OPACITY) * char_progress(progress, index, total)
}

/// Paragraphs sharing one reveal progress, partitioned by character count.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextReveal {
    paragraphs: Vec<String>,
}

impl TextReveal {
    /// Reveal over `paragraphs` in reading order.
    pub fn new<S: Into<String>>(paragraphs: impl IntoIterator<Item = S>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        }
    }

    /// Paragraph texts.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.paragraphs.iter().map(|p| p.chars().count())
    }

    /// Total characters across paragraphs.
    pub fn total_chars(&self) -> usize {
        self.lengths().sum()
    }

    /// Local progress of paragraph `idx`: `clamp((p * total - chars_before) / len, 0, 1)`.
    pub fn paragraph_progress(&self, progress: f64, idx: usize) -> f64 {
        let total = self.total_chars() as f64;
        let before: usize = self.lengths().take(idx).sum();
        let len = self.lengths().nth(idx).unwrap_or(0);
        if len == 0 {
            return if progress * total >= before as f64 { 1.0 } else { 0.0 };
        }
        clamp_unit((progress * total - before as f64) / len as f64)
    }

    /// Per-character opacities for every paragraph.
    pub fn opacities(&self, progress: f64) -> Vec<Vec<f64>> {
        self.lengths()
            .enumerate()
            .map(|(idx, len)| {
                let local = self.paragraph_progress(progress, idx);
                (0..len).map(|i| char_opacity(local, i, len)).collect()
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/reveal.rs"]
mod tests;
