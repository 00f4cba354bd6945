use crate::foundation::{
    core::{Rect, Viewport},
    error::{ScrollfxError, ScrollfxResult},
    math::clamp_unit,
};

/// How an element's bounding box maps to a `[0, 1]` progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressStrategy {
    /// How far a pinned (sticky) region has been scrolled through:
    /// `clamp(-top / (height - viewport_height), 0, 1)`.
    Pinned,
    /// How much of a non-pinned element has passed through a reveal window.
    ///
    /// The window opens when the element top reaches `start * viewport_height` and closes
    /// when it reaches `end * element_height` (negative values are above the viewport top).
    Reveal {
        /// Window start as a fraction of viewport height.
        start: f64,
        /// Window end as a fraction of element height.
        end: f64,
    },
    /// Reveal measured purely against the viewport: `clamp((vh - top) / (vh * span), 0, 1)`.
    ViewportReveal {
        /// Window length as a fraction of viewport height.
        span: f64,
    },
}

impl ProgressStrategy {
    /// Reject non-finite or degenerate parameters.
    pub fn validate(&self) -> ScrollfxResult<()> {
        match *self {
            Self::Pinned => Ok(()),
            Self::Reveal { start, end } => {
                if !(start.is_finite() && end.is_finite()) {
                    return Err(ScrollfxError::validation(
                        "reveal start/end must be finite",
                    ));
                }
                Ok(())
            }
            Self::ViewportReveal { span } => {
                if !span.is_finite() || span <= 0.0 {
                    return Err(ScrollfxError::validation(
                        "viewport reveal span must be finite and > 0",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Measure progress for an element whose viewport-relative bounding box is `rect`.
    ///
    /// Returns `None` when the geometry cannot produce a finite value (container not taller
    /// than the viewport, zero-length reveal window); callers keep their previous progress.
    pub fn measure(&self, rect: Rect, viewport: Viewport) -> Option<f64> {
        let top = rect.y0;
        if !top.is_finite() {
            return None;
        }
        let raw = match *self {
            Self::Pinned => {
                let scrollable = rect.height() - viewport.height;
                if scrollable.is_nan() || scrollable <= 0.0 {
                    return None;
                }
                -top / scrollable
            }
            Self::Reveal { start, end } => {
                let start_px = viewport.vh(start);
                let end_px = rect.height() * end;
                let span = start_px - end_px;
                if span == 0.0 || !span.is_finite() {
                    return None;
                }
                (start_px - top) / span
            }
            Self::ViewportReveal { span } => {
                let window = viewport.vh(span);
                if window.is_nan() || window <= 0.0 {
                    return None;
                }
                (viewport.height - top) / window
            }
        };
        raw.is_finite().then(|| clamp_unit(raw))
    }
}

/// Per-instance progress readout, recomputed on mount and every scroll/resize event.
#[derive(Clone, Debug)]
pub struct ScrollProgressTracker {
    strategy: ProgressStrategy,
    progress: f64,
}

impl ScrollProgressTracker {
    /// Tracker starting at progress 0.
    pub fn new(strategy: ProgressStrategy) -> Self {
        Self {
            strategy,
            progress: 0.0,
        }
    }

    /// Strategy this tracker measures with.
    pub fn strategy(&self) -> ProgressStrategy {
        self.strategy
    }

    /// Last accepted progress value.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Re-measure; invalid geometry is a silent no-op.
    ///
    /// Returns the new progress when the update was accepted.
    pub fn update(&mut self, rect: Rect, viewport: Viewport) -> Option<f64> {
        let p = self.strategy.measure(rect, viewport)?;
        self.progress = p;
        Some(p)
    }

    /// Forget the last readout (mount/unmount).
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}

/// Absolute scroll window expressed in viewport heights, e.g. the header that only shows
/// between `1.2` and `2.5` viewport heights of page scroll.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollWindow {
    /// Lower bound (exclusive) in viewport heights.
    pub from_vh: f64,
    /// Upper bound (exclusive) in viewport heights.
    pub to_vh: f64,
}

impl ScrollWindow {
    /// `true` when `scroll_y` lies strictly inside the window.
    pub fn contains(self, scroll_y: f64, viewport: Viewport) -> bool {
        scroll_y > viewport.vh(self.from_vh) && scroll_y < viewport.vh(self.to_vh)
    }

    /// Header visibility: inside the window, or forced while any overlay is open.
    pub fn visible(self, scroll_y: f64, viewport: Viewport, overlay_open: bool) -> bool {
        overlay_open || self.contains(scroll_y, viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
