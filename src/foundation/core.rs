use crate::foundation::error::{ScrollfxError, ScrollfxResult};

pub use kurbo::{Insets, Point, Rect, RoundedRect, Vec2};

/// Virtual wall-clock time in milliseconds.
///
/// Every timer-gated behavior (overlay phases, scroll lock release, smooth scrolling) is
/// expressed against this clock so hosts can drive it from `performance.now()`, a native
/// frame clock, or a test loop.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero.
    pub const ZERO: Millis = Millis(0);

    /// Return `self + ms`, saturating at `u64::MAX`.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (zero when `earlier` is in the future).
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height (`window.innerHeight`).
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> ScrollfxResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ScrollfxError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Convert a viewport-height fraction (`vh / 100`) into pixels.
    pub fn vh(self, fraction: f64) -> f64 {
        self.height * fraction
    }
}

/// One wheel event as seen by a window-level listener.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WheelInput {
    /// Vertical delta; positive means downward intent.
    pub delta_y: f64,
}

impl WheelInput {
    /// Wheel event with vertical delta `delta_y`.
    pub fn new(delta_y: f64) -> Self {
        Self { delta_y }
    }

    /// `true` for downward scroll intent.
    pub fn is_down(self) -> bool {
        self.delta_y > 0.0
    }

    /// `true` for upward scroll intent.
    pub fn is_up(self) -> bool {
        self.delta_y < 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
