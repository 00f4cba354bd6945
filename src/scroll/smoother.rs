use crate::foundation::{
    error::{ScrollfxError, ScrollfxResult},
    math::clamp_unit,
};

/// Damping used by pinned sections driven by page scroll.
pub const SECTION_DAMPING: f64 = 0.06;
/// Damping used by wheel dials and scale followers.
pub const DIAL_DAMPING: f64 = 0.08;

/// Exponential follower decoupling raw progress input from rendered state.
///
/// Every frame `current += (target - current) * damping`. With `damping` in `(0, 1]` the
/// approach never overshoots; it never reaches the target exactly either, which is fine for
/// visual continuity.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressSmoother {
    current: f64,
    target: f64,
    damping: f64,
}

impl ProgressSmoother {
    /// Follower at rest on 0.
    pub fn new(damping: f64) -> ScrollfxResult<Self> {
        validate_damping(damping)?;
        Ok(Self {
            current: 0.0,
            target: 0.0,
            damping,
        })
    }

    /// Damping factor.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Smoothed value, as read by mappers.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Latest target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Set the value to approach; clamped into `[0, 1]`.
    pub fn set_target(&mut self, target: f64) {
        self.target = clamp_unit(target);
    }

    /// Advance one frame and return the new smoothed value.
    pub fn tick(&mut self) -> f64 {
        self.current = clamp_unit(self.current + (self.target - self.current) * self.damping);
        self.current
    }

    /// Distance still to cover.
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).abs()
    }

    /// Return both values to 0 (mount/unmount).
    pub fn reset(&mut self) {
        self.current = 0.0;
        self.target = 0.0;
    }
}

pub(crate) fn validate_damping(damping: f64) -> ScrollfxResult<()> {
    if !damping.is_finite() || damping <= 0.0 || damping > 1.0 {
        return Err(ScrollfxError::validation("damping must be in (0, 1]"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smoother.rs"]
mod tests;
