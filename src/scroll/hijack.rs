use crate::foundation::{
    core::{Millis, WheelInput},
    error::{ScrollfxError, ScrollfxResult},
};

/// Tuning for boundary auto-snap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HijackSpec {
    /// Downward wheel input below this progress snaps to the end of the region.
    #[serde(default = "default_enter_below")]
    pub enter_below: f64,
    /// Upward wheel input above this progress snaps back to the page top.
    #[serde(default = "default_return_above")]
    pub return_above: f64,
    /// Fixed lock duration, matching the assumed length of a smooth scroll.
    #[serde(default = "default_lock_ms")]
    pub lock_ms: u64,
    /// Absolute scroll slack past the region end before upward input is left alone.
    #[serde(default = "default_past_tolerance_px")]
    pub past_tolerance_px: f64,
}

fn default_enter_below() -> f64 {
    0.1
}

fn default_return_above() -> f64 {
    0.9
}

fn default_lock_ms() -> u64 {
    1200
}

fn default_past_tolerance_px() -> f64 {
    10.0
}

impl Default for HijackSpec {
    fn default() -> Self {
        Self {
            enter_below: default_enter_below(),
            return_above: default_return_above(),
            lock_ms: default_lock_ms(),
            past_tolerance_px: default_past_tolerance_px(),
        }
    }
}

impl HijackSpec {
    /// Zones must be ordered inside `[0, 1]` and must not overlap.
    pub fn validate(&self) -> ScrollfxResult<()> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(self.enter_below) || !in_unit(self.return_above) {
            return Err(ScrollfxError::validation(
                "hijack thresholds must be finite and in [0, 1]",
            ));
        }
        if self.enter_below > self.return_above {
            return Err(ScrollfxError::validation(
                "hijack enter_below must be <= return_above",
            ));
        }
        if !self.past_tolerance_px.is_finite() || self.past_tolerance_px < 0.0 {
            return Err(ScrollfxError::validation(
                "hijack past_tolerance_px must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Document-space extent of a pinned region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RegionExtent {
    /// Region top in document coordinates (`offsetTop`).
    pub top: f64,
    /// Region height minus viewport height.
    pub scrollable: f64,
}

impl RegionExtent {
    /// Document scroll position at which the region is fully scrolled through.
    pub fn end(self) -> f64 {
        self.top + self.scrollable
    }
}

/// Which way an auto-snap moves the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SnapDirection {
    /// From the splash state to the end of the region.
    Forward,
    /// From the region end back to the page top.
    Back,
}

/// Programmatic smooth scroll requested by the controller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SnapRequest {
    /// Snap direction.
    pub direction: SnapDirection,
    /// Absolute document scroll target.
    pub scroll_to: f64,
}

/// Outcome of one wheel event.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum WheelVerdict {
    /// Outside every trigger zone; native scrolling proceeds.
    PassThrough,
    /// A snap is in flight; the event is ignored without being cancelled.
    Locked,
    /// Cancel the native event and start the programmatic scroll.
    Snap(SnapRequest),
}

impl WheelVerdict {
    /// Whether the listener must call `preventDefault`.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Snap(_))
    }
}

/// Boundary auto-snap for a pinned region.
///
/// The re-entrancy lock is released by a fixed timer, not by the scroll actually settling.
/// On slow devices the lock can clear while the smooth scroll is still running, and on fast
/// ones it can outlive it; both races are accepted.
#[derive(Clone, Debug)]
pub struct ScrollHijackController {
    spec: HijackSpec,
    locked_until: Option<Millis>,
}

impl ScrollHijackController {
    /// Unlocked controller.
    pub fn new(spec: HijackSpec) -> Self {
        Self {
            spec,
            locked_until: None,
        }
    }

    /// Active tuning.
    pub fn spec(&self) -> HijackSpec {
        self.spec
    }

    /// Fire the release timer if its deadline has passed.
    pub fn advance(&mut self, now: Millis) {
        if let Some(deadline) = self.locked_until
            && now >= deadline
        {
            self.locked_until = None;
            tracing::trace!(now = now.0, "scroll lock released");
        }
    }

    /// Whether a snap is still considered in flight at `now`.
    pub fn is_locked(&self, now: Millis) -> bool {
        self.locked_until.is_some_and(|deadline| now < deadline)
    }

    /// Decide what to do with a wheel event given the latest (unsmoothed) progress and the
    /// absolute page scroll position.
    pub fn on_wheel(
        &mut self,
        wheel: WheelInput,
        progress: f64,
        scroll_y: f64,
        region: RegionExtent,
        now: Millis,
    ) -> WheelVerdict {
        self.advance(now);
        if self.locked_until.is_some() {
            return WheelVerdict::Locked;
        }

        let request = if progress < self.spec.enter_below && wheel.is_down() {
            Some(SnapRequest {
                direction: SnapDirection::Forward,
                scroll_to: region.end(),
            })
        } else if progress > self.spec.return_above && progress <= 1.0 && wheel.is_up() {
            // Absolute position disambiguates "top of the next section" from "still here".
            let past_region = scroll_y > region.end() + self.spec.past_tolerance_px;
            (!past_region).then_some(SnapRequest {
                direction: SnapDirection::Back,
                scroll_to: 0.0,
            })
        } else {
            None
        };

        match request {
            Some(req) => {
                self.locked_until = Some(now.after(self.spec.lock_ms));
                tracing::debug!(
                    direction = ?req.direction,
                    scroll_to = req.scroll_to,
                    progress,
                    "auto-snap"
                );
                WheelVerdict::Snap(req)
            }
            None => WheelVerdict::PassThrough,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/hijack.rs"]
mod tests;
