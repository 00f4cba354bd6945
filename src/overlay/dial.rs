use crate::{
    choreo::step::{StepChange, StepSelector, StepSpec},
    foundation::{
        error::{ScrollfxError, ScrollfxResult},
        math::clamp_unit,
    },
    scroll::smoother::{DIAL_DAMPING, ProgressSmoother},
};

/// Wheel dial tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DialSpec {
    /// Progress added per unit of wheel `delta_y`.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    /// Smoothing factor.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Number of panels cycled through.
    pub steps: usize,
}

fn default_sensitivity() -> f64 {
    0.0008
}

fn default_damping() -> f64 {
    DIAL_DAMPING
}

impl DialSpec {
    /// Dial over `steps` panels with the default feel.
    pub fn new(steps: usize) -> Self {
        Self {
            sensitivity: default_sensitivity(),
            damping: default_damping(),
            steps,
        }
    }

    /// Positive finite sensitivity; damping and steps as for their components.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ScrollfxError::validation(
                "dial sensitivity must be finite and > 0",
            ));
        }
        crate::scroll::smoother::validate_damping(self.damping)?;
        StepSpec::unit(self.steps).validate()
    }
}

/// Dial state after one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DialFrame {
    /// Smoothed dial value.
    pub progress: f64,
    /// Active panel.
    pub active: usize,
    /// Present only when the active panel changed.
    pub change: Option<StepChange>,
}

/// Wheel-delta accumulator driving an internal panel list, independent of page scroll.
#[derive(Clone, Debug)]
pub struct WheelDial {
    spec: DialSpec,
    value: f64,
    smoother: ProgressSmoother,
    selector: StepSelector,
}

impl WheelDial {
    /// Dial at rest on panel 0.
    pub fn new(spec: DialSpec) -> ScrollfxResult<Self> {
        spec.validate()?;
        let mut selector = StepSelector::new(StepSpec::unit(spec.steps))?;
        // Panel 0 is what the overlay shows on mount; no change event for it.
        selector.update(0.0);
        Ok(Self {
            spec,
            value: 0.0,
            smoother: ProgressSmoother::new(spec.damping)?,
            selector,
        })
    }

    /// Accumulated (unsmoothed) value in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accumulate one wheel delta.
    pub fn push(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.value = clamp_unit(self.value + delta_y * self.spec.sensitivity);
        self.smoother.set_target(self.value);
    }

    /// Advance one frame.
    pub fn on_frame(&mut self) -> DialFrame {
        let progress = self.smoother.tick();
        let change = self.selector.update(progress);
        DialFrame {
            progress,
            active: self.selector.active().unwrap_or(0),
            change,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/dial.rs"]
mod tests;
