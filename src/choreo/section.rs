use crate::{
    choreo::{
        phase::PhaseMapper,
        step::{ItemState, StepChange, StepSelector, StepSpec, SteppedItems, TrackAlign, step_label},
        style::StyleFrame,
    },
    foundation::{
        core::{Millis, Rect, Viewport, WheelInput},
        error::{ScrollfxError, ScrollfxResult},
    },
    scroll::{
        hijack::{HijackSpec, RegionExtent, ScrollHijackController, WheelVerdict},
        smoother::{ProgressSmoother, validate_damping},
        tracker::{ProgressStrategy, ScrollProgressTracker},
    },
};

/// Static description of one choreographed section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    /// Stable identifier, unique within a choreography.
    pub id: String,
    /// How bounding-box geometry maps to progress.
    pub strategy: ProgressStrategy,
    /// Virtual wrapper height in viewport heights (`2.5` for a `250vh` pinned region).
    ///
    /// Only stretches the scrollable area so progress advances slowly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_vh: Option<f64>,
    /// Smoothing factor; `None` renders raw progress directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    /// Property bindings.
    #[serde(default)]
    pub phases: PhaseMapper,
    /// Optional discrete step quantization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepSpec>,
    /// Keys of the stepped items, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    /// Horizontal title track following the active step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackAlign>,
    /// Boundary auto-snap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hijack: Option<HijackSpec>,
}

impl SectionSpec {
    /// Pinned section skeleton.
    pub fn pinned(id: impl Into<String>, height_vh: f64) -> Self {
        Self {
            id: id.into(),
            strategy: ProgressStrategy::Pinned,
            height_vh: Some(height_vh),
            damping: None,
            phases: PhaseMapper::default(),
            steps: None,
            items: Vec::new(),
            track: None,
            hijack: None,
        }
    }

    /// Non-pinned reveal section skeleton.
    pub fn reveal(id: impl Into<String>, strategy: ProgressStrategy) -> Self {
        Self {
            strategy,
            height_vh: None,
            ..Self::pinned(id, 1.0)
        }
    }

    /// Check every component's parameters and their mutual consistency.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScrollfxError::validation("section id must be non-empty"));
        }
        let ctx = |e: ScrollfxError| ScrollfxError::validation(format!("section '{}': {e}", self.id));
        self.strategy.validate().map_err(ctx)?;
        if let Some(h) = self.height_vh
            && (!h.is_finite() || h <= 0.0)
        {
            return Err(ctx(ScrollfxError::validation(
                "height_vh must be finite and > 0",
            )));
        }
        if let Some(k) = self.damping {
            validate_damping(k).map_err(ctx)?;
        }
        self.phases.validate().map_err(ctx)?;
        if let Some(steps) = &self.steps {
            steps.validate().map_err(ctx)?;
            if !self.items.is_empty() && self.items.len() != steps.count {
                return Err(ctx(ScrollfxError::validation(format!(
                    "{} items for {} steps",
                    self.items.len(),
                    steps.count
                ))));
            }
        } else if !self.items.is_empty() || self.track.is_some() {
            return Err(ctx(ScrollfxError::validation(
                "items/track require steps",
            )));
        }
        if let Some(h) = &self.hijack {
            if self.strategy != ProgressStrategy::Pinned {
                return Err(ctx(ScrollfxError::validation(
                    "hijack requires a pinned strategy",
                )));
            }
            h.validate().map_err(ctx)?;
        }
        Ok(())
    }
}

/// Everything that happens when the active step changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepEvent {
    /// Index transition.
    pub change: StepChange,
    /// Counter label for the new index.
    pub label: String,
    /// Highlight state per item key.
    pub items: Vec<(String, ItemState)>,
    /// New track translation, if the section has a track.
    pub track_shift: Option<f64>,
}

/// Output of one animation frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionFrame {
    /// Progress the frame was rendered at (smoothed when damping is set).
    pub progress: f64,
    /// Resolved style values.
    pub style: StyleFrame,
    /// Active step, if the section is stepped.
    pub active: Option<usize>,
    /// Present only on frames where the active step changed.
    pub step: Option<StepEvent>,
    /// Current track translation.
    pub track_shift: Option<f64>,
}

/// A mounted section instance: tracker, smoother, mapper, selector and hijack wired
/// together.
#[derive(Clone, Debug)]
pub struct Section {
    spec: SectionSpec,
    tracker: ScrollProgressTracker,
    smoother: Option<ProgressSmoother>,
    steps: Option<StepSelector>,
    items: SteppedItems<String>,
    hijack: Option<ScrollHijackController>,
    track_shift: Option<f64>,
}

impl Section {
    /// Instantiate a validated spec.
    pub fn new(spec: SectionSpec) -> ScrollfxResult<Self> {
        spec.validate()?;
        let smoother = spec.damping.map(ProgressSmoother::new).transpose()?;
        let steps = spec.steps.map(StepSelector::new).transpose()?;
        let items = SteppedItems::new(spec.items.clone());
        let hijack = spec.hijack.map(ScrollHijackController::new);
        Ok(Self {
            tracker: ScrollProgressTracker::new(spec.strategy),
            smoother,
            steps,
            items,
            hijack,
            track_shift: None,
            spec,
        })
    }

    /// Spec this section was built from.
    pub fn spec(&self) -> &SectionSpec {
        &self.spec
    }

    /// Section id.
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// Latest raw progress from the tracker.
    pub fn raw_progress(&self) -> f64 {
        self.tracker.progress()
    }

    /// Progress mappers read: smoothed when damping is set, raw otherwise.
    pub fn rendered_progress(&self) -> f64 {
        match &self.smoother {
            Some(s) => s.current(),
            None => self.tracker.progress(),
        }
    }

    /// Scroll/resize handler: re-measure and retarget the smoother.
    ///
    /// The smoother sees the new target on the next [`Section::on_frame`].
    pub fn on_scroll(&mut self, rect: Rect, viewport: Viewport) -> Option<f64> {
        let p = self.tracker.update(rect, viewport)?;
        if let Some(s) = &mut self.smoother {
            s.set_target(p);
        }
        Some(p)
    }

    /// Per-frame callback.
    pub fn on_frame(&mut self) -> SectionFrame {
        let progress = match &mut self.smoother {
            Some(s) => s.tick(),
            None => self.tracker.progress(),
        };
        let style = self.spec.phases.evaluate(progress);

        let step = self.steps.as_mut().and_then(|sel| sel.update(progress)).map(|change| {
            self.track_shift = self
                .spec
                .track
                .as_ref()
                .and_then(|t| t.shift_for(change.current));
            tracing::debug!(
                section = %self.spec.id,
                previous = ?change.previous,
                current = change.current,
                "step changed"
            );
            StepEvent {
                change,
                label: step_label(change.current),
                items: self
                    .items
                    .states(change.current)
                    .map(|(k, s)| (k.clone(), s))
                    .collect(),
                track_shift: self.track_shift,
            }
        });

        SectionFrame {
            progress,
            style,
            active: self.steps.as_ref().and_then(StepSelector::active),
            step,
            track_shift: self.track_shift,
        }
    }

    /// Window wheel handler (only meaningful with a hijack spec).
    pub fn on_wheel(
        &mut self,
        wheel: WheelInput,
        scroll_y: f64,
        region: RegionExtent,
        now: Millis,
    ) -> WheelVerdict {
        let progress = self.tracker.progress();
        match &mut self.hijack {
            Some(h) => h.on_wheel(wheel, progress, scroll_y, region, now),
            None => WheelVerdict::PassThrough,
        }
    }

    /// Fire due timers.
    pub fn advance(&mut self, now: Millis) {
        if let Some(h) = &mut self.hijack {
            h.advance(now);
        }
    }

    /// Whether a window-level wheel listener is needed.
    pub fn wants_wheel(&self) -> bool {
        self.hijack.is_some()
    }

    /// Whether a per-frame loop is needed (smoothing or stepped state).
    pub fn wants_frames(&self) -> bool {
        self.smoother.is_some() || self.steps.is_some()
    }

    /// Return to the mount state.
    pub fn reset(&mut self) {
        self.tracker.reset();
        if let Some(s) = &mut self.smoother {
            s.reset();
        }
        if let Some(sel) = &mut self.steps {
            sel.reset();
        }
        self.track_shift = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/section.rs"]
mod tests;
