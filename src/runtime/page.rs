use crate::{
    choreo::section::SectionSpec,
    foundation::{
        core::{Millis, Rect, Viewport},
        math::{clamp, lerp, smoothstep},
    },
    scroll::hijack::RegionExtent,
};

/// Duration of a programmatic `behavior: smooth` scroll.
pub const SMOOTH_SCROLL_MS: u64 = 800;

/// Eased programmatic scroll between two document offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollTween {
    /// Start offset.
    pub from: f64,
    /// Target offset.
    pub to: f64,
    /// Start time.
    pub start: Millis,
    /// Duration, at least 1 ms.
    pub duration_ms: u64,
}

impl ScrollTween {
    /// New tween starting at `start`.
    pub fn new(from: f64, to: f64, start: Millis, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start,
            duration_ms: duration_ms.max(1),
        }
    }

    /// Offset at `now`.
    pub fn sample(&self, now: Millis) -> f64 {
        let t = now.since(self.start) as f64 / self.duration_ms as f64;
        lerp(self.from, self.to, smoothstep(t))
    }

    /// Whether the tween has reached its target at `now`.
    pub fn is_done(&self, now: Millis) -> bool {
        now.since(self.start) >= self.duration_ms
    }

    /// Restart from the current sampled position towards a new target.
    pub fn retarget(&mut self, now: Millis, to: f64, duration_ms: u64) {
        *self = Self::new(self.sample(now), to, now, duration_ms);
    }
}

/// Document-space placement of a section wrapper.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionLayout {
    /// `offsetTop`.
    pub top: f64,
    /// Wrapper height in px.
    pub height: f64,
}

impl SectionLayout {
    /// Placement at `top` using the section's `height_vh` (one viewport when unset).
    pub fn for_spec(spec: &SectionSpec, top: f64, viewport: Viewport) -> Self {
        Self {
            top,
            height: viewport.vh(spec.height_vh.unwrap_or(1.0)),
        }
    }

    /// Pinned region extent for hijack decisions.
    pub fn region(self, viewport: Viewport) -> RegionExtent {
        RegionExtent {
            top: self.top,
            scrollable: self.height - viewport.height,
        }
    }
}

/// Stack sections top to bottom, in order.
pub fn stack_sections(specs: &[SectionSpec], viewport: Viewport) -> Vec<SectionLayout> {
    let mut top = 0.0;
    specs
        .iter()
        .map(|spec| {
            let layout = SectionLayout::for_spec(spec, top, viewport);
            top += layout.height;
            layout
        })
        .collect()
}

/// The scrolled document: viewport, scroll position, programmatic smooth scrolling and the
/// `overflow: hidden` lock overlays hold.
#[derive(Clone, Debug)]
pub struct Page {
    viewport: Viewport,
    document_height: f64,
    scroll_y: f64,
    tween: Option<ScrollTween>,
    scroll_locks: u32,
}

impl Page {
    /// Page scrolled to the top.
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        Self {
            viewport,
            document_height: document_height.max(viewport.height),
            scroll_y: 0.0,
            tween: None,
            scroll_locks: 0,
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Document height in px.
    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// `window.scrollY`.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    /// Change the viewport; the scroll offset is re-clamped.
    pub fn set_viewport(&mut self, viewport: Viewport, document_height: f64) {
        self.viewport = viewport;
        self.document_height = document_height.max(viewport.height);
        self.scroll_y = clamp(self.scroll_y, 0.0, self.max_scroll());
    }

    /// Instant jump; cancels any smooth scroll. Returns whether the offset changed.
    pub fn scroll_to(&mut self, y: f64) -> bool {
        self.tween = None;
        self.set_scroll(y)
    }

    /// Start (or retarget) a smooth scroll towards `y`.
    pub fn smooth_scroll_to(&mut self, y: f64, now: Millis) {
        let to = clamp(y, 0.0, self.max_scroll());
        match &mut self.tween {
            Some(tween) => tween.retarget(now, to, SMOOTH_SCROLL_MS),
            None => self.tween = Some(ScrollTween::new(self.scroll_y, to, now, SMOOTH_SCROLL_MS)),
        }
    }

    /// Native scrolling from an uncancelled wheel event. No-op while locked.
    pub fn wheel_scroll(&mut self, delta_y: f64) -> bool {
        if self.is_locked() || !delta_y.is_finite() {
            return false;
        }
        self.tween = None;
        self.set_scroll(self.scroll_y + delta_y)
    }

    /// Advance the smooth scroll. Returns whether the offset changed.
    pub fn step(&mut self, now: Millis) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        let moved = self.set_scroll(tween.sample(now));
        if tween.is_done(now) {
            self.tween = None;
        }
        moved
    }

    /// Whether a smooth scroll is running.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Acquire the document scroll lock.
    pub fn lock(&mut self) {
        self.scroll_locks += 1;
    }

    /// Release one lock acquisition.
    pub fn unlock(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }

    /// Whether user scrolling is blocked.
    pub fn is_locked(&self) -> bool {
        self.scroll_locks > 0
    }

    /// Viewport-relative bounding box of a laid-out section.
    pub fn rect_of(&self, layout: SectionLayout) -> Rect {
        let top = layout.top - self.scroll_y;
        Rect::new(0.0, top, self.viewport.width, top + layout.height)
    }

    fn set_scroll(&mut self, y: f64) -> bool {
        let y = clamp(y, 0.0, self.max_scroll());
        let moved = y != self.scroll_y;
        self.scroll_y = y;
        moved
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/page.rs"]
mod tests;
