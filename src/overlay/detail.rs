//! Detail panel that visually grows out of the card that opened it.

use crate::{
    choreo::style::ClipInset,
    foundation::{
        core::{Millis, Rect, Viewport},
        error::{ScrollfxError, ScrollfxResult},
    },
    runtime::timers::TimerQueue,
};

/// Lifecycle of an origin-anchored detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DetailPhase {
    /// Panel drawn over the clicked card's rectangle.
    Origin,
    /// Panel expanded to the full viewport.
    Settled,
    /// Content fading out.
    Closing,
    /// Panel shrinking back onto the card.
    Returning,
}

/// Delays for the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DetailTimings {
    /// Frames painted at the origin rectangle before expanding.
    pub settle_frames: u32,
    /// Close request -> return transition (internal scroll resets here).
    pub return_after_ms: u64,
    /// Close request -> unmount callback.
    pub unmount_after_ms: u64,
}

impl Default for DetailTimings {
    fn default() -> Self {
        Self {
            settle_frames: 2,
            return_after_ms: 400,
            unmount_after_ms: 1150,
        }
    }
}

impl DetailTimings {
    /// The return transition must start before the unmount fires.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.return_after_ms >= self.unmount_after_ms {
            return Err(ScrollfxError::validation(format!(
                "detail return_after_ms ({}) must be < unmount_after_ms ({})",
                self.return_after_ms, self.unmount_after_ms
            )));
        }
        Ok(())
    }
}

/// Notifications from the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DetailEvent {
    /// Phase transition.
    Phase(DetailPhase),
    /// Jump the panel's internal scroll container back to the top, instantly.
    ResetScroll,
    /// The owner must remove the panel.
    Unmount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Return,
    Unmount,
}

/// Origin-anchored transition seeded with the bounding rectangle the activated card reported.
#[derive(Clone, Debug)]
pub struct DetailTransition {
    origin: Rect,
    viewport: Viewport,
    timings: DetailTimings,
    phase: DetailPhase,
    frames: u32,
    closing: bool,
    unmounted: bool,
    timers: TimerQueue<Timer>,
}

impl DetailTransition {
    /// Open a panel over `origin` (viewport coordinates).
    pub fn open(origin: Rect, viewport: Viewport, timings: DetailTimings) -> ScrollfxResult<Self> {
        timings.validate()?;
        Ok(Self {
            origin,
            viewport,
            timings,
            phase: DetailPhase::Origin,
            frames: 0,
            closing: false,
            unmounted: false,
            timers: TimerQueue::new(),
        })
    }

    /// Current phase.
    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Rectangle the transition started from.
    pub fn origin(&self) -> Rect {
        self.origin
    }

    /// `true` once the unmount notification has fired.
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Per-frame callback; expands after the configured number of painted frames.
    pub fn on_frame(&mut self) -> Option<DetailEvent> {
        if self.phase != DetailPhase::Origin || self.closing {
            return None;
        }
        self.frames += 1;
        if self.frames >= self.timings.settle_frames {
            self.phase = DetailPhase::Settled;
            return Some(DetailEvent::Phase(DetailPhase::Settled));
        }
        None
    }

    /// Close handler; latched like overlay closes.
    pub fn request_close(&mut self, now: Millis) -> Vec<DetailEvent> {
        let mut events = self.advance(now);
        if self.closing || self.unmounted {
            return events;
        }
        self.closing = true;
        self.phase = DetailPhase::Closing;
        events.push(DetailEvent::Phase(DetailPhase::Closing));
        self.timers
            .schedule(now.after(self.timings.return_after_ms), Timer::Return);
        self.timers
            .schedule(now.after(self.timings.unmount_after_ms), Timer::Unmount);
        events
    }

    /// Fire due timers.
    pub fn advance(&mut self, now: Millis) -> Vec<DetailEvent> {
        let mut events = Vec::new();
        while let Some((_, timer)) = self.timers.pop_due(now) {
            match timer {
                Timer::Return => {
                    self.phase = DetailPhase::Returning;
                    events.push(DetailEvent::ResetScroll);
                    events.push(DetailEvent::Phase(DetailPhase::Returning));
                }
                Timer::Unmount => {
                    self.unmounted = true;
                    self.timers.cancel_where(|_| true);
                    events.push(DetailEvent::Unmount);
                }
            }
        }
        events
    }

    /// Panel bounds for the current phase.
    pub fn panel_rect(&self) -> Rect {
        match self.phase {
            DetailPhase::Origin | DetailPhase::Returning => self.origin,
            DetailPhase::Settled | DetailPhase::Closing => {
                Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height)
            }
        }
    }

    /// Clip path of a full-viewport panel that shows only the current panel rectangle.
    pub fn clip(&self) -> ClipInset {
        let r = self.panel_rect();
        let w = self.viewport.width / 100.0;
        let h = self.viewport.height / 100.0;
        ClipInset {
            top: r.y0 / h,
            right: (self.viewport.width - r.x1) / w,
            bottom: (self.viewport.height - r.y1) / h,
            left: r.x0 / w,
            radius: 0.0,
        }
    }
}

/// Index of the item whose vertical center is closest to the scroll container's center.
///
/// `items` holds `(offset_top, height)` per item; ties go to the earlier item.
pub fn nearest_item(scroll_top: f64, client_height: f64, items: &[(f64, f64)]) -> Option<usize> {
    let center = scroll_top + client_height / 2.0;
    items
        .iter()
        .enumerate()
        .map(|(i, (top, height))| (i, (center - (top + height / 2.0)).abs()))
        .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/detail.rs"]
mod tests;
