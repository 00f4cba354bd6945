use crate::{
    foundation::{
        core::{Millis, WheelInput},
        error::{ScrollfxError, ScrollfxResult},
    },
    overlay::dial::{DialFrame, DialSpec, WheelDial},
    runtime::timers::TimerQueue,
};

/// Lifecycle phase of a full-screen overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPhase {
    /// Mounted, before the first paint settles.
    Closed,
    /// Fully shown.
    Open,
    /// Content fading out after a close request.
    Hiding,
    /// Curtain closing back over the page; unmount follows.
    Curtain,
}

/// Fixed delays driving the lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayTimings {
    /// Mount -> open.
    #[serde(default = "default_open_delay_ms")]
    pub open_delay_ms: u64,
    /// Close request -> curtain.
    #[serde(default = "default_curtain_after_ms")]
    pub curtain_after_ms: u64,
    /// Close request -> unmount callback.
    #[serde(default = "default_unmount_after_ms")]
    pub unmount_after_ms: u64,
    /// Entering open -> title reveal.
    #[serde(default = "default_title_delay_ms")]
    pub title_delay_ms: u64,
}

fn default_open_delay_ms() -> u64 {
    50
}

fn default_curtain_after_ms() -> u64 {
    400
}

fn default_unmount_after_ms() -> u64 {
    1200
}

fn default_title_delay_ms() -> u64 {
    1000
}

impl Default for OverlayTimings {
    fn default() -> Self {
        Self {
            open_delay_ms: default_open_delay_ms(),
            curtain_after_ms: default_curtain_after_ms(),
            unmount_after_ms: default_unmount_after_ms(),
            title_delay_ms: default_title_delay_ms(),
        }
    }
}

impl OverlayTimings {
    /// The curtain must start before the unmount fires.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.curtain_after_ms >= self.unmount_after_ms {
            return Err(ScrollfxError::validation(format!(
                "overlay curtain_after_ms ({}) must be < unmount_after_ms ({})",
                self.curtain_after_ms, self.unmount_after_ms
            )));
        }
        Ok(())
    }
}

/// What the overlay does with wheel input while mounted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelPolicy {
    /// Swallow every event (modal scroll lock).
    Block,
    /// Swallow every event and remap it onto an internal panel dial.
    Dial(DialSpec),
}

/// Notification emitted while advancing the overlay clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum OverlayEvent {
    /// Phase transition.
    Phase(OverlayPhase),
    /// Title reveal toggled.
    TitleVisible(bool),
    /// The owner must remove the overlay now.
    Unmount,
}

/// Render flags derived from the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OverlayVisuals {
    /// Close button, title and panel content shown.
    pub show_content: bool,
    /// Image curtain held half open.
    pub show_curtain: bool,
    /// Accepts pointer input.
    pub interactive: bool,
    /// Opaque backdrop shown.
    pub backdrop: bool,
    /// Title reveal has started.
    pub title_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Open,
    Title,
    Curtain,
    Unmount,
}

/// State machine for modal-like panels: `closed -> open -> hiding -> curtain -> unmount`.
///
/// Transitions only move forward; a close request latches, so repeated requests are no-ops
/// and the unmount notification fires exactly once.
#[derive(Clone, Debug)]
pub struct OverlayController {
    timings: OverlayTimings,
    phase: OverlayPhase,
    closing: bool,
    unmounted: bool,
    title_visible: bool,
    timers: TimerQueue<Timer>,
    dial: Option<WheelDial>,
}

impl OverlayController {
    /// Mount at `now`: start closed and schedule the open transition.
    pub fn mount(timings: OverlayTimings, policy: WheelPolicy, now: Millis) -> ScrollfxResult<Self> {
        timings.validate()?;
        let dial = match policy {
            WheelPolicy::Block => None,
            WheelPolicy::Dial(spec) => Some(WheelDial::new(spec)?),
        };
        let mut timers = TimerQueue::new();
        timers.schedule(now.after(timings.open_delay_ms), Timer::Open);
        Ok(Self {
            timings,
            phase: OverlayPhase::Closed,
            closing: false,
            unmounted: false,
            title_visible: false,
            timers,
            dial,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// `true` once the unmount notification has fired.
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Whether the page behind must stay scroll-locked.
    pub fn locks_page_scroll(&self) -> bool {
        !self.unmounted
    }

    /// Render flags for the current phase.
    pub fn visuals(&self) -> OverlayVisuals {
        let p = self.phase;
        OverlayVisuals {
            show_content: p == OverlayPhase::Open,
            show_curtain: matches!(p, OverlayPhase::Open | OverlayPhase::Hiding),
            interactive: p == OverlayPhase::Open,
            backdrop: matches!(
                p,
                OverlayPhase::Open | OverlayPhase::Hiding | OverlayPhase::Curtain
            ),
            title_visible: self.title_visible,
        }
    }

    /// Fire every timer due at `now`, in order.
    pub fn advance(&mut self, now: Millis) -> Vec<OverlayEvent> {
        let mut events = Vec::new();
        while let Some((at, timer)) = self.timers.pop_due(now) {
            match timer {
                Timer::Open => {
                    self.enter(OverlayPhase::Open, &mut events);
                    self.timers
                        .schedule(at.after(self.timings.title_delay_ms), Timer::Title);
                }
                Timer::Title => {
                    if self.phase == OverlayPhase::Open && !self.title_visible {
                        self.title_visible = true;
                        events.push(OverlayEvent::TitleVisible(true));
                    }
                }
                Timer::Curtain => self.enter(OverlayPhase::Curtain, &mut events),
                Timer::Unmount => {
                    self.unmounted = true;
                    self.timers.cancel_where(|_| true);
                    tracing::debug!(at = at.0, "overlay unmount");
                    events.push(OverlayEvent::Unmount);
                }
            }
        }
        events
    }

    /// Close button / backdrop handler. A request while a close is underway is a no-op.
    pub fn request_close(&mut self, now: Millis) -> Vec<OverlayEvent> {
        let mut events = self.advance(now);
        if self.closing || self.unmounted {
            return events;
        }
        self.closing = true;
        // A close before the open timer fired must not reopen afterwards.
        self.timers
            .cancel_where(|t| matches!(t, Timer::Open | Timer::Title));
        self.enter(OverlayPhase::Hiding, &mut events);
        self.timers
            .schedule(now.after(self.timings.curtain_after_ms), Timer::Curtain);
        self.timers
            .schedule(now.after(self.timings.unmount_after_ms), Timer::Unmount);
        events
    }

    /// `true` once a close has been requested.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Window wheel handler. Always cancels the native event while mounted.
    pub fn on_wheel(&mut self, wheel: WheelInput) -> bool {
        if self.unmounted {
            return false;
        }
        if let Some(dial) = &mut self.dial
            && !self.closing
        {
            dial.push(wheel.delta_y);
        }
        true
    }

    /// Per-frame callback for dial overlays.
    pub fn on_frame(&mut self) -> Option<DialFrame> {
        self.dial.as_mut().map(WheelDial::on_frame)
    }

    fn enter(&mut self, phase: OverlayPhase, events: &mut Vec<OverlayEvent>) {
        if self.phase == phase {
            return;
        }
        tracing::debug!(from = ?self.phase, to = ?phase, "overlay phase");
        if self.phase == OverlayPhase::Open && self.title_visible {
            self.title_visible = false;
            events.push(OverlayEvent::TitleVisible(false));
        }
        self.phase = phase;
        events.push(OverlayEvent::Phase(phase));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/lifecycle.rs"]
mod tests;
