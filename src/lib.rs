//! scrollfx is a scroll-progress choreography engine.
//!
//! It turns raw scroll geometry into per-frame style values for long, pinned page sections,
//! the way a studio site drives its splash curtains, phased reveals, step carousels and
//! full-screen overlays, without tying any of it to a particular UI layer.
//!
//! # Pipeline overview
//!
//! 1. **Track**: bounding box + viewport -> raw progress in `[0, 1]` ([`ScrollProgressTracker`])
//! 2. **Smooth**: raw progress -> trailing progress, one step per frame ([`ProgressSmoother`])
//! 3. **Map**: progress -> style values through declarative phase ranges ([`PhaseMapper`])
//! 4. **Select**: progress -> discrete active step, edge-triggered ([`StepSelector`])
//!
//! Around that sit the boundary auto-snap ([`ScrollHijackController`]), the overlay
//! lifecycle ([`OverlayController`]), and a virtual-clock [`Host`] that owns mounted
//! components together with their listeners, frame loops and timers.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: time is a virtual millisecond clock ([`Millis`]); every timer-gated
//!   behavior replays identically.
//! - **Pure mapping**: style values are a function of progress alone; only the smoother and
//!   the step selector carry state between frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod choreo;
mod config;
mod foundation;
mod overlay;
mod render;
mod runtime;
mod scroll;
mod waitlist;

/// The studio site's concrete choreographies.
pub mod presets;

pub use animation::ease::Ease;
pub use choreo::phase::{PhaseBinding, PhaseExpr, PhaseMapper, PhaseRange};
pub use choreo::reveal::{DIM_OPACITY, TextReveal, char_opacity, char_progress};
pub use choreo::section::{Section, SectionFrame, SectionSpec, StepEvent};
pub use choreo::step::{
    ItemState, STEP_CEILING, StepChange, StepSelector, StepSpec, SteppedItems, TrackAlign,
    step_label,
};
pub use choreo::style::{ClipInset, ElementStyle, StyleFrame};
pub use config::model::{CHOREOGRAPHY_VERSION, Choreography, OverlaySpec};
pub use foundation::core::{Insets, Millis, Point, Rect, RoundedRect, Vec2, Viewport, WheelInput};
pub use foundation::error::{ScrollfxError, ScrollfxResult};
pub use foundation::math::{clamp, clamp_unit, lerp, range_t, smoothstep};
pub use overlay::detail::{DetailEvent, DetailPhase, DetailTimings, DetailTransition, nearest_item};
pub use overlay::dial::{DialFrame, DialSpec, WheelDial};
pub use overlay::lifecycle::{
    OverlayController, OverlayEvent, OverlayPhase, OverlayTimings, OverlayVisuals, WheelPolicy,
};
pub use render::blend::{PremulRgba8, over};
pub use render::preview::{
    MAX_PREVIEW_EDGE, PreviewOpts, layer_bounds, layer_color, layer_shape, rasterize, save_png,
};
pub use runtime::host::{Host, HostEvent, Listener, ListenerKind, MountId, WheelOutcome};
pub use runtime::page::{Page, SMOOTH_SCROLL_MS, ScrollTween, SectionLayout, stack_sections};
pub use runtime::timers::{TimerId, TimerQueue};
pub use scroll::hijack::{
    HijackSpec, RegionExtent, ScrollHijackController, SnapDirection, SnapRequest, WheelVerdict,
};
pub use scroll::smoother::{DIAL_DAMPING, ProgressSmoother, SECTION_DAMPING};
pub use scroll::tracker::{ProgressStrategy, ScrollProgressTracker, ScrollWindow};
pub use waitlist::entry::{TOOLS_PAGE_SOURCE, WaitlistEntry, is_valid_email, normalize_email};
pub use waitlist::store::{
    INVALID_EMAIL_MESSAGE, MemoryWaitlist, STORE_FAILURE_MESSAGE, WaitlistResponse,
    WaitlistSink, list_newest_first, submit, submit_json,
};
