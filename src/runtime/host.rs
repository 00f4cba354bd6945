//! Single-threaded model of the browser event loop the components live in.
//!
//! Every mounted component gets a [`MountId`]. The listeners and the frame loop it needs are
//! registered against that id on mount and all released on [`Host::unmount`], so nothing
//! keeps firing for a component that is gone. Timers live inside the controllers and are
//! dropped with them.

use crate::{
    choreo::section::{Section, SectionFrame, SectionSpec},
    foundation::{
        core::{Millis, Rect, Viewport, WheelInput},
        error::ScrollfxResult,
    },
    overlay::{
        detail::{DetailEvent, DetailTimings, DetailTransition},
        dial::DialFrame,
        lifecycle::{OverlayController, OverlayEvent, OverlayTimings, WheelPolicy},
    },
    runtime::page::{Page, SectionLayout},
    scroll::{
        hijack::{SnapRequest, WheelVerdict},
        tracker::ScrollWindow,
    },
};

/// Handle to a mounted component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct MountId(u64);

/// Window events a component can listen to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ListenerKind {
    /// `scroll`.
    Scroll,
    /// `resize`.
    Resize,
    /// `wheel`.
    Wheel,
}

/// One registered window listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Listener {
    /// Owning component.
    pub owner: MountId,
    /// Event type.
    pub kind: ListenerKind,
    /// Passive listeners can never cancel the event.
    pub passive: bool,
}

/// Something observable that happened during dispatch or a tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum HostEvent {
    /// A section rendered a frame.
    Section {
        /// Component.
        id: MountId,
        /// Frame output.
        frame: SectionFrame,
    },
    /// A section started an auto-snap.
    Snap {
        /// Component.
        id: MountId,
        /// Snap target.
        request: SnapRequest,
    },
    /// Overlay lifecycle notification.
    Overlay {
        /// Component.
        id: MountId,
        /// Notification.
        event: OverlayEvent,
    },
    /// Dial overlay frame.
    Dial {
        /// Component.
        id: MountId,
        /// Frame output.
        frame: DialFrame,
    },
    /// Detail panel notification.
    Detail {
        /// Component.
        id: MountId,
        /// Notification.
        event: DetailEvent,
    },
    /// A component was removed by the host.
    Unmounted(MountId),
}

/// Result of dispatching one wheel event.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct WheelOutcome {
    /// Whether any active listener cancelled the event.
    pub default_prevented: bool,
    /// Snaps started by the event.
    pub events: Vec<HostEvent>,
}

#[derive(Clone, Debug)]
enum Component {
    Section { section: Section, layout: SectionLayout },
    Overlay(OverlayController),
    Detail(DetailTransition),
}

#[derive(Clone, Debug)]
struct Mounted {
    id: MountId,
    component: Component,
    frame_loop: bool,
}

/// Owner of the page, the mounted components and their registrations.
#[derive(Clone, Debug)]
pub struct Host {
    page: Page,
    now: Millis,
    next_id: u64,
    mounted: Vec<Mounted>,
    listeners: Vec<Listener>,
}

impl Host {
    /// Host over `page`, clock at zero.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            now: Millis::ZERO,
            next_id: 0,
            mounted: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// The scrolled document.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Latest clock value seen by [`Host::tick`].
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Every live listener registration.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Number of components with a running frame loop.
    pub fn frame_loops(&self) -> usize {
        self.mounted.iter().filter(|m| m.frame_loop).count()
    }

    /// Whether `id` is still mounted.
    pub fn is_mounted(&self, id: MountId) -> bool {
        self.mounted.iter().any(|m| m.id == id)
    }

    /// Mount a section laid out at `layout`, measuring it immediately.
    #[tracing::instrument(skip(self, spec), fields(section = %spec.id))]
    pub fn mount_section(&mut self, spec: SectionSpec, layout: SectionLayout) -> ScrollfxResult<MountId> {
        let mut section = Section::new(spec)?;
        section.reset();
        section.on_scroll(self.page.rect_of(layout), self.page.viewport());
        let id = self.alloc_id();
        self.listen(id, ListenerKind::Scroll, true);
        self.listen(id, ListenerKind::Resize, true);
        if section.wants_wheel() {
            self.listen(id, ListenerKind::Wheel, false);
        }
        let frame_loop = section.wants_frames();
        self.mounted.push(Mounted {
            id,
            component: Component::Section { section, layout },
            frame_loop,
        });
        Ok(id)
    }

    /// Mount an overlay; the page stays scroll-locked until it unmounts.
    #[tracing::instrument(skip(self, policy))]
    pub fn mount_overlay(&mut self, timings: OverlayTimings, policy: WheelPolicy) -> ScrollfxResult<MountId> {
        let frame_loop = matches!(policy, WheelPolicy::Dial(_));
        let overlay = OverlayController::mount(timings, policy, self.now)?;
        let id = self.alloc_id();
        self.page.lock();
        self.listen(id, ListenerKind::Wheel, false);
        self.mounted.push(Mounted {
            id,
            component: Component::Overlay(overlay),
            frame_loop,
        });
        Ok(id)
    }

    /// Mount a detail panel growing from `origin`.
    pub fn mount_detail(&mut self, origin: Rect, timings: DetailTimings) -> ScrollfxResult<MountId> {
        let detail = DetailTransition::open(origin, self.page.viewport(), timings)?;
        let id = self.alloc_id();
        self.mounted.push(Mounted {
            id,
            component: Component::Detail(detail),
            frame_loop: true,
        });
        Ok(id)
    }

    /// Remove a component with every registration it made. `false` if not mounted.
    pub fn unmount(&mut self, id: MountId) -> bool {
        let Some(idx) = self.mounted.iter().position(|m| m.id == id) else {
            return false;
        };
        let mounted = self.mounted.remove(idx);
        self.listeners.retain(|l| l.owner != id);
        if let Component::Overlay(_) = mounted.component {
            self.page.unlock();
        }
        tracing::debug!(id = id.0, "unmounted");
        true
    }

    /// Mounted section by id.
    pub fn section(&self, id: MountId) -> Option<&Section> {
        self.mounted.iter().find(|m| m.id == id).and_then(|m| match &m.component {
            Component::Section { section, .. } => Some(section),
            _ => None,
        })
    }

    /// Mounted overlay by id.
    pub fn overlay(&self, id: MountId) -> Option<&OverlayController> {
        self.mounted.iter().find(|m| m.id == id).and_then(|m| match &m.component {
            Component::Overlay(o) => Some(o),
            _ => None,
        })
    }

    /// Mounted detail panel by id.
    pub fn detail(&self, id: MountId) -> Option<&DetailTransition> {
        self.mounted.iter().find(|m| m.id == id).and_then(|m| match &m.component {
            Component::Detail(d) => Some(d),
            _ => None,
        })
    }

    /// Whether any overlay is mounted.
    pub fn overlay_open(&self) -> bool {
        self.mounted
            .iter()
            .any(|m| matches!(m.component, Component::Overlay(_)))
    }

    /// Visibility of a scroll-range gated element such as the header.
    pub fn window_visible(&self, window: ScrollWindow) -> bool {
        window.visible(self.page.scroll_y(), self.page.viewport(), self.overlay_open())
    }

    /// Close button handler for an overlay or detail panel.
    pub fn request_close(&mut self, id: MountId) -> Vec<HostEvent> {
        let now = self.now;
        let mut events = Vec::new();
        if let Some(m) = self.mounted.iter_mut().find(|m| m.id == id) {
            match &mut m.component {
                Component::Overlay(o) => events.extend(
                    o.request_close(now)
                        .into_iter()
                        .map(|event| HostEvent::Overlay { id, event }),
                ),
                Component::Detail(d) => events.extend(
                    d.request_close(now)
                        .into_iter()
                        .map(|event| HostEvent::Detail { id, event }),
                ),
                Component::Section { .. } => {}
            }
        }
        self.reap(&mut events);
        events
    }

    /// User scroll to `y`; notifies scroll listeners if the offset changed.
    pub fn scroll_to(&mut self, y: f64) {
        if self.page.scroll_to(y) {
            self.dispatch(ListenerKind::Scroll);
        }
    }

    /// Programmatic `behavior: smooth` scroll to `y`, stepped by [`Host::tick`].
    pub fn smooth_scroll_to(&mut self, y: f64) {
        self.page.smooth_scroll_to(y, self.now);
    }

    /// Viewport change: sections are re-stacked in document order, then resize listeners run.
    ///
    /// Each section is re-laid out from its `height_vh` (one viewport when unset). Space
    /// between sections and below the last one keeps its pixel size.
    pub fn resize(&mut self, viewport: Viewport) {
        let mut order: Vec<(usize, f64)> = self
            .mounted
            .iter()
            .enumerate()
            .filter_map(|(i, m)| match &m.component {
                Component::Section { layout, .. } => Some((i, layout.top)),
                _ => None,
            })
            .collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut old_bottom = 0.0;
        let mut new_bottom = 0.0;
        for (i, _) in order {
            if let Component::Section { section, layout } = &mut self.mounted[i].component {
                let top = new_bottom + (layout.top - old_bottom);
                old_bottom = layout.top + layout.height;
                *layout = SectionLayout::for_spec(section.spec(), top, viewport);
                new_bottom = layout.top + layout.height;
            }
        }
        let trailing = (self.page.document_height() - old_bottom).max(0.0);
        self.page.set_viewport(viewport, new_bottom + trailing);
        self.dispatch(ListenerKind::Resize);
    }

    /// Current layout of a mounted section.
    pub fn section_layout(&self, id: MountId) -> Option<SectionLayout> {
        self.mounted.iter().find(|m| m.id == id).and_then(|m| match &m.component {
            Component::Section { layout, .. } => Some(*layout),
            _ => None,
        })
    }

    /// Window wheel event. Active listeners run in registration order; native scrolling
    /// happens only if none of them cancelled the event and the page is not locked.
    pub fn dispatch_wheel(&mut self, wheel: WheelInput) -> WheelOutcome {
        let now = self.now;
        let scroll_y = self.page.scroll_y();
        let viewport = self.page.viewport();
        let mut outcome = WheelOutcome::default();
        let owners: Vec<MountId> = self
            .listeners
            .iter()
            .filter(|l| l.kind == ListenerKind::Wheel)
            .map(|l| l.owner)
            .collect();

        for owner in owners {
            let Some(m) = self.mounted.iter_mut().find(|m| m.id == owner) else {
                continue;
            };
            match &mut m.component {
                Component::Overlay(o) => {
                    outcome.default_prevented |= o.on_wheel(wheel);
                }
                Component::Section { section, layout } => {
                    let verdict = section.on_wheel(wheel, scroll_y, layout.region(viewport), now);
                    if let WheelVerdict::Snap(request) = verdict {
                        self.page.smooth_scroll_to(request.scroll_to, now);
                        outcome.events.push(HostEvent::Snap { id: owner, request });
                    }
                    outcome.default_prevented |= verdict.prevents_default();
                }
                Component::Detail(_) => {}
            }
        }

        if !outcome.default_prevented && self.page.wheel_scroll(wheel.delta_y) {
            self.dispatch(ListenerKind::Scroll);
        }
        outcome
    }

    /// Advance the clock: step smooth scrolling, fire due timers, then run every frame loop.
    pub fn tick(&mut self, now: Millis) -> Vec<HostEvent> {
        self.now = self.now.max(now);
        let now = self.now;
        if self.page.step(now) {
            self.dispatch(ListenerKind::Scroll);
        }

        let mut events = Vec::new();
        for m in &mut self.mounted {
            let id = m.id;
            match &mut m.component {
                Component::Section { section, .. } => {
                    section.advance(now);
                    if m.frame_loop {
                        events.push(HostEvent::Section {
                            id,
                            frame: section.on_frame(),
                        });
                    }
                }
                Component::Overlay(o) => {
                    events.extend(
                        o.advance(now)
                            .into_iter()
                            .map(|event| HostEvent::Overlay { id, event }),
                    );
                    if m.frame_loop
                        && !o.is_unmounted()
                        && let Some(frame) = o.on_frame()
                    {
                        events.push(HostEvent::Dial { id, frame });
                    }
                }
                Component::Detail(d) => {
                    events.extend(
                        d.advance(now)
                            .into_iter()
                            .map(|event| HostEvent::Detail { id, event }),
                    );
                    if let Some(event) = d.on_frame() {
                        events.push(HostEvent::Detail { id, event });
                    }
                }
            }
        }
        self.reap(&mut events);
        events
    }

    /// Render one frame of a section without a frame loop (raw-progress sections).
    pub fn render_section(&mut self, id: MountId) -> Option<SectionFrame> {
        self.mounted.iter_mut().find(|m| m.id == id).and_then(|m| match &mut m.component {
            Component::Section { section, .. } => Some(section.on_frame()),
            _ => None,
        })
    }

    fn dispatch(&mut self, kind: ListenerKind) {
        let owners: Vec<MountId> = self
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.owner)
            .collect();
        for owner in owners {
            if let Some(m) = self.mounted.iter_mut().find(|m| m.id == owner)
                && let Component::Section { section, layout } = &mut m.component
            {
                section.on_scroll(self.page.rect_of(*layout), self.page.viewport());
            }
        }
    }

    /// Unmount components whose controllers announced it.
    fn reap(&mut self, events: &mut Vec<HostEvent>) {
        let done: Vec<MountId> = events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Overlay {
                    id,
                    event: OverlayEvent::Unmount,
                }
                | HostEvent::Detail {
                    id,
                    event: DetailEvent::Unmount,
                } => Some(*id),
                _ => None,
            })
            .collect();
        for id in done {
            if self.unmount(id) {
                events.push(HostEvent::Unmounted(id));
            }
        }
    }

    fn alloc_id(&mut self) -> MountId {
        let id = MountId(self.next_id);
        self.next_id += 1;
        id
    }

    fn listen(&mut self, owner: MountId, kind: ListenerKind, passive: bool) {
        self.listeners.push(Listener {
            owner,
            kind,
            passive,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/host.rs"]
mod tests;
