use super::*;
use crate::scroll::hijack::{HijackSpec, SnapDirection};

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

fn host() -> Host {
    Host::new(Page::new(vp(), 4000.0))
}

fn hero() -> SectionSpec {
    SectionSpec {
        hijack: Some(HijackSpec::default()),
        ..SectionSpec::pinned("hero", 2.5)
    }
}

fn layout() -> SectionLayout {
    SectionLayout {
        top: 0.0,
        height: 2000.0,
    }
}

#[test]
fn mount_and_unmount_are_symmetric() {
    let mut h = host();
    let id = h.mount_section(hero(), layout()).unwrap();
    let mine: Vec<_> = h.listeners().iter().filter(|l| l.owner == id).collect();
    assert_eq!(mine.len(), 3);
    assert!(
        mine.iter()
            .all(|l| l.passive == (l.kind != ListenerKind::Wheel))
    );
    assert_eq!(h.frame_loops(), 0);

    let values = SectionSpec {
        damping: Some(0.06),
        ..SectionSpec::pinned("values", 5.0)
    };
    let v = h
        .mount_section(values, SectionLayout { top: 2000.0, height: 4000.0 })
        .unwrap();
    assert_eq!(h.frame_loops(), 1);

    assert!(h.unmount(id));
    assert!(h.unmount(v));
    assert!(!h.unmount(v));
    assert!(h.listeners().is_empty());
    assert_eq!(h.frame_loops(), 0);
}

#[test]
fn invalid_spec_registers_nothing() {
    let mut h = host();
    let bad = SectionSpec {
        damping: Some(0.0),
        ..SectionSpec::pinned("bad", 2.0)
    };
    assert!(h.mount_section(bad, layout()).is_err());
    assert!(h.listeners().is_empty());
}

#[test]
fn scroll_listeners_remeasure_sections() {
    let mut h = host();
    let id = h.mount_section(hero(), layout()).unwrap();
    assert_eq!(h.section(id).unwrap().raw_progress(), 0.0);
    h.scroll_to(600.0);
    assert_eq!(h.section(id).unwrap().raw_progress(), 0.5);
    h.scroll_to(3000.0);
    assert_eq!(h.section(id).unwrap().raw_progress(), 1.0);
}

#[test]
fn hijack_snaps_forward_then_back() {
    let mut h = host();
    let id = h.mount_section(hero(), layout()).unwrap();

    let out = h.dispatch_wheel(WheelInput::new(100.0));
    assert!(out.default_prevented);
    assert_eq!(out.events.len(), 1);
    match &out.events[0] {
        HostEvent::Snap { request, .. } => {
            assert_eq!(request.direction, SnapDirection::Forward);
            assert_eq!(request.scroll_to, 1200.0);
        }
        other => panic!("unexpected event {other:?}"),
    }
    // The cancelled event did not scroll natively.
    assert_eq!(h.page().scroll_y(), 0.0);

    h.tick(Millis(400));
    assert_eq!(h.section(id).unwrap().raw_progress(), 0.5);
    h.tick(Millis(800));
    assert_eq!(h.page().scroll_y(), 1200.0);

    // Still locked: ignored, not cancelled, so the page scrolls natively.
    h.tick(Millis(900));
    let out = h.dispatch_wheel(WheelInput::new(-100.0));
    assert!(!out.default_prevented);
    assert_eq!(h.page().scroll_y(), 1100.0);

    h.tick(Millis(1300));
    let out = h.dispatch_wheel(WheelInput::new(-100.0));
    assert!(out.default_prevented);
    assert!(matches!(
        out.events[0],
        HostEvent::Snap { request, .. } if request.direction == SnapDirection::Back && request.scroll_to == 0.0
    ));
    h.tick(Millis(2100));
    assert_eq!(h.page().scroll_y(), 0.0);
}

#[test]
fn overlay_locks_page_until_unmount() {
    let mut h = host();
    let id = h
        .mount_overlay(OverlayTimings::default(), WheelPolicy::Block)
        .unwrap();
    assert!(h.page().is_locked());
    assert!(h.window_visible(ScrollWindow { from_vh: 1.2, to_vh: 2.5 }));

    let out = h.dispatch_wheel(WheelInput::new(120.0));
    assert!(out.default_prevented);
    assert_eq!(h.page().scroll_y(), 0.0);

    let events = h.tick(Millis(50));
    assert_eq!(
        events,
        vec![HostEvent::Overlay {
            id,
            event: OverlayEvent::Phase(crate::overlay::lifecycle::OverlayPhase::Open)
        }]
    );

    h.tick(Millis(100));
    let closing = h.request_close(id);
    assert_eq!(closing.len(), 1);
    assert!(h.request_close(id).is_empty());

    let events = h.tick(Millis(1300));
    assert_eq!(events.last(), Some(&HostEvent::Unmounted(id)));
    assert!(!h.is_mounted(id));
    assert!(!h.page().is_locked());
    assert!(h.listeners().is_empty());
    assert!(!h.window_visible(ScrollWindow { from_vh: 1.2, to_vh: 2.5 }));
}

#[test]
fn header_window_tracks_scroll() {
    let mut h = host();
    let window = ScrollWindow {
        from_vh: 1.2,
        to_vh: 2.5,
    };
    assert!(!h.window_visible(window));
    h.scroll_to(1000.0);
    assert!(h.window_visible(window));
    h.scroll_to(2000.0);
    assert!(!h.window_visible(window));
}

#[test]
fn detail_panel_settles_and_unmounts() {
    let mut h = host();
    let id = h
        .mount_detail(Rect::new(100.0, 100.0, 400.0, 500.0), DetailTimings::default())
        .unwrap();
    assert_eq!(h.frame_loops(), 1);
    assert!(h.tick(Millis(16)).is_empty());
    assert_eq!(
        h.tick(Millis(32)),
        vec![HostEvent::Detail {
            id,
            event: DetailEvent::Phase(crate::overlay::detail::DetailPhase::Settled)
        }]
    );
    h.tick(Millis(100));
    h.request_close(id);
    let events = h.tick(Millis(1250));
    assert_eq!(events.last(), Some(&HostEvent::Unmounted(id)));
    assert_eq!(h.frame_loops(), 0);
}

#[test]
fn resize_rescales_virtual_heights() {
    let mut h = host();
    let id = h.mount_section(hero(), layout()).unwrap();
    h.scroll_to(600.0);
    h.resize(Viewport::new(1000.0, 400.0).unwrap());
    // 250vh of 400px: 1000px tall, 600px scrollable.
    assert_eq!(h.section(id).unwrap().raw_progress(), 1.0);
}

#[test]
fn resize_restacks_every_section() {
    let doc = crate::presets::about().unwrap();
    let small = Viewport::new(1280.0, 800.0).unwrap();
    let mut h = Host::new(Page::new(small, doc.document_height(small)));
    let ids: Vec<MountId> = doc
        .sections
        .iter()
        .zip(doc.layouts(small))
        .map(|(spec, layout)| h.mount_section(spec.clone(), layout).unwrap())
        .collect();

    let tall = Viewport::new(1280.0, 1000.0).unwrap();
    h.resize(tall);
    // 250vh + 100vh + 500vh.
    assert_eq!(h.page().document_height(), 8500.0);
    for (id, expected) in ids.iter().zip(doc.layouts(tall)) {
        assert_eq!(h.section_layout(*id), Some(expected));
    }
    h.scroll_to(3500.0);
    assert_eq!(h.section(ids[2]).unwrap().raw_progress(), 0.0);

    h.resize(small);
    assert_eq!(h.page().document_height(), doc.document_height(small));
    assert_eq!(h.section_layout(ids[2]).map(|l| l.top), Some(2800.0));
}
