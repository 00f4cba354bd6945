use super::*;

const REGION: RegionExtent = RegionExtent {
    top: 0.0,
    scrollable: 1200.0,
};

fn down() -> WheelInput {
    WheelInput::new(100.0)
}

fn up() -> WheelInput {
    WheelInput::new(-100.0)
}

#[test]
fn splash_downward_snaps_once_and_locks() {
    let mut c = ScrollHijackController::new(HijackSpec::default());
    let v = c.on_wheel(down(), 0.05, 60.0, REGION, Millis(0));
    assert_eq!(
        v,
        WheelVerdict::Snap(SnapRequest {
            direction: SnapDirection::Forward,
            scroll_to: 1200.0,
        })
    );

    let mut prevented = usize::from(v.prevents_default());
    for t in [1, 16, 300, 800, 1199] {
        let v = c.on_wheel(down(), 0.05, 60.0, REGION, Millis(t));
        assert_eq!(v, WheelVerdict::Locked);
        prevented += usize::from(v.prevents_default());
    }
    assert_eq!(prevented, 1);
    assert!(c.is_locked(Millis(1199)));
    assert!(!c.is_locked(Millis(1200)));

    let v = c.on_wheel(down(), 0.05, 60.0, REGION, Millis(1200));
    assert!(v.prevents_default());
}

#[test]
fn upward_near_end_snaps_back_to_top() {
    let mut c = ScrollHijackController::new(HijackSpec::default());
    let v = c.on_wheel(up(), 0.95, 1150.0, REGION, Millis(0));
    assert_eq!(
        v,
        WheelVerdict::Snap(SnapRequest {
            direction: SnapDirection::Back,
            scroll_to: 0.0,
        })
    );
}

#[test]
fn upward_from_next_section_is_not_intercepted() {
    let mut c = ScrollHijackController::new(HijackSpec::default());
    // Progress saturates at 1 past the region; absolute position says we've left it.
    assert_eq!(
        c.on_wheel(up(), 1.0, 1211.0, REGION, Millis(0)),
        WheelVerdict::PassThrough
    );
    // Within tolerance still counts as inside.
    assert!(
        c.on_wheel(up(), 1.0, 1210.0, REGION, Millis(0))
            .prevents_default()
    );
}

#[test]
fn events_outside_zones_pass_through() {
    let mut c = ScrollHijackController::new(HijackSpec::default());
    assert_eq!(
        c.on_wheel(up(), 0.05, 60.0, REGION, Millis(0)),
        WheelVerdict::PassThrough
    );
    assert_eq!(
        c.on_wheel(down(), 0.5, 600.0, REGION, Millis(0)),
        WheelVerdict::PassThrough
    );
    assert_eq!(
        c.on_wheel(down(), 0.95, 1150.0, REGION, Millis(0)),
        WheelVerdict::PassThrough
    );
    assert_eq!(
        c.on_wheel(up(), 0.9, 1080.0, REGION, Millis(0)),
        WheelVerdict::PassThrough
    );
    assert_eq!(
        c.on_wheel(WheelInput::new(0.0), 0.0, 0.0, REGION, Millis(0)),
        WheelVerdict::PassThrough
    );
    assert!(!c.is_locked(Millis(0)));
}

#[test]
fn forward_target_respects_region_offset() {
    let mut c = ScrollHijackController::new(HijackSpec::default());
    let region = RegionExtent {
        top: 900.0,
        scrollable: 2400.0,
    };
    match c.on_wheel(down(), 0.0, 900.0, region, Millis(5)) {
        WheelVerdict::Snap(req) => assert_eq!(req.scroll_to, 3300.0),
        other => panic!("expected snap, got {other:?}"),
    }
}

#[test]
fn lock_releases_on_timer_even_without_scroll_activity() {
    let mut c = ScrollHijackController::new(HijackSpec {
        lock_ms: 500,
        ..HijackSpec::default()
    });
    c.on_wheel(down(), 0.0, 0.0, REGION, Millis(100));
    c.advance(Millis(599));
    assert!(c.is_locked(Millis(599)));
    c.advance(Millis(600));
    assert!(!c.is_locked(Millis(600)));
}

#[test]
fn spec_validation() {
    assert!(HijackSpec::default().validate().is_ok());
    let bad = HijackSpec {
        enter_below: 0.95,
        return_above: 0.9,
        ..HijackSpec::default()
    };
    assert!(bad.validate().is_err());
    let spec: HijackSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec, HijackSpec::default());
}
