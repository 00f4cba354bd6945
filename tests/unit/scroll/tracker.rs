use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap()
}

fn pinned_rect(top: f64, height: f64) -> Rect {
    Rect::new(0.0, top, 1280.0, top + height)
}

#[test]
fn pinned_progress_tracks_scrolled_fraction() {
    let s = ProgressStrategy::Pinned;
    // 250vh wrapper => 1200px scrollable.
    let h = 2000.0;
    assert_eq!(s.measure(pinned_rect(0.0, h), vp()), Some(0.0));
    assert_eq!(s.measure(pinned_rect(-600.0, h), vp()), Some(0.5));
    assert_eq!(s.measure(pinned_rect(-1200.0, h), vp()), Some(1.0));
}

#[test]
fn pinned_progress_is_clamped_for_any_position() {
    let s = ProgressStrategy::Pinned;
    let mut top = 5000.0;
    while top > -10_000.0 {
        let p = s.measure(pinned_rect(top, 4000.0), vp()).unwrap();
        assert!((0.0..=1.0).contains(&p), "top={top} p={p}");
        top -= 137.0;
    }
}

#[test]
fn short_container_is_skipped() {
    let s = ProgressStrategy::Pinned;
    assert_eq!(s.measure(pinned_rect(-10.0, 800.0), vp()), None);
    assert_eq!(s.measure(pinned_rect(-10.0, 300.0), vp()), None);

    let mut tracker = ScrollProgressTracker::new(s);
    assert_eq!(tracker.update(pinned_rect(-600.0, 2000.0), vp()), Some(0.5));
    assert_eq!(tracker.update(pinned_rect(-700.0, 500.0), vp()), None);
    assert_eq!(tracker.progress(), 0.5);
}

#[test]
fn non_finite_top_is_skipped() {
    let mut tracker = ScrollProgressTracker::new(ProgressStrategy::Pinned);
    let rect = Rect::new(0.0, f64::NAN, 10.0, 2000.0);
    assert_eq!(tracker.update(rect, vp()), None);
    assert_eq!(tracker.progress(), 0.0);
}

#[test]
fn reveal_window_measures_passage() {
    // Intro paragraph: window opens at 90% of the viewport, closes when half the
    // element has left the top.
    let s = ProgressStrategy::Reveal {
        start: 0.9,
        end: -0.5,
    };
    let h = 400.0;
    // start_px = 720, end_px = -200, span = 920
    assert_eq!(s.measure(pinned_rect(720.0, h), vp()), Some(0.0));
    assert_eq!(s.measure(pinned_rect(900.0, h), vp()), Some(0.0));
    assert_eq!(s.measure(pinned_rect(-200.0, h), vp()), Some(1.0));
    assert_eq!(s.measure(pinned_rect(260.0, h), vp()), Some(0.5));
}

#[test]
fn degenerate_reveal_window_is_skipped() {
    let s = ProgressStrategy::Reveal {
        start: 0.0,
        end: 0.0,
    };
    assert_eq!(s.measure(pinned_rect(100.0, 400.0), vp()), None);
}

#[test]
fn viewport_reveal_window() {
    let s = ProgressStrategy::ViewportReveal { span: 0.9 };
    assert_eq!(s.measure(pinned_rect(800.0, 500.0), vp()), Some(0.0));
    assert_eq!(s.measure(pinned_rect(80.0, 500.0), vp()), Some(1.0));
    assert_eq!(s.measure(pinned_rect(440.0, 500.0), vp()), Some(0.5));
}

#[test]
fn strategy_validation() {
    assert!(ProgressStrategy::Pinned.validate().is_ok());
    assert!(
        ProgressStrategy::Reveal {
            start: f64::NAN,
            end: 0.0
        }
        .validate()
        .is_err()
    );
    assert!(ProgressStrategy::ViewportReveal { span: 0.0 }.validate().is_err());
}

#[test]
fn strategy_json_shape() {
    let s: ProgressStrategy =
        serde_json::from_str(r#"{ "kind": "reveal", "start": 0.9, "end": -0.5 }"#).unwrap();
    assert_eq!(
        s,
        ProgressStrategy::Reveal {
            start: 0.9,
            end: -0.5
        }
    );
}

#[test]
fn header_window_visibility() {
    let w = ScrollWindow {
        from_vh: 1.2,
        to_vh: 2.5,
    };
    assert!(!w.visible(960.0, vp(), false));
    assert!(w.visible(961.0, vp(), false));
    assert!(!w.visible(2000.0, vp(), false));
    assert!(w.visible(0.0, vp(), true));
}
