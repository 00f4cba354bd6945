use super::*;

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

#[test]
fn tween_hits_both_ends() {
    let tween = ScrollTween::new(0.0, 1200.0, Millis(100), 800);
    assert_eq!(tween.sample(Millis(0)), 0.0);
    assert_eq!(tween.sample(Millis(100)), 0.0);
    assert_eq!(tween.sample(Millis(500)), 600.0);
    assert_eq!(tween.sample(Millis(900)), 1200.0);
    assert!(!tween.is_done(Millis(899)));
    assert!(tween.is_done(Millis(900)));
}

#[test]
fn retarget_starts_from_current_position() {
    let mut tween = ScrollTween::new(0.0, 1200.0, Millis(0), 800);
    tween.retarget(Millis(400), 0.0, 800);
    assert_eq!(tween.from, 600.0);
    assert_eq!(tween.to, 0.0);
    assert_eq!(tween.start, Millis(400));
}

#[test]
fn scroll_is_clamped_to_document() {
    let mut page = Page::new(vp(), 3000.0);
    assert_eq!(page.max_scroll(), 2200.0);
    assert!(page.scroll_to(5000.0));
    assert_eq!(page.scroll_y(), 2200.0);
    assert!(page.scroll_to(-10.0));
    assert_eq!(page.scroll_y(), 0.0);
    assert!(!page.scroll_to(0.0));
}

#[test]
fn smooth_scroll_reaches_target() {
    let mut page = Page::new(vp(), 3000.0);
    page.smooth_scroll_to(1200.0, Millis(0));
    assert!(page.is_animating());
    assert!(page.step(Millis(400)));
    assert_eq!(page.scroll_y(), 600.0);
    page.step(Millis(800));
    assert_eq!(page.scroll_y(), 1200.0);
    assert!(!page.is_animating());
    assert!(!page.step(Millis(816)));
}

#[test]
fn lock_blocks_wheel_scrolling_only() {
    let mut page = Page::new(vp(), 3000.0);
    page.lock();
    page.lock();
    assert!(!page.wheel_scroll(100.0));
    page.unlock();
    assert!(page.is_locked());
    page.unlock();
    assert!(page.wheel_scroll(100.0));
    assert_eq!(page.scroll_y(), 100.0);
    page.unlock();
    assert!(!page.is_locked());
}

#[test]
fn rect_and_region_follow_layout() {
    let mut page = Page::new(vp(), 4000.0);
    let spec = SectionSpec::pinned("hero", 2.5);
    let layout = SectionLayout::for_spec(&spec, 0.0, vp());
    assert_eq!(layout.height, 2000.0);
    page.scroll_to(600.0);
    assert_eq!(page.rect_of(layout), Rect::new(0.0, -600.0, 1000.0, 1400.0));
    let region = layout.region(vp());
    assert_eq!(region.scrollable, 1200.0);
    assert_eq!(region.end(), 1200.0);
}

#[test]
fn sections_stack_in_order() {
    let specs = [
        SectionSpec::pinned("a", 2.5),
        SectionSpec::pinned("b", 7.0),
    ];
    let layouts = stack_sections(&specs, vp());
    assert_eq!(layouts[0].top, 0.0);
    assert_eq!(layouts[1].top, 2000.0);
    assert_eq!(layouts[1].height, 5600.0);
}
