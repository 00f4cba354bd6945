use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(10).after(5), Millis(15));
    assert_eq!(Millis(u64::MAX).after(1), Millis(u64::MAX));
    assert_eq!(Millis(100).since(Millis(40)), 60);
    assert_eq!(Millis(40).since(Millis(100)), 0);
}

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(1280.0, 800.0).is_ok());
    assert!(Viewport::new(0.0, 800.0).is_err());
    assert!(Viewport::new(1280.0, -1.0).is_err());
    assert!(Viewport::new(f64::NAN, 800.0).is_err());
}

#[test]
fn viewport_height_fraction() {
    let vp = Viewport::new(1000.0, 800.0).unwrap();
    assert_eq!(vp.vh(1.2), 960.0);
    assert_eq!(vp.vh(0.0), 0.0);
}

#[test]
fn wheel_direction() {
    assert!(WheelInput::new(3.0).is_down());
    assert!(WheelInput::new(-3.0).is_up());
    let idle = WheelInput::new(0.0);
    assert!(!idle.is_down() && !idle.is_up());
}
