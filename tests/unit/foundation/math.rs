use super::*;

#[test]
fn lerp_endpoints_are_exact() {
    for (a, b) in [(0.0, 1.0), (28.0, 0.0), (0.1, 0.7), (-30.0, 25.0), (2.2, 1.0)] {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
    assert_eq!(lerp(28.0, 0.0, 0.5), 14.0);
}

#[test]
fn clamp_handles_nan_and_bounds() {
    assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.4, 0.0, 0.35), 0.35);
    assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
}

#[test]
fn range_t_clamps_outside_and_hits_boundaries() {
    assert_eq!(range_t(0.1, 0.1, 0.25), 0.0);
    assert_eq!(range_t(0.25, 0.1, 0.25), 1.0);
    assert_eq!(range_t(0.0, 0.1, 0.25), 0.0);
    assert_eq!(range_t(0.9, 0.1, 0.25), 1.0);
    assert!(approx_eq(range_t(0.175, 0.1, 0.25), 0.5, 1e-12));
}

#[test]
fn range_t_zero_width_is_a_step() {
    assert_eq!(range_t(0.49, 0.5, 0.5), 0.0);
    assert_eq!(range_t(0.5, 0.5, 0.5), 1.0);
}

#[test]
fn smoothstep_shape() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert_eq!(smoothstep(0.5), 0.5);
    assert!(smoothstep(0.25) < 0.25);
    assert!(smoothstep(0.75) > 0.75);
    assert_eq!(smoothstep(-1.0), 0.0);
    assert_eq!(smoothstep(2.0), 1.0);
}
