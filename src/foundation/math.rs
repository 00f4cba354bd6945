//! Scalar helpers shared by every mapper in the crate.

/// Linear interpolation between `a` and `b`.
///
/// Written in the two-weight form so both ends are exact: `lerp(a, b, 0.0) == a` and
/// `lerp(a, b, 1.0) == b` (`a + (b - a) * 1.0` can miss `b` by an ulp).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp `value` into `[min, max]`.
///
/// NaN collapses to `min` so downstream style values stay finite.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamp into the unit interval.
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Normalized position of `p` inside `[a, b]`, clamped to `[0, 1]`.
///
/// A zero-width range acts as a step at `a`.
pub fn range_t(p: f64, a: f64, b: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return if p >= a { 1.0 } else { 0.0 };
    }
    clamp_unit((p - a) / span)
}

/// Hermite smoothstep `t * t * (3 - 2t)` on a clamped `t`.
pub fn smoothstep(t: f64) -> f64 {
    let t = clamp_unit(t);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
