use std::f64::consts::{PI, TAU};

/// Wrap an angle into `(-PI, PI]`.
pub fn normalize_angle(rad: f64) -> f64 {
    if !rad.is_finite() {
        return 0.0;
    }
    let mut a = rad % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Shortest signed rotation taking `from` onto `to`, in `(-PI, PI]`.
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    normalize_angle(normalize_angle(to) - normalize_angle(from))
}

/// Replace non-finite values with `fallback`.
#[inline]
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Replace non-finite or non-positive values with `fallback`.
#[inline]
pub(crate) fn positive_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
