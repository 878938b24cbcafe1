//! Linear interpolation helpers.

use crate::foundation::core::Point;

#[inline]
/// Linearly interpolate between two points with clamped parameter `t`.
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    let t = clamp01(t);
    Point::new(a.x + ((b.x - a.x) * t), a.y + ((b.y - a.y) * t))
}

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`; NaN maps to 0.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
