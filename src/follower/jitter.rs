use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::positive_or;

/// Offset `position` by a small aperiodic wobble derived from wall-clock time.
///
/// The wobble is the product of two sine/cosine waves with incommensurate frequencies on each
/// axis, scaled by `intensity` (device pixels). The same inputs always give the same output.
pub fn add_human_jitter(position: Point, intensity: f64, time_scale: f64, now_ms: f64) -> Point {
    if intensity == 0.0 || !intensity.is_finite() || !now_ms.is_finite() {
        return position;
    }
    let t = now_ms / 1000.0 * positive_or(time_scale, 1.0);
    let dx = (t * 2.3).sin() * (t * 1.7).cos();
    let dy = (t * 1.9).cos() * (t * 2.9).sin();
    position + Vec2::new(dx, dy) * intensity
}

#[cfg(test)]
#[path = "../../tests/unit/follower/jitter.rs"]
mod tests;
