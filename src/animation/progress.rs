use crate::animation::ease::Ease;

/// Eased progress in `[0, 1]` for `current_time` within `[start, start + duration]`.
///
/// A non-positive (or non-finite) duration means the animation is already complete.
pub fn progress(current_time: f64, start: f64, duration: f64, ease: Ease) -> f64 {
    if !(duration.is_finite() && duration > 0.0) {
        return ease.apply(1.0);
    }
    ease.apply((current_time - start) / duration)
}

/// Start offset, duration and easing of one animated item, all in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Timeline offset where the animation begins.
    pub start: f64,
    /// Length of the animation.
    pub duration: f64,
    /// Easing applied to the normalized time.
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            start: 0.0,
            duration: 1.0,
            ease: Ease::Linear,
        }
    }
}

impl Timing {
    pub fn new(start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            start,
            duration,
            ease,
        }
    }

    pub fn progress(&self, current_time: f64) -> f64 {
        progress(current_time, self.start, self.duration, self.ease)
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration.max(0.0)
    }

    pub fn is_complete(&self, current_time: f64) -> bool {
        current_time >= self.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
