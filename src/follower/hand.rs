use crate::follower::jitter::add_human_jitter;
use crate::follower::smooth::{
    SmoothingConfig, SmoothingState, adaptive_smoothing, smooth_position, smooth_rotation,
};
use crate::foundation::core::Pose;

/// Smoothed cursor that trails the reveal head.
///
/// Owns its [`SmoothingState`]; independent followers never share state.
#[derive(Clone, Debug)]
pub struct HandFollower {
    config: SmoothingConfig,
    state: SmoothingState,
}

impl HandFollower {
    pub fn new(config: SmoothingConfig, initial: Pose) -> Self {
        Self {
            config,
            state: SmoothingState::new(initial),
        }
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    pub fn state(&self) -> &SmoothingState {
        &self.state
    }

    /// Jump to `pose` and forget velocity and timing.
    pub fn reset(&mut self, pose: Pose) {
        self.state = SmoothingState::new(pose);
    }

    /// Advance one frame toward `target`.
    ///
    /// With smoothing disabled the raw target is returned unchanged. Jitter is applied to the
    /// reported pose only, so it never accumulates in the state.
    pub fn step(&mut self, target: Pose, now_ms: f64) -> Pose {
        let cfg = self.config;
        if !cfg.enabled {
            smooth_position(
                self.state.last_position,
                target.point(),
                &mut self.state,
                &cfg,
                now_ms,
            );
            self.state.last_angle = target.angle;
            return target;
        }

        let current = self.state.last_position;
        let strength = if cfg.adaptive {
            adaptive_smoothing(
                cfg.strength,
                current.distance(target.point()),
                cfg.max_adaptive_strength,
            )
        } else {
            cfg.strength
        };
        let position = smooth_position(
            current,
            target.point(),
            &mut self.state,
            &SmoothingConfig { strength, ..cfg },
            now_ms,
        );
        let angle = smooth_rotation(
            self.state.last_angle,
            target.angle,
            &mut self.state,
            cfg.rotation_strength,
        );

        let shown = add_human_jitter(position, cfg.jitter_intensity, cfg.jitter_time_scale, now_ms);
        Pose::new(shown, angle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/follower/hand.rs"]
mod tests;
