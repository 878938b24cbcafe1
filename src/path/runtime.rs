use std::sync::Arc;

use crate::animation::reveal::{RevealStrategy, revealed_length};
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Pose, ViewBox};
use crate::path::locate::{self, DEFAULT_POSE_EPSILON};
use crate::path::reveal::reveal_path;
use crate::path::sample::{SampleOptions, SampledPath, parse_and_sample};
use crate::transform::affine::{ObjectPose, TransformInputs};

/// Reusable handle for one path: local samples plus the cached local-to-device transform.
///
/// Samples are computed once per path-data string and may be shared with a [`SampleCache`]. The
/// world transform is rebuilt whenever one of its inputs changes, never per query.
///
/// [`SampleCache`]: crate::path::cache::SampleCache
#[derive(Clone, Debug)]
pub struct PathRuntime {
    path: Option<Arc<BezPath>>,
    sampled: Arc<SampledPath>,
    inputs: TransformInputs,
    world: Affine,
}

impl PathRuntime {
    /// Parse, measure and sample `d` for display on `canvas`.
    pub fn new(d: &str, opts: SampleOptions, canvas: Canvas) -> Self {
        let inputs = TransformInputs::for_canvas(canvas);
        let (path, sampled) = parse_and_sample(d, opts);
        Self {
            path: path.map(Arc::new),
            sampled: Arc::new(sampled),
            world: inputs.compose(),
            inputs,
        }
    }

    /// Wrap samples produced elsewhere (e.g. by the background sampler or a cache).
    ///
    /// Without the source geometry [`PathRuntime::revealed_path`] returns `None`.
    pub fn from_sampled(
        sampled: Arc<SampledPath>,
        path: Option<Arc<BezPath>>,
        inputs: TransformInputs,
    ) -> Self {
        Self {
            path,
            sampled,
            world: inputs.compose(),
            inputs,
        }
    }

    /// Swap in new path data, discarding the previous samples.
    pub fn replace_path(&mut self, d: &str, opts: SampleOptions) {
        let (path, sampled) = parse_and_sample(d, opts);
        self.path = path.map(Arc::new);
        self.sampled = Arc::new(sampled);
    }

    /// Replace all transform inputs at once.
    pub fn set_inputs(&mut self, inputs: TransformInputs) {
        if self.inputs != inputs {
            self.inputs = inputs;
            self.world = inputs.compose();
        }
    }

    /// Set the path's own local matrix.
    pub fn set_local_transform(&mut self, local: Option<Affine>) {
        self.set_inputs(TransformInputs {
            local,
            ..self.inputs
        });
    }

    /// Set the view-box mapped onto the canvas.
    pub fn set_view_box(&mut self, view_box: ViewBox) {
        self.set_inputs(TransformInputs {
            view_box,
            ..self.inputs
        });
    }

    /// Set the target canvas size.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.set_inputs(TransformInputs {
            canvas,
            ..self.inputs
        });
    }

    /// Set the device pixel ratio.
    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: f64) {
        self.set_inputs(TransformInputs {
            device_pixel_ratio,
            ..self.inputs
        });
    }

    /// Set the object placement.
    pub fn set_object_pose(&mut self, object: ObjectPose) {
        self.set_inputs(TransformInputs {
            object,
            ..self.inputs
        });
    }

    pub fn inputs(&self) -> &TransformInputs {
        &self.inputs
    }

    pub fn world_transform(&self) -> Affine {
        self.world
    }

    pub fn sampled(&self) -> &SampledPath {
        &self.sampled
    }

    pub fn total_length(&self) -> f64 {
        self.sampled.total()
    }

    pub fn is_zero_length(&self) -> bool {
        self.sampled.is_zero_length()
    }

    /// Local point at arc length `s` (clamped).
    pub fn point_at_s(&self, s: f64) -> Point {
        locate::point_at_s(self.sampled.samples(), s).unwrap_or(Point::ZERO)
    }

    /// Device-space pose at arc length `s`; `None` for zero-length paths.
    pub fn world_pose_at_s(&self, s: f64, epsilon: f64) -> Option<Pose> {
        if self.is_zero_length() {
            return None;
        }
        locate::world_pose_at_s(self.sampled.samples(), self.world, s, epsilon)
    }

    /// Pose at the reveal head for `progress` under `strategy`.
    pub fn pose_at_progress(&self, progress: f64, strategy: RevealStrategy) -> Option<Pose> {
        let s = revealed_length(progress, self.total_length(), strategy);
        self.world_pose_at_s(s, DEFAULT_POSE_EPSILON)
    }

    /// Local-space geometry revealed at `progress`; `None` if the source geometry is unavailable.
    pub fn revealed_path(&self, progress: f64, strategy: RevealStrategy) -> Option<BezPath> {
        let path = self.path.as_ref()?;
        let length = revealed_length(progress, self.total_length(), strategy);
        if length >= self.total_length() {
            return Some(BezPath::clone(path));
        }
        Some(reveal_path(path, length))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/runtime.rs"]
mod tests;
