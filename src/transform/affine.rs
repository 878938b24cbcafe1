//! Local-to-device transform composition.
//!
//! Every path is sampled once in its own coordinate space. Per frame, points are pushed through a
//! single composite matrix:
//!
//! ```text
//! M = M_dpr * M_object * M_viewbox * M_local
//! ```
//!
//! Composition never fails: missing or unusable inputs fall back to identity parts.

use crate::foundation::core::{Affine, Canvas, Vec2, ViewBox};
use crate::foundation::math::{finite_or, positive_or};

/// Placement of an animated object on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ObjectPose {
    /// Horizontal offset in canvas pixels.
    pub x: f64,
    /// Vertical offset in canvas pixels.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Horizontal scale (0 means 1).
    pub scale_x: f64,
    /// Vertical scale (0 means 1).
    pub scale_y: f64,
}

impl Default for ObjectPose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl ObjectPose {
    /// `translate * rotate * scale`, with unusable values replaced by their identity defaults.
    pub fn to_affine(self) -> Affine {
        let t_translate =
            Affine::translate(Vec2::new(finite_or(self.x, 0.0), finite_or(self.y, 0.0)));
        let t_rotate = Affine::rotate(finite_or(self.rotation_deg, 0.0).to_radians());
        let t_scale =
            Affine::scale_non_uniform(unit_scale(self.scale_x), unit_scale(self.scale_y));
        t_translate * t_rotate * t_scale
    }
}

fn unit_scale(s: f64) -> f64 {
    if s.is_finite() && s != 0.0 { s } else { 1.0 }
}

/// Everything that contributes to a path's world transform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformInputs {
    /// Matrix authored on the path element itself.
    pub local: Option<Affine>,
    /// Local rectangle mapped onto the canvas.
    pub view_box: ViewBox,
    /// Canvas size in CSS pixels.
    pub canvas: Canvas,
    /// Device pixels per CSS pixel.
    pub device_pixel_ratio: f64,
    /// Object placement on the canvas.
    pub object: ObjectPose,
}

impl TransformInputs {
    /// Inputs with a 1:1 view-box, unit DPR and identity object pose.
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            local: None,
            view_box: ViewBox::from_canvas(canvas),
            canvas,
            device_pixel_ratio: 1.0,
            object: ObjectPose::default(),
        }
    }

    /// Build the composite local-to-device matrix.
    pub fn compose(&self) -> Affine {
        compose_world(
            self.local,
            self.view_box,
            self.canvas,
            self.device_pixel_ratio,
            self.object,
        )
    }
}

/// Scale `view_box` onto `canvas`, compensating for the view-box origin.
///
/// X and Y scale independently; aspect ratio is not preserved at this layer.
pub fn view_box_affine(view_box: ViewBox, canvas: Canvas) -> Affine {
    let sx = axis_scale(canvas.width, view_box.width);
    let sy = axis_scale(canvas.height, view_box.height);
    Affine::scale_non_uniform(sx, sy)
        * Affine::translate(Vec2::new(
            -finite_or(view_box.x, 0.0),
            -finite_or(view_box.y, 0.0),
        ))
}

fn axis_scale(canvas_len: f64, view_len: f64) -> f64 {
    if !(view_len.is_finite() && view_len > 0.0) || !canvas_len.is_finite() {
        return 1.0;
    }
    canvas_len / view_len
}

/// Uniform device pixel ratio scale; non-positive ratios mean 1.
pub fn dpr_affine(device_pixel_ratio: f64) -> Affine {
    Affine::scale(positive_or(device_pixel_ratio, 1.0))
}

#[inline]
/// Compose two transforms so that `b` is applied first.
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

/// `M_dpr * M_object * M_viewbox * M_local`.
pub fn compose_world(
    local: Option<Affine>,
    view_box: ViewBox,
    canvas: Canvas,
    device_pixel_ratio: f64,
    object: ObjectPose,
) -> Affine {
    let local = local
        .filter(|m| m.as_coeffs().iter().all(|c| c.is_finite()))
        .unwrap_or(Affine::IDENTITY);
    compose(
        compose(dpr_affine(device_pixel_ratio), object.to_affine()),
        compose(view_box_affine(view_box, canvas), local),
    )
}

/// Build an [`Affine`] from SVG-order coefficients `(a, b, c, d, e, f)`.
pub fn from_coeffs(c: [f64; 6]) -> Affine {
    Affine::new(c)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
