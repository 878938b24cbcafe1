use crate::foundation::error::{SketchError, SketchResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Target canvas size in CSS pixels (before device pixel ratio).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Canvas {
    /// Create a validated canvas with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> SketchResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Check that both dimensions are finite and positive.
    pub fn validate(self) -> SketchResult<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SketchError::validation("Canvas size must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SketchError::validation("Canvas size must be > 0"));
        }
        Ok(())
    }
}

/// Rectangle in path-local units mapped onto the full canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    /// Left edge in local units.
    pub x: f64,
    /// Top edge in local units.
    pub y: f64,
    /// Width in local units.
    pub width: f64,
    /// Height in local units.
    pub height: f64,
}

impl ViewBox {
    /// Create a view-box from origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// View-box that maps local units 1:1 onto `canvas`.
    pub fn from_canvas(canvas: Canvas) -> Self {
        Self::new(0.0, 0.0, canvas.width, canvas.height)
    }
}

/// Position plus orientation of a follower or reveal head.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Heading in radians.
    pub angle: f64,
}

impl Pose {
    /// Build a pose from a point and heading.
    pub fn new(point: Point, angle: f64) -> Self {
        Self {
            x: point.x,
            y: point.y,
            angle,
        }
    }

    /// Position part of the pose.
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
