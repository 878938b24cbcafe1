//! Truncation of path geometry to a revealed arc length.

use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, PathEl, PathSeg, QuadBez};

use crate::foundation::core::{BezPath, Point};
use crate::path::measure::ARCLEN_ACCURACY;

/// The part of `path` lying within the first `length` units of arc length.
///
/// Sub-paths are revealed in order. Move-to elements are kept so that later sub-paths start at
/// their own origin; the segment crossing `length` is cut at the matching parameter and nothing
/// after it is emitted.
pub fn reveal_path(path: &BezPath, length: f64) -> BezPath {
    let mut out = BezPath::new();
    if length.is_nan() || length <= 0.0 {
        return out;
    }

    let mut remaining = length;
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for &el in path.elements() {
        let seg = match el {
            PathEl::MoveTo(p) => {
                out.move_to(p);
                current = p;
                subpath_start = p;
                continue;
            }
            PathEl::LineTo(p) => PathSeg::Line(Line::new(current, p)),
            PathEl::QuadTo(p1, p2) => PathSeg::Quad(QuadBez::new(current, p1, p2)),
            PathEl::CurveTo(p1, p2, p3) => PathSeg::Cubic(CubicBez::new(current, p1, p2, p3)),
            PathEl::ClosePath => PathSeg::Line(Line::new(current, subpath_start)),
        };

        if remaining <= 0.0 {
            break;
        }

        let seg_len = seg.arclen(ARCLEN_ACCURACY);
        if seg_len <= remaining {
            out.push(el);
            remaining -= seg_len;
            current = if matches!(el, PathEl::ClosePath) {
                subpath_start
            } else {
                seg.end()
            };
            continue;
        }

        let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY).clamp(0.0, 1.0);
        push_segment(&mut out, seg.subsegment(0.0..t));
        break;
    }
    out
}

fn push_segment(out: &mut BezPath, seg: PathSeg) {
    match seg {
        PathSeg::Line(l) => out.line_to(l.p1),
        PathSeg::Quad(q) => out.quad_to(q.p1, q.p2),
        PathSeg::Cubic(c) => out.curve_to(c.p1, c.p2, c.p3),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/reveal.rs"]
mod tests;
