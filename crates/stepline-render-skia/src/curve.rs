// File: crates/stepline-render-skia/src/curve.rs
// Summary: Path geometry for the curve families: straight segments, step risers and Catmull-Rom cubics.

use stepline_core::{Curve, PixelPoint};

/// Backend-neutral path verb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    CubicTo(PixelPoint, PixelPoint, PixelPoint),
}

/// Path verbs tracing `points` with `curve`. Fewer than two points yield
/// nothing to stroke.
pub fn segments(points: &[PixelPoint], curve: Curve) -> Vec<Segment> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(Segment::MoveTo(first));
    match curve {
        Curve::Linear => out.extend(rest.iter().map(|&p| Segment::LineTo(p))),
        Curve::Step | Curve::StepBefore | Curve::StepAfter => {
            // Fraction of the horizontal run taken before the riser.
            let t = match curve {
                Curve::StepBefore => 0.0,
                Curve::StepAfter => 1.0,
                _ => 0.5,
            };
            let mut prev = first;
            for &p in rest {
                let x = prev.x + (p.x - prev.x) * t;
                out.push(Segment::LineTo(PixelPoint::new(x, prev.y)));
                out.push(Segment::LineTo(PixelPoint::new(x, p.y)));
                out.push(Segment::LineTo(p));
                prev = p;
            }
        }
        Curve::Spline => {
            for i in 0..points.len() - 1 {
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(points.len() - 1)];
                let c1 = PixelPoint::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
                let c2 = PixelPoint::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
                out.push(Segment::CubicTo(c1, c2, p2));
            }
        }
    }
    out
}
