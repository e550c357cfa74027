use crate::geometry::{OpeningSpec, Segment};
use crate::math::Point3;

/// Packs evenly distributed opening centers into a free span.
///
/// For a span of length `L`, opening width `w`, corner clearance `c` and
/// inter-gap `g`, the candidate count is `(L - 2c + g) / (w + g)`,
/// truncated toward zero. Fractional leftovers widen the inner gaps so the
/// slack is spread evenly instead of accumulating at one end. A span too
/// short for any opening yields no points.
pub(crate) fn pack_span(span: &Segment, spec: &OpeningSpec) -> Vec<Point3> {
    let length = span.length();
    let OpeningSpec {
        width,
        corner_clearance,
        inter_gap,
    } = *spec;

    // Deliberately not clamped before truncation: an oversubscribed span
    // produces a non-positive count and falls through to an empty emission.
    let n_calc = (length - 2.0 * corner_clearance + inter_gap) / (width + inter_gap);
    #[allow(clippy::cast_possible_truncation)]
    let n_int = n_calc.trunc() as i32;

    let mut spacing = width + inter_gap;
    if (n_calc - f64::from(n_int)) > 0.0 && n_int > 1 {
        spacing = width
            + (length - (2.0 * corner_clearance + f64::from(n_int) * width)) / f64::from(n_int - 1);
    } else if n_int == 1 {
        spacing = length / 2.0;
    }

    let mut points = Vec::new();
    for i in 0..n_int {
        let distance = corner_clearance + width / 2.0 + f64::from(i) * spacing;
        points.push(span.point_at(distance, true));
    }
    points
}
