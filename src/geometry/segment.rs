use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A bounded straight segment between two 3D points.
///
/// The parametric form is arc-length based: a point on the segment is
/// addressed by its distance from one of the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Creates a new segment. Degenerate (zero-length) segments are allowed.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the unit direction vector from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a degenerate segment.
    pub fn direction(&self) -> Result<Vector3> {
        let v = self.end - self.start;
        let len = v.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(v / len)
    }

    /// Evaluates the point at the given arc-length distance along the segment.
    ///
    /// With `from_start = false` the distance is measured back from `end`
    /// instead. A degenerate segment evaluates to `start` regardless of the
    /// requested distance.
    #[must_use]
    pub fn point_at(&self, distance: f64, from_start: bool) -> Point3 {
        let len = self.length();
        if len < TOLERANCE {
            return self.start;
        }
        let d = if from_start { distance } else { len - distance };
        self.start + (self.end - self.start) * (d / len)
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        self.start + (self.end - self.start) * 0.5
    }

    /// Returns this segment displaced by the given vector.
    #[must_use]
    pub fn translated(&self, displacement: Vector3) -> Self {
        Self {
            start: self.start + displacement,
            end: self.end + displacement,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn length_3_4_5() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        assert!((seg.length() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn point_at_from_start() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let p = seg.point_at(4.0, true);
        assert!((p.x - 4.0).abs() < 1e-10);
        assert!(p.y.abs() < 1e-10);
    }

    #[test]
    fn point_at_from_end() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let p = seg.point_at(4.0, false);
        assert!((p.x - 6.0).abs() < 1e-10);
    }

    #[test]
    fn point_at_degenerate_returns_start() {
        let p0 = Point3::new(2.0, 3.0, 1.0);
        let seg = Segment::new(p0, p0);
        let p = seg.point_at(5.0, true);
        assert!((p - p0).norm() < 1e-10);
    }

    #[test]
    fn midpoint_is_halfway() {
        let seg = Segment::new(Point3::new(-5.0, 2.0, 0.0), Point3::new(5.0, 2.0, 0.0));
        let m = seg.midpoint();
        assert!(m.x.abs() < 1e-10);
        assert!((m.y - 2.0).abs() < 1e-10);
    }

    #[test]
    fn direction_degenerate_errors() {
        let p0 = Point3::new(1.0, 1.0, 1.0);
        let seg = Segment::new(p0, p0);
        assert!(seg.direction().is_err());
    }

    #[test]
    fn translated_moves_both_endpoints() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        let t = seg.translated(Vector3::new(0.0, 2.0, 0.0));
        assert!((t.start().y - 2.0).abs() < 1e-10);
        assert!((t.end().y - 2.0).abs() < 1e-10);
    }
}
