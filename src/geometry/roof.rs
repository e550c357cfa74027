use crate::math::Point3;

use super::segment::Segment;

/// A reference plane defined by three points, orienting a roof extrusion.
///
/// Mirrors the host convention: an origin, a point along the plane's axis,
/// and a third point spanning the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePlane {
    /// Plane origin.
    pub origin: Point3,
    /// End of the plane's axis direction.
    pub axis_end: Point3,
    /// A third point spanning the plane.
    pub span_point: Point3,
}

/// A symmetric gable ("tent") roof cross-section with its placement data.
///
/// The extrusion is realized symmetrically about the reference plane over
/// `extrusion_start..=extrusion_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GableProfile {
    /// Segment rising from the eave to the ridge apex.
    pub ascending: Segment,
    /// Segment falling from the ridge apex to the opposite eave.
    pub descending: Segment,
    /// Plane the profile lives in.
    pub plane: ReferencePlane,
    /// Extrusion extent behind the profile plane.
    pub extrusion_start: f64,
    /// Extrusion extent in front of the profile plane.
    pub extrusion_end: f64,
}

impl GableProfile {
    /// Returns the ridge apex point.
    #[must_use]
    pub fn apex(&self) -> Point3 {
        self.ascending.end()
    }
}

