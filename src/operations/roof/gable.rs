use crate::error::{OperationError, Result};
use crate::geometry::wall::WALL_COUNT;
use crate::geometry::{GableProfile, ReferencePlane, Segment, WallSegment};
use crate::math::Point3;

/// Computes the gable cross-section and placement for an extruded roof.
///
/// The half-span and extrusion extent are derived from the wall loop
/// itself, which keeps the roof locked to the building footprint: wall 1
/// runs perpendicular to the ridge and fixes the half-span, wall 0 runs in
/// the ridge direction and fixes the extrusion extent.
#[derive(Debug)]
pub struct GableRoofProfile {
    walls: Vec<WallSegment>,
    offset: f64,
    ridge_height: f64,
    base_elevation: f64,
}

impl GableRoofProfile {
    /// Creates a new gable profile operation.
    #[must_use]
    pub fn new(walls: Vec<WallSegment>, offset: f64, ridge_height: f64, base_elevation: f64) -> Self {
        Self {
            walls,
            offset,
            ridge_height,
            base_elevation,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless given exactly four
    /// walls.
    pub fn execute(&self) -> Result<GableProfile> {
        if self.walls.len() != WALL_COUNT {
            return Err(OperationError::InvalidInput(format!(
                "gable roof requires {WALL_COUNT} walls, got {}",
                self.walls.len()
            ))
            .into());
        }

        let cross_wall = &self.walls[1];
        let ridge_wall = &self.walls[0];

        let dt = self.offset + cross_wall.thickness / 2.0 + cross_wall.length() / 2.0;
        let extrusion = self.offset + ridge_wall.length() / 2.0;

        let base = self.base_elevation;
        let apex = Point3::new(0.0, 0.0, base + self.ridge_height);

        Ok(GableProfile {
            ascending: Segment::new(Point3::new(0.0, -dt, base), apex),
            descending: Segment::new(apex, Point3::new(0.0, dt, base)),
            plane: ReferencePlane {
                origin: Point3::new(0.0, 0.0, base),
                axis_end: Point3::new(0.0, 0.0, dt + base),
                span_point: Point3::new(0.0, dt, 0.0),
            },
            extrusion_start: -extrusion,
            extrusion_end: extrusion,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::RectangleLoop;

    fn profile_10_by_5(ridge_height: f64) -> GableProfile {
        let walls = RectangleLoop::new(10_000.0, 5000.0, 250.0).execute().unwrap();
        GableRoofProfile::new(walls, 400.0, ridge_height, 0.0)
            .execute()
            .unwrap()
    }

    #[test]
    fn half_span_derives_from_the_cross_wall() {
        // dt = 400 + 250 / 2 + 5000 / 2 = 3025.
        let profile = profile_10_by_5(1500.0);
        assert!((profile.ascending.start().y - (-3025.0)).abs() < 1e-9);
        assert!((profile.descending.end().y - 3025.0).abs() < 1e-9);
    }

    #[test]
    fn extrusion_derives_from_the_ridge_wall() {
        // extrusion = 400 + 10000 / 2 = 5400, symmetric about the plane.
        let profile = profile_10_by_5(1500.0);
        assert!((profile.extrusion_start - (-5400.0)).abs() < 1e-9);
        assert!((profile.extrusion_end - 5400.0).abs() < 1e-9);
    }

    #[test]
    fn profile_is_mirror_symmetric() {
        let profile = profile_10_by_5(1500.0);
        let left = profile.ascending.start();
        let right = profile.descending.end();
        assert!((left.y + right.y).abs() < 1e-10);
        assert!(left.z.abs() < 1e-10 && right.z.abs() < 1e-10);
        assert!(left.x.abs() < 1e-10 && right.x.abs() < 1e-10);
        assert!((profile.apex() - Point3::new(0.0, 0.0, 1500.0)).norm() < 1e-10);
    }

    #[test]
    fn base_elevation_lifts_the_whole_profile() {
        let walls = RectangleLoop::new(10_000.0, 5000.0, 250.0).execute().unwrap();
        let profile = GableRoofProfile::new(walls, 400.0, 1500.0, 3000.0)
            .execute()
            .unwrap();
        assert!((profile.ascending.start().z - 3000.0).abs() < 1e-10);
        assert!((profile.apex().z - 4500.0).abs() < 1e-10);
        assert!((profile.plane.origin.z - 3000.0).abs() < 1e-10);
        assert!((profile.plane.axis_end.z - 6025.0).abs() < 1e-10);
        // The span point carries no elevation, matching the host convention.
        assert!(profile.plane.span_point.z.abs() < 1e-10);
        assert!((profile.plane.span_point.y - 3025.0).abs() < 1e-10);
    }

    #[test]
    fn wrong_wall_count_is_rejected() {
        let mut walls = RectangleLoop::new(10_000.0, 5000.0, 250.0).execute().unwrap();
        walls.truncate(2);
        assert!(GableRoofProfile::new(walls, 400.0, 1500.0, 0.0).execute().is_err());
    }
}
