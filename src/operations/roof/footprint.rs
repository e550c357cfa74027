use crate::error::{OperationError, Result};
use crate::geometry::wall::WALL_COUNT;
use crate::geometry::{Segment, WallSegment};
use crate::math::Vector3;

/// Computes the offset footprint loop for a sloped footprint roof.
///
/// Each corner of the wall loop moves outward by `offset + thickness / 2`
/// along both axes, so the resulting edges are parallel to and outside the
/// original walls. Slope is not computed here; it is a per-edge annotation
/// applied by the orchestrator after the roof is realized.
#[derive(Debug)]
pub struct FootprintProfile {
    walls: Vec<WallSegment>,
    offset: f64,
}

impl FootprintProfile {
    /// Creates a new footprint profile operation.
    #[must_use]
    pub fn new(walls: Vec<WallSegment>, offset: f64) -> Self {
        Self { walls, offset }
    }

    /// Executes the operation, returning the offset loop in wall order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless given exactly four
    /// walls.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        if self.walls.len() != WALL_COUNT {
            return Err(OperationError::InvalidInput(format!(
                "footprint roof requires {WALL_COUNT} walls, got {}",
                self.walls.len()
            ))
            .into());
        }

        // The representative thickness, as the host reports it for the loop.
        let dt = self.offset + self.walls[0].thickness / 2.0;

        let loop_segments = self
            .walls
            .iter()
            .map(|wall| {
                let start = wall.segment.start();
                let end = wall.segment.end();
                // Corner offsets point away from the loop center; shared
                // corners get identical offsets, keeping the loop closed.
                let start_shift = Vector3::new(dt * start.x.signum(), dt * start.y.signum(), 0.0);
                let end_shift = Vector3::new(dt * end.x.signum(), dt * end.y.signum(), 0.0);
                Segment::new(start + start_shift, end + end_shift)
            })
            .collect();
        Ok(loop_segments)
    }
}
