use crate::error::{OperationError, Result};
use crate::geometry::{Segment, WallSegment};
use crate::math::Point3;

/// Builds a closed rectangular wall loop centered at the origin.
///
/// The loop lies in the XY plane at elevation 0, wound front → right →
/// back → left, with the first vertex repeated as the closing point.
#[derive(Debug)]
pub struct RectangleLoop {
    width: f64,
    depth: f64,
    wall_thickness: f64,
}

impl RectangleLoop {
    /// Creates a new rectangle loop operation.
    #[must_use]
    pub fn new(width: f64, depth: f64, wall_thickness: f64) -> Self {
        Self {
            width,
            depth,
            wall_thickness,
        }
    }

    /// Executes the operation, returning the four walls in loop order.
    ///
    /// A footprint with both dimensions zero is an explicit degenerate
    /// case and returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either dimension is
    /// negative or non-finite.
    pub fn execute(&self) -> Result<Vec<WallSegment>> {
        if !self.width.is_finite() || !self.depth.is_finite() {
            return Err(
                OperationError::InvalidInput("footprint dimensions must be finite".to_owned())
                    .into(),
            );
        }
        if self.width < 0.0 || self.depth < 0.0 {
            return Err(OperationError::InvalidInput(
                "footprint dimensions must be non-negative".to_owned(),
            )
            .into());
        }
        if self.width <= 0.0 && self.depth <= 0.0 {
            return Ok(Vec::new());
        }

        let dx = self.width / 2.0;
        let dy = self.depth / 2.0;
        let corners = [
            Point3::new(-dx, dy, 0.0),
            Point3::new(dx, dy, 0.0),
            Point3::new(dx, -dy, 0.0),
            Point3::new(-dx, -dy, 0.0),
            Point3::new(-dx, dy, 0.0),
        ];

        let walls = corners
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                WallSegment::new(i, Segment::new(pair[0], pair[1]), self.wall_thickness)
            })
            .collect();
        Ok(walls)
    }
}
