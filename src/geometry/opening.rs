use crate::math::Point3;

/// Sizing and clearance parameters for distributing openings along a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningSpec {
    /// Opening width.
    pub width: f64,
    /// Minimum distance between a span end and the nearest opening edge.
    pub corner_clearance: f64,
    /// Minimum distance between the edges of two adjacent openings.
    pub inter_gap: f64,
}

impl OpeningSpec {
    /// Creates a new opening spec.
    #[must_use]
    pub fn new(width: f64, corner_clearance: f64, inter_gap: f64) -> Self {
        Self {
            width,
            corner_clearance,
            inter_gap,
        }
    }
}

/// An opening already present in a wall, to be avoided during distribution.
///
/// Immutable for the duration of a layout computation: the distributor
/// never re-queries the host once an obstruction has been captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstruction {
    /// Index of the wall the obstruction occupies, if any.
    pub wall_index: Option<usize>,
    /// Center of the obstruction, projected onto the wall centerline.
    pub center: Point3,
    /// Width of the obstruction.
    pub width: f64,
}

impl Obstruction {
    /// Creates a new obstruction record.
    #[must_use]
    pub fn new(wall_index: Option<usize>, center: Point3, width: f64) -> Self {
        Self {
            wall_index,
            center,
            width,
        }
    }
}

/// A proposed insertion point for an opening, tagged with its owning wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningPlacement {
    /// Index of the wall the opening belongs to.
    pub wall_index: usize,
    /// Insertion point on the wall centerline.
    pub point: Point3,
}

impl OpeningPlacement {
    /// Creates a new placement.
    #[must_use]
    pub fn new(wall_index: usize, point: Point3) -> Self {
        Self { wall_index, point }
    }
}
