use super::segment::Segment;

/// Number of walls in a rectangular envelope loop.
pub const WALL_COUNT: usize = 4;

/// A wall centerline within a rectangular loop.
///
/// The index identifies the wall's position in loop order: 0 = front,
/// 1 = right, 2 = back, 3 = left. Identity comparisons between walls are
/// made on this index, never on reference equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Position of this wall in the loop, `0..=3`.
    pub index: usize,
    /// The wall centerline.
    pub segment: Segment,
    /// Wall thickness.
    pub thickness: f64,
}

impl WallSegment {
    /// Creates a new wall segment.
    #[must_use]
    pub fn new(index: usize, segment: Segment, thickness: f64) -> Self {
        Self {
            index,
            segment,
            thickness,
        }
    }

    /// Returns the centerline length of this wall.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment.length()
    }
}

/// A named floor level.
///
/// The elevation value belongs to the host model and is looked up through
/// the host collaborator, never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
}

impl Level {
    /// Creates a level reference with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
