use crate::geometry::{Obstruction, OpeningPlacement, OpeningSpec, Segment, WallSegment};

use super::span::pack_span;

/// Distributes opening insertion points along a wall centerline.
///
/// Without an obstruction the wall receives a single opening at its exact
/// midpoint (the rule used for the first opening placed, which has nothing
/// to avoid yet). With an obstruction on the same wall, the centerline is
/// split into the two free spans on either side of it and each span is
/// packed independently; an obstruction on another wall leaves the whole
/// centerline as one free span.
#[derive(Debug)]
pub struct DistributeOpenings {
    baseline: WallSegment,
    spec: OpeningSpec,
    obstruction: Option<Obstruction>,
}

impl DistributeOpenings {
    /// Creates a new distribution operation.
    #[must_use]
    pub fn new(baseline: WallSegment, spec: OpeningSpec, obstruction: Option<Obstruction>) -> Self {
        Self {
            baseline,
            spec,
            obstruction,
        }
    }

    /// Executes the distribution.
    ///
    /// Total over well-formed geometry: a span with no room degrades to
    /// zero placements rather than failing. Results are ordered along the
    /// wall, first-span placements before second-span placements.
    #[must_use]
    pub fn execute(&self) -> Vec<OpeningPlacement> {
        let segment = self.baseline.segment;

        let Some(obstruction) = self.obstruction else {
            return vec![OpeningPlacement::new(self.baseline.index, segment.midpoint())];
        };

        let spans = if obstruction.wall_index == Some(self.baseline.index) {
            let half = obstruction.width / 2.0;
            let to_center = Segment::new(segment.start(), obstruction.center);
            let from_center = Segment::new(obstruction.center, segment.end());
            vec![
                Segment::new(segment.start(), to_center.point_at(half, false)),
                Segment::new(from_center.point_at(half, true), segment.end()),
            ]
        } else {
            vec![segment]
        };

        let mut placements = Vec::new();
        for span in &spans {
            for point in pack_span(span, &self.spec) {
                placements.push(OpeningPlacement::new(self.baseline.index, point));
            }
        }
        placements
    }
}
