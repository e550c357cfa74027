pub mod opening;
pub mod roof;
pub mod segment;
pub mod wall;

pub use opening::{Obstruction, OpeningPlacement, OpeningSpec};
pub use roof::{GableProfile, ReferencePlane};
pub use segment::Segment;
pub use wall::{Level, WallSegment};
