mod distribute;
mod span;

pub use distribute::DistributeOpenings;
