mod footprint;
mod gable;

pub use footprint::FootprintProfile;
pub use gable::GableRoofProfile;
