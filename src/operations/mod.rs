pub mod creation;
pub mod layout;
pub mod roof;

pub use creation::RectangleLoop;
pub use layout::DistributeOpenings;
pub use roof::{FootprintProfile, GableRoofProfile};
