pub mod placement;
pub mod population;
pub mod world;

pub use placement::{Limits, Placement, ViewpointEntry};
pub use population::Population;
pub use world::{Census, World};
