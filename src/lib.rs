//! # Zombie Sim
//!
//! Zombies chase humans across a bounded grid, one cell per tick.
//!
//! This library provides the immutable world model, the pursuit movement
//! policy and the tick loop that folds every occupant's move into the next
//! world.

pub mod cli;
pub mod error;
pub mod logging;
pub mod occupant;
pub mod render;
pub mod simulation;
pub mod vector;
pub mod world;

pub use cli::{Args, WorldSize};
pub use error::{Result, WorldError};
pub use occupant::{Kind, Occupant, OccupantId};
pub use render::Renderer;
pub use simulation::SimulationEngine;
pub use vector::Vector;
pub use world::{Limits, Placement, Population, ViewpointEntry, World};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Kind, Occupant, OccupantId, Population, Renderer, Result, SimulationEngine, Vector,
        World, WorldError,
    };
}
