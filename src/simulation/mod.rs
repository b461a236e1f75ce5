pub mod engine;
pub mod pursuit;
pub mod tick;

pub use engine::{RunSummary, SimulationEngine, Ticker};
pub use tick::tick;
