//! Driving a board through successive generations

pub mod engine;
pub mod snapshot;

pub use engine::{Simulation, Stability};
pub use snapshot::Snapshot;
