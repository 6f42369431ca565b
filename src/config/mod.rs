//! Configuration management for the console simulator

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
