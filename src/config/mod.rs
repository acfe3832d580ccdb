//! Configuration management for the Game of Life runner

pub mod settings;

pub use settings::{
    Settings, BoardConfig, InputConfig, SimulationConfig, OutputConfig, OutputFormat, CliOverrides
};
