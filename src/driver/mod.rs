//! Rendering and the tick loop around the engine

pub mod renderer;
pub mod simulation;

pub use renderer::{JsonRenderer, Renderer, TerminalRenderer};
pub use simulation::{RunSummary, Simulation, SimulationOptions};
