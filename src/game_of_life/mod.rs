//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod rules;
pub mod io;

pub use error::LifeError;
pub use grid::{LifeGrid, NeighborStatus, Position};
pub use rules::{CellChange, GameOfLifeRules, GenerationDelta};
pub use io::{
    create_example_patterns, load_pattern_from_file, parse_pattern, save_grid_to_file, Pattern,
};
