//! Game of Life rules (B3/S23) and the per-generation delta

use super::Position;
use serde::{Deserialize, Serialize};

/// Game of Life rules engine
pub struct GameOfLifeRules;

/// Change applied to a single cell between two generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChange {
    Birth,
    Death,
}

impl GameOfLifeRules {
    /// Maximum number of neighbors in the Moore neighborhood
    pub const NEIGHBORHOOD_SIZE: u8 = 8;

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn next_state(alive: bool, alive_neighbors: u8) -> bool {
        matches!((alive, alive_neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Classify the change a cell undergoes, or `None` when it keeps its state
    pub fn transition(alive: bool, alive_neighbors: u8) -> Option<CellChange> {
        match (alive, Self::next_state(alive, alive_neighbors)) {
            (false, true) => Some(CellChange::Birth),
            (true, false) => Some(CellChange::Death),
            _ => None,
        }
    }
}

/// Cells that change state between the current and the next generation.
///
/// Both lists are in row-major order and a position never appears in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationDelta {
    pub births: Vec<Position>,
    pub deaths: Vec<Position>,
}

impl GenerationDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, position: Position, change: CellChange) {
        match change {
            CellChange::Birth => self.births.push(position),
            CellChange::Death => self.deaths.push(position),
        }
    }

    /// True when the generation is a fixed point
    pub fn is_empty(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }

    /// Total number of changed cells
    pub fn len(&self) -> usize {
        self.births.len() + self.deaths.len()
    }
}
