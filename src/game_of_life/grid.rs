//! Board representation and generation stepping

use super::rules::{GameOfLifeRules, GenerationDelta};
use super::LifeError;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moore neighborhood offsets in the order N, NE, E, SE, S, SW, W, NW
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Alive and dead counts over the 8 neighbors of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborStatus {
    pub alive: u8,
    pub dead: u8,
}

/// Fixed-size Game of Life board with a closed (non-wrapping) boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl LifeGrid {
    /// Create a board with the given positions alive.
    ///
    /// Fails with [`LifeError::InvalidDimension`] when either dimension is zero or
    /// the cell count overflows `usize`,
    /// and with [`LifeError::OutOfBoundsPosition`] when a position lies off the board.
    pub fn new<I, P>(rows: usize, columns: usize, alive: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let cell_count = match rows.checked_mul(columns) {
            Some(count) if count > 0 => count,
            _ => return Err(LifeError::InvalidDimension { rows, columns }),
        };

        let mut grid = Self {
            rows,
            columns,
            cells: vec![false; cell_count],
        };

        for position in alive {
            let position = position.into();
            let idx = grid.checked_index(position)?;
            grid.cells[idx] = true;
        }

        Ok(grid)
    }

    /// Create a board with every cell dead
    pub fn empty(rows: usize, columns: usize) -> Result<Self, LifeError> {
        Self::new(rows, columns, std::iter::empty::<Position>())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    fn checked_index(&self, position: Position) -> Result<usize, LifeError> {
        if self.contains(position) {
            Ok(self.index(position.row, position.col))
        } else {
            Err(LifeError::OutOfBoundsPosition {
                row: position.row,
                col: position.col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Whether the position lies on the board
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.columns
    }

    /// Get cell value at coordinates; off-board cells are dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.columns {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Checked cell read
    pub fn cell(&self, position: Position) -> Result<bool, LifeError> {
        self.checked_index(position).map(|idx| self.cells[idx])
    }

    /// Count alive and dead cells in the Moore neighborhood of (row, col).
    ///
    /// Neighbors outside the board count as dead, so the two counts always sum to 8.
    pub fn neighbor_count(&self, row: usize, col: usize) -> NeighborStatus {
        let alive = NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                    (Some(r), Some(c)) => self.get(r, c),
                    _ => false,
                }
            })
            .count() as u8;

        NeighborStatus {
            alive,
            dead: GameOfLifeRules::NEIGHBORHOOD_SIZE - alive,
        }
    }

    /// Evaluate the rules against the current board without changing it
    pub fn compute_delta(&self) -> GenerationDelta {
        let mut delta = GenerationDelta::new();

        for (row, col) in iproduct!(0..self.rows, 0..self.columns) {
            let neighbors = self.neighbor_count(row, col);
            if let Some(change) = GameOfLifeRules::transition(self.get(row, col), neighbors.alive) {
                delta.record(Position::new(row, col), change);
            }
        }

        delta
    }

    /// Advance one generation and return the cells that changed.
    ///
    /// The delta is computed in full before any cell is written.
    pub fn evolve(&mut self) -> GenerationDelta {
        let delta = self.compute_delta();
        self.apply(&delta);
        delta
    }

    fn apply(&mut self, delta: &GenerationDelta) {
        for position in &delta.births {
            let idx = self.index(position.row, position.col);
            self.cells[idx] = true;
        }
        for position in &delta.deaths {
            let idx = self.index(position.row, position.col);
            self.cells[idx] = false;
        }
    }

    /// All living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<Position> {
        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(row, col)| self.get(row, col))
            .map(Position::from)
            .collect()
    }

    /// Count total living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.columns {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if self.get(row, col) { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn test_grid_creation() {
        let grid = LifeGrid::new(3, 4, positions(&[(0, 0), (2, 3)])).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.population(), 2);
        assert!(grid.get(0, 0));
        assert!(grid.get(2, 3));
        assert!(!grid.get(1, 1));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            LifeGrid::empty(0, 5),
            Err(LifeError::InvalidDimension { rows: 0, columns: 5 })
        );
        assert_eq!(
            LifeGrid::empty(5, 0),
            Err(LifeError::InvalidDimension { rows: 5, columns: 0 })
        );
    }

    #[test]
    fn test_oversized_dimensions() {
        assert_eq!(
            LifeGrid::empty(usize::MAX, 2),
            Err(LifeError::InvalidDimension { rows: usize::MAX, columns: 2 })
        );
    }

    #[test]
    fn test_neighbor_count_far_off_board() {
        let grid = LifeGrid::new(3, 3, positions(&[(0, 0), (0, 1)])).unwrap();
        let none_alive = NeighborStatus { alive: 0, dead: 8 };

        assert_eq!(grid.neighbor_count(usize::MAX, 0), none_alive);
        assert_eq!(grid.neighbor_count(isize::MAX as usize, 0), none_alive);
        assert_eq!(grid.neighbor_count(0, usize::MAX), none_alive);
        assert_eq!(grid.neighbor_count(1, 1), NeighborStatus { alive: 2, dead: 6 });
    }

    #[test]
    fn test_out_of_bounds_initial_position() {
        let result = LifeGrid::new(3, 3, positions(&[(1, 1), (3, 0)]));
        assert_eq!(
            result,
            Err(LifeError::OutOfBoundsPosition { row: 3, col: 0, rows: 3, columns: 3 })
        );
    }

    #[test]
    fn test_checked_cell_read() {
        let grid = LifeGrid::new(2, 2, positions(&[(1, 1)])).unwrap();
        assert_eq!(grid.cell(Position::new(1, 1)), Ok(true));
        assert_eq!(grid.cell(Position::new(0, 1)), Ok(false));
        assert!(grid.cell(Position::new(0, 2)).is_err());
        assert!(!grid.get(5, 5));
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = LifeGrid::new(
            3,
            3,
            positions(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]),
        )
        .unwrap();

        assert_eq!(grid.neighbor_count(1, 1), NeighborStatus { alive: 8, dead: 0 });
        // (0,0) sees (0,1) and (1,0); the centre is dead and the rest is off-board
        assert_eq!(grid.neighbor_count(0, 0), NeighborStatus { alive: 2, dead: 6 });
    }

    #[test]
    fn test_corner_cell_dies_alone() {
        let mut grid = LifeGrid::new(3, 3, positions(&[(0, 0)])).unwrap();
        assert_eq!(grid.neighbor_count(0, 0), NeighborStatus { alive: 0, dead: 8 });

        let delta = grid.evolve();
        assert_eq!(delta.deaths, positions(&[(0, 0)]));
        assert!(delta.births.is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_single_cell_board() {
        let grid = LifeGrid::new(1, 1, positions(&[(0, 0)])).unwrap();
        assert_eq!(grid.neighbor_count(0, 0), NeighborStatus { alive: 0, dead: 8 });
    }

    #[test]
    fn test_compute_delta_does_not_mutate() {
        let grid = LifeGrid::new(5, 5, positions(&[(1, 1), (1, 2), (1, 3)])).unwrap();
        let before = grid.clone();
        let delta = grid.compute_delta();

        assert_eq!(grid, before);
        assert_eq!(delta.births, positions(&[(0, 2), (2, 2)]));
        assert_eq!(delta.deaths, positions(&[(1, 1), (1, 3)]));
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = positions(&[(1, 1), (1, 2), (1, 3)]);
        let mut grid = LifeGrid::new(5, 5, horizontal.clone()).unwrap();

        grid.evolve();
        assert_eq!(grid.living_cells(), positions(&[(0, 2), (1, 2), (2, 2)]));

        grid.evolve();
        assert_eq!(grid.living_cells(), horizontal);
    }

    #[test]
    fn test_block_is_fixed_point() {
        let mut grid = LifeGrid::new(4, 4, positions(&[(1, 1), (1, 2), (2, 1), (2, 2)])).unwrap();
        let before = grid.clone();

        assert!(grid.evolve().is_empty());
        assert!(grid.evolve().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_block_in_corner_is_stable() {
        let mut grid = LifeGrid::new(2, 2, positions(&[(0, 0), (0, 1), (1, 0), (1, 1)])).unwrap();
        assert!(grid.evolve().is_empty());
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_display() {
        let grid = LifeGrid::new(2, 3, positions(&[(0, 1), (1, 2)])).unwrap();
        assert_eq!(grid.to_string(), "0 1 0\n0 0 1\n");
    }

    fn arb_grid() -> impl Strategy<Value = LifeGrid> {
        (1usize..12, 1usize..12).prop_flat_map(|(rows, columns)| {
            proptest::collection::vec(any::<bool>(), rows * columns).prop_map(move |cells| {
                let alive = cells
                    .iter()
                    .enumerate()
                    .filter(|(_, alive)| **alive)
                    .map(|(idx, _)| Position::new(idx / columns, idx % columns));
                LifeGrid::new(rows, columns, alive).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn prop_births_and_deaths_are_disjoint(mut grid in arb_grid()) {
            let delta = grid.evolve();
            let births: HashSet<_> = delta.births.iter().copied().collect();
            let deaths: HashSet<_> = delta.deaths.iter().copied().collect();

            prop_assert!(births.is_disjoint(&deaths));
            prop_assert_eq!(births.len(), delta.births.len());
            prop_assert_eq!(deaths.len(), delta.deaths.len());
        }

        #[test]
        fn prop_neighbor_counts_sum_to_eight(grid in arb_grid()) {
            for (row, col) in iproduct!(0..grid.rows(), 0..grid.columns()) {
                let status = grid.neighbor_count(row, col);
                prop_assert_eq!(status.alive + status.dead, 8);
            }
        }

        #[test]
        fn prop_evolve_matches_rules(grid in arb_grid()) {
            let mut next = grid.clone();
            next.evolve();

            for (row, col) in iproduct!(0..grid.rows(), 0..grid.columns()) {
                let alive = grid.neighbor_count(row, col).alive;
                prop_assert_eq!(
                    next.get(row, col),
                    GameOfLifeRules::next_state(grid.get(row, col), alive)
                );
            }
        }

        #[test]
        fn prop_fixed_point_stays_fixed(mut grid in arb_grid()) {
            if grid.evolve().is_empty() {
                prop_assert!(grid.evolve().is_empty());
            }
        }
    }
}
