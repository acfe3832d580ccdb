//! Conway's Game of Life
//!
//! A fixed-size, closed-boundary cellular automaton engine together with a
//! pattern loader and a terminal driver that redraws only the cells each
//! generation changes.

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{GenerationDelta, LifeError, LifeGrid, Position};

use anyhow::{Context, Result};
use config::CliOverrides;

/// Load the configured pattern and build the starting board
pub fn load_initial_grid(settings: &Settings, cli_overrides: &CliOverrides) -> Result<LifeGrid> {
    let pattern = game_of_life::load_pattern_from_file(&settings.input.pattern_file)?;

    if pattern.is_empty() {
        anyhow::bail!(
            "Could not get positions in order to start the game: {} has no living cells",
            settings.input.pattern_file.display()
        );
    }

    let (rows, columns) = settings.resolve_dimensions(cli_overrides, pattern.dimensions);
    pattern.into_grid(rows, columns).with_context(|| {
        format!(
            "Pattern {} does not fit a {}x{} board",
            settings.input.pattern_file.display(),
            rows,
            columns
        )
    })
}
