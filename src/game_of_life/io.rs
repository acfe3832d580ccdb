//! Pattern file I/O
//!
//! A pattern file holds one board row per line: `*` marks a living cell and any
//! other character a dead one. The first line may instead be a `rows columns`
//! header giving the suggested board size. Positions are only checked against
//! the board they are finally placed on.

use super::{LifeError, LifeGrid, Position};
use anyhow::{Context, Result};
use std::path::Path;

const ALIVE: char = '*';
const DEAD: char = '.';

/// Initial positions read from a pattern file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Board size from the header line, if there was one
    pub dimensions: Option<(usize, usize)>,
    /// Living cells in row-major order
    pub positions: Vec<Position>,
}

impl Pattern {
    /// Build a board of the given size from this pattern
    pub fn into_grid(self, rows: usize, columns: usize) -> Result<LifeGrid, LifeError> {
        LifeGrid::new(rows, columns, self.positions)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let rows = fields.next()?.parse().ok()?;
    let columns = fields.next()?.parse().ok()?;
    match fields.next() {
        Some(_) => None,
        None => Some((rows, columns)),
    }
}

/// Parse a pattern from its string representation
pub fn parse_pattern(content: &str) -> Result<Pattern> {
    let mut lines = content.lines().peekable();

    let dimensions = match lines.peek().and_then(|line| parse_header(line)) {
        Some((rows, columns)) => {
            lines.next();
            if rows == 0 || columns == 0 {
                return Err(LifeError::InvalidDimension { rows, columns }.into());
            }
            Some((rows, columns))
        }
        None => None,
    };

    let positions = lines
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == ALIVE)
                .map(move |(col, _)| Position::new(row, col))
        })
        .collect();

    Ok(Pattern { dimensions, positions })
}

/// Convert a board to pattern text, including the size header
pub fn pattern_to_string(grid: &LifeGrid) -> String {
    let mut result = String::with_capacity(16 + grid.rows() * (grid.columns() + 1));
    result.push_str(&format!("{} {}\n", grid.rows(), grid.columns()));

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            result.push(if grid.get(row, col) { ALIVE } else { DEAD });
        }
        result.push('\n');
    }

    result
}

/// Save a board to a pattern file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &LifeGrid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, pattern_to_string(grid))
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write a few well-known patterns into a directory
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("blinker.txt", "5 5\n.....\n.***.\n.....\n"),
        ("block.txt", "4 4\n....\n.**.\n.**.\n"),
        ("glider.txt", "10 10\n..*\n*.*\n.**\n"),
        ("beacon.txt", "6 6\n......\n.**...\n.**...\n...**.\n...**.\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
