//! Display and output formatting utilities

use crate::driver::RunSummary;
use crate::game_of_life::LifeGrid;

/// Format boards and run results for the console
pub struct GridFormatter;

impl GridFormatter {
    /// Format a board with coordinates
    pub fn format_grid_with_coords(grid: &LifeGrid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.columns() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.columns() {
                output.push_str(if grid.get(row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Population and density of a board
    pub fn format_statistics(grid: &LifeGrid) -> String {
        let cells = grid.rows() * grid.columns();
        format!(
            "Board: {}x{}\nLiving cells: {}\nDensity: {:.1}%\n",
            grid.rows(),
            grid.columns(),
            grid.population(),
            grid.population() as f64 / cells as f64 * 100.0
        )
    }

    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = format!(
            "Ran {} generation(s), {} living cell(s) remain",
            summary.generations, summary.population
        );
        if summary.reached_fixed_point {
            output.push_str(" (fixed point reached)");
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
