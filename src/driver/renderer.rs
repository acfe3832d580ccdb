//! Renderers that display generations from their deltas

use crate::config::OutputConfig;
use crate::game_of_life::{GenerationDelta, LifeGrid, Position};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Displays a running simulation.
///
/// After the initial frame a renderer only sees the cells that changed, so it
/// must keep whatever state it needs to redraw.
pub trait Renderer {
    fn draw_initial(&mut self, grid: &LifeGrid) -> Result<()>;

    fn draw_delta(&mut self, generation: u64, delta: &GenerationDelta) -> Result<()>;

    /// Polled once per tick before evolving
    fn should_quit(&self) -> bool {
        false
    }
}

/// Text renderer with its own copy of the frame
pub struct TerminalRenderer<W: Write> {
    out: W,
    rows: usize,
    columns: usize,
    frame: Vec<bool>,
    population: usize,
    alive_symbol: char,
    dead_symbol: char,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self {
            out,
            rows: 0,
            columns: 0,
            frame: Vec::new(),
            population: 0,
            alive_symbol: config.alive_symbol,
            dead_symbol: config.dead_symbol,
            clear_screen: config.clear_screen,
        }
    }

    fn set(&mut self, position: Position, alive: bool) -> Result<()> {
        if position.row >= self.rows || position.col >= self.columns {
            anyhow::bail!(
                "Cell {} is outside the {}x{} frame",
                position,
                self.rows,
                self.columns
            );
        }
        let idx = position.row * self.columns + position.col;
        self.frame[idx] = alive;
        Ok(())
    }

    /// Current frame as text, one line per row
    pub fn frame_to_string(&self) -> String {
        let mut output = String::with_capacity(self.rows * (self.columns + 1));
        for row in self.frame.chunks(self.columns.max(1)) {
            output.extend(row.iter().map(|&alive| {
                if alive { self.alive_symbol } else { self.dead_symbol }
            }));
            output.push('\n');
        }
        output
    }

    fn write_frame(&mut self, generation: u64) -> Result<()> {
        let frame = self.frame_to_string();
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.out, "Generation {} (Living: {})", generation, self.population)?;
        write!(self.out, "{}", frame)?;
        self.out.flush().context("Failed to flush frame")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_initial(&mut self, grid: &LifeGrid) -> Result<()> {
        self.rows = grid.rows();
        self.columns = grid.columns();
        self.frame = vec![false; self.rows * self.columns];
        self.population = 0;

        for position in grid.living_cells() {
            self.set(position, true)?;
            self.population += 1;
        }

        self.write_frame(0)
    }

    fn draw_delta(&mut self, generation: u64, delta: &GenerationDelta) -> Result<()> {
        if self.frame.is_empty() {
            anyhow::bail!("Generation {} drawn before the initial frame", generation);
        }
        for &position in &delta.births {
            self.set(position, true)?;
        }
        for &position in &delta.deaths {
            self.set(position, false)?;
        }
        self.population = (self.population + delta.births.len())
            .saturating_sub(delta.deaths.len());

        self.write_frame(generation)
    }
}

#[derive(Serialize)]
struct InitialFrame<'a> {
    generation: u64,
    rows: usize,
    columns: usize,
    alive: &'a [Position],
}

#[derive(Serialize)]
struct DeltaFrame<'a> {
    generation: u64,
    #[serde(flatten)]
    delta: &'a GenerationDelta,
}

/// Writes one JSON object per generation
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value).context("Failed to serialize frame")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn draw_initial(&mut self, grid: &LifeGrid) -> Result<()> {
        let alive = grid.living_cells();
        self.write_line(&InitialFrame {
            generation: 0,
            rows: grid.rows(),
            columns: grid.columns(),
            alive: &alive,
        })
    }

    fn draw_delta(&mut self, generation: u64, delta: &GenerationDelta) -> Result<()> {
        self.write_line(&DeltaFrame { generation, delta })
    }
}
