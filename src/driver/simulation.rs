//! The driver loop: owns the board and renderer and advances generations

use super::Renderer;
use crate::config::SimulationConfig;
use crate::game_of_life::{GenerationDelta, LifeGrid};
use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    pub max_generations: Option<u64>,
    pub tick: Duration,
    pub stop_on_fixed_point: bool,
}

impl From<&SimulationConfig> for SimulationOptions {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            max_generations: config.max_generations,
            tick: Duration::from_millis(config.tick_millis),
            stop_on_fixed_point: config.stop_on_fixed_point,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    pub reached_fixed_point: bool,
}

/// A board together with the renderer displaying it
pub struct Simulation<R: Renderer> {
    grid: LifeGrid,
    renderer: R,
    options: SimulationOptions,
    generation: u64,
}

impl<R: Renderer> Simulation<R> {
    pub fn new(grid: LifeGrid, renderer: R, options: SimulationOptions) -> Self {
        Self {
            grid,
            renderer,
            options,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation and hand the delta to the renderer
    pub fn step(&mut self) -> Result<GenerationDelta> {
        let delta = self.grid.evolve();
        self.generation += 1;
        self.renderer.draw_delta(self.generation, &delta)?;
        Ok(delta)
    }

    fn limit_reached(&self) -> bool {
        self.options
            .max_generations
            .is_some_and(|limit| self.generation >= limit)
    }

    /// Draw the initial board, then tick until quit, the generation limit, or a
    /// fixed point when `stop_on_fixed_point` is set
    pub fn run(&mut self) -> Result<RunSummary> {
        self.renderer.draw_initial(&self.grid)?;

        let mut reached_fixed_point = false;
        while !self.renderer.should_quit() && !self.limit_reached() {
            let delta = self.step()?;

            if delta.is_empty() {
                reached_fixed_point = true;
                if self.options.stop_on_fixed_point {
                    break;
                }
            }

            if !self.options.tick.is_zero() {
                std::thread::sleep(self.options.tick);
            }
        }

        Ok(RunSummary {
            generations: self.generation,
            population: self.grid.population(),
            reached_fixed_point,
        })
    }

    pub fn into_parts(self) -> (LifeGrid, R) {
        (self.grid, self.renderer)
    }
}
