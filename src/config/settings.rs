//! Configuration settings for the Game of Life runner

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub input: InputConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

/// Board size used when the pattern file has no header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    pub pattern_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Stop after this many generations; run until quit when absent
    pub max_generations: Option<u64>,
    pub tick_millis: u64,
    pub stop_on_fixed_point: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub clear_screen: bool,
    pub alive_symbol: char,
    pub dead_symbol: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                rows: 10,
                columns: 10,
            },
            input: InputConfig {
                pattern_file: PathBuf::from("patterns/blinker.txt"),
            },
            simulation: SimulationConfig {
                max_generations: None,
                tick_millis: 200,
                stop_on_fixed_point: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                clear_screen: true,
                alive_symbol: '█',
                dead_symbol: '·',
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.rows == 0 || self.board.columns == 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.rows,
                self.board.columns
            );
        }

        if self.output.alive_symbol == self.output.dead_symbol {
            anyhow::bail!("Alive and dead symbols must differ");
        }

        Ok(())
    }

    /// Check that the configured pattern file exists
    pub fn validate_input(&self) -> Result<()> {
        if !self.input.pattern_file.exists() {
            anyhow::bail!("Pattern file does not exist: {}", self.input.pattern_file.display());
        }
        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = pattern_file.clone();
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(tick_millis) = cli_overrides.tick_millis {
            self.simulation.tick_millis = tick_millis;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.stop_on_fixed_point {
            self.simulation.stop_on_fixed_point = true;
        }
    }

    /// Resolve the board size: explicit CLI flags, then the pattern header, then the config
    pub fn resolve_dimensions(
        &self,
        cli_overrides: &CliOverrides,
        header: Option<(usize, usize)>,
    ) -> (usize, usize) {
        let (rows, columns) = header.unwrap_or((self.board.rows, self.board.columns));
        (
            cli_overrides.rows.unwrap_or(rows),
            cli_overrides.columns.unwrap_or(columns),
        )
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern_file: Option<PathBuf>,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub max_generations: Option<u64>,
    pub tick_millis: Option<u64>,
    pub format: Option<OutputFormat>,
    pub stop_on_fixed_point: bool,
}
