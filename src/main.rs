//! Command line driver for Conway's Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::{JsonRenderer, Renderer, RunSummary, Simulation, SimulationOptions, TerminalRenderer},
    game_of_life::{create_example_patterns, save_grid_to_file},
    load_initial_grid,
    utils::{ColorOutput, GridFormatter},
    LifeGrid,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a fixed, closed-boundary board")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that load a pattern
#[derive(Args)]
struct BoardArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Starting pattern file (overrides config)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of rows (overrides pattern header and config)
    #[arg(short, long)]
    rows: Option<usize>,

    /// Number of columns (overrides pattern header and config)
    #[arg(short = 'C', long)]
    columns: Option<usize>,

    /// Number of generations to run (overrides config)
    #[arg(short, long)]
    generations: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a pattern in the terminal
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Delay between generations in milliseconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Stop once a generation changes nothing
        #[arg(long)]
        until_stable: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the board after a number of generations
    Show {
        #[command(flatten)]
        board: BoardArgs,

        /// Save the final board as a pattern file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { board, interval, format, until_stable, verbose } => {
            run_command(board, interval, format, until_stable, verbose)
        }
        Commands::Show { board, output } => show_command(board, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn load_settings(config_path: &PathBuf, quiet: bool) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        if !quiet {
            let message = format!(
                "Config file {} not found, using defaults",
                config_path.display()
            );
            println!("{}", ColorOutput::warning(&message));
        }
        Ok(Settings::default())
    }
}

fn prepare(
    board: BoardArgs,
    mut overrides: CliOverrides,
    quiet: bool,
) -> Result<(Settings, LifeGrid)> {
    let mut settings = load_settings(&board.config, quiet)?;

    overrides.pattern_file = board.file;
    overrides.rows = board.rows;
    overrides.columns = board.columns;
    overrides.max_generations = board.generations;
    settings.merge_with_cli(&overrides);

    settings.validate().context("Configuration validation failed")?;
    settings.validate_input()?;

    let grid = load_initial_grid(&settings, &overrides)?;
    Ok((settings, grid))
}

fn run_command(
    board: BoardArgs,
    interval: Option<u64>,
    format: Option<OutputFormat>,
    until_stable: bool,
    verbose: bool,
) -> Result<()> {
    let overrides = CliOverrides {
        tick_millis: interval,
        format,
        stop_on_fixed_point: until_stable,
        ..Default::default()
    };
    // JSON output is meant for pipes, so keep stdout free of status lines
    let quiet = format == Some(OutputFormat::Json);
    let (settings, grid) = prepare(board, overrides, quiet)?;
    let quiet = settings.output.format == OutputFormat::Json;

    if verbose && !quiet {
        println!("Configuration:");
        println!("  Pattern file: {}", settings.input.pattern_file.display());
        println!("  Board: {}x{}", grid.rows(), grid.columns());
        match settings.simulation.max_generations {
            Some(limit) => println!("  Generations: {}", limit),
            None => println!("  Generations: unlimited"),
        }
        println!("  Tick: {}ms", settings.simulation.tick_millis);
        println!();
    }

    let options = SimulationOptions::from(&settings.simulation);
    let stdout = io::stdout().lock();

    let summary = match settings.output.format {
        OutputFormat::Text => {
            let renderer = TerminalRenderer::new(stdout, &settings.output);
            simulate(grid, renderer, options)?
        }
        OutputFormat::Json => simulate(grid, JsonRenderer::new(stdout), options)?,
    };

    if !quiet {
        println!("{}", ColorOutput::success(&GridFormatter::format_summary(&summary)));
    }
    Ok(())
}

fn simulate<R: Renderer>(
    grid: LifeGrid,
    renderer: R,
    options: SimulationOptions,
) -> Result<RunSummary> {
    Simulation::new(grid, renderer, options).run()
}

fn show_command(board: BoardArgs, output: Option<PathBuf>) -> Result<()> {
    let (settings, mut grid) = prepare(board, CliOverrides::default(), false)?;
    let generations = settings.simulation.max_generations.unwrap_or(0);

    println!("Initial board:");
    println!("{}", GridFormatter::format_grid_with_coords(&grid));

    let mut reached_fixed_point = false;
    for _ in 0..generations {
        if grid.evolve().is_empty() {
            reached_fixed_point = true;
        }
    }

    if generations > 0 {
        println!("After {} generation(s):", generations);
        println!("{}", GridFormatter::format_grid_with_coords(&grid));
    }

    print!("{}", GridFormatter::format_statistics(&grid));
    if reached_fixed_point {
        println!("{}", ColorOutput::info("Fixed point reached"));
    }
    io::stdout().flush()?;

    if let Some(path) = output {
        save_grid_to_file(&grid, &path)?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let patterns_dir = directory.join("patterns");
    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    let glider = patterns_dir.join("glider.txt");
    println!("Run: game_of_life run --file {}", glider.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--file",
            "glider.txt",
            "-r",
            "12",
            "-C",
            "20",
            "--generations",
            "5",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        match cli.unwrap().command {
            Commands::Run { board, format, .. } => {
                assert_eq!(board.rows, Some(12));
                assert_eq!(board.columns, Some(20));
                assert_eq!(board.generations, Some(5));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/blinker.txt").exists());
    }

    #[test]
    fn test_prepare_applies_overrides() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let board = BoardArgs {
            config: temp_dir.path().join("config/default.yaml"),
            file: Some(temp_dir.path().join("patterns/glider.txt")),
            rows: Some(15),
            columns: None,
            generations: Some(2),
        };
        let (settings, grid) = prepare(board, CliOverrides::default(), true).unwrap();

        assert_eq!((grid.rows(), grid.columns()), (15, 10));
        assert_eq!(grid.population(), 5);
        assert_eq!(settings.simulation.max_generations, Some(2));
    }

    #[test]
    fn test_show_command_saves_final_board() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();
        let output = temp_dir.path().join("out/blinker_after_one.txt");

        let board = BoardArgs {
            config: temp_dir.path().join("config/default.yaml"),
            file: Some(temp_dir.path().join("patterns/blinker.txt")),
            rows: None,
            columns: None,
            generations: Some(1),
        };
        show_command(board, Some(output.clone())).unwrap();

        let saved = std::fs::read_to_string(&output).unwrap();
        assert_eq!(saved, "5 5\n..*..\n..*..\n..*..\n.....\n.....\n");
    }

    #[test]
    fn test_show_command_rejects_missing_pattern() {
        let temp_dir = tempdir().unwrap();
        let board = BoardArgs {
            config: temp_dir.path().join("missing.yaml"),
            file: Some(temp_dir.path().join("missing.txt")),
            rows: None,
            columns: None,
            generations: None,
        };

        assert!(show_command(board, None).is_err());
    }
}
