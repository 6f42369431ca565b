//! Console driver for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_grid::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, load_board_from_file, Pattern},
    initial_board,
    utils::{BoardFormatter, ColorOutput},
    Simulation, Snapshot,
};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "life_grid")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print every generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file to seed the board with (overrides config)
        #[arg(short, long, conflicts_with = "preset")]
        pattern: Option<PathBuf>,

        /// Preset pattern: glider, blinker, block, beacon or toad (overrides config)
        #[arg(long)]
        preset: Option<Pattern>,

        /// Board width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Board height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Pause between generations in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Write a JSON snapshot of every generation into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show a pattern's neighbour counts and where it settles
    Inspect {
        /// Pattern file to inspect
        #[arg(short, long)]
        pattern: PathBuf,

        /// Generations to look ahead for a stable state
        #[arg(short, long, default_value_t = 64)]
        generations: usize,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s {
        "text" => Ok(OutputFormat::Text),
        "coords" => Ok(OutputFormat::Coords),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format '{}', expected text, coords or json", other)),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn format_error(err: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {:#}", err))
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config, pattern, preset, width, height, generations, delay_ms, format, output,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                delay_ms,
                pattern_file: pattern,
                preset,
                format,
                output_dir: output,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
        Commands::Inspect { pattern, generations } => inspect_command(&pattern, generations),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        // Validation happens after CLI overrides are applied
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    } else {
        info!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Invalid configuration")?;
    debug!("Settings: {:?}", settings);

    let board = initial_board(&settings)?;
    let mut simulation = Simulation::new(board, settings.simulation.history);
    let formatter = BoardFormatter::from_config(&settings.output);
    let format = settings.output.format;
    let delay = Duration::from_millis(settings.simulation.delay_ms);

    if settings.output.save_snapshots {
        std::fs::create_dir_all(&settings.output.output_directory).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                settings.output.output_directory.display()
            )
        })?;
    }

    let emit = |simulation: &Simulation| -> Result<()> {
        print!("{}", formatter.render(simulation.board(), simulation.generation(), format)?);
        if format != OutputFormat::Json {
            println!();
        }
        if settings.output.save_snapshots {
            let path = settings
                .output
                .output_directory
                .join(format!("generation_{:04}.json", simulation.generation()));
            Snapshot::capture(simulation.board(), simulation.generation()).save_to_file(path)?;
        }
        Ok(())
    };

    emit(&simulation)?;
    simulation.run_with(
        settings.simulation.generations,
        settings.simulation.stop_when_stable,
        |simulation| {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            emit(simulation)
        },
    )?;

    if format != OutputFormat::Json {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Finished after {} generations ({}, {} living cells)",
                simulation.generation(),
                simulation.stability(),
                simulation.board().living_count()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up example files..."));

    let config_path = directory.join("config/default.yaml");
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Settings::default().to_file(&config_path)?;
    println!("Created default configuration: {}", config_path.display());

    let patterns_dir = directory.join("patterns");
    create_example_patterns(&patterns_dir)?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // A configuration that seeds from one of the pattern files
    let mut from_file = Settings::default();
    from_file.input.pattern_file = Some(PathBuf::from("patterns/beacon.txt"));
    from_file.input.preset = None;
    from_file.input.origin = (12, 12);
    from_file.simulation.generations = 10;
    from_file.to_file(directory.join("config/examples/beacon.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Draw your own patterns in {}", patterns_dir.display());
    println!("3. Run: life_grid run --config {}", config_path.display());

    Ok(())
}

fn inspect_command(pattern_path: &Path, generations: usize) -> Result<()> {
    let board = load_board_from_file(pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Board ({}x{}):", board.width, board.height);
    println!("{}", BoardFormatter::default().format_with_coords(&board));

    println!("Statistics:");
    println!("  Living cells: {}", board.living_count());
    println!("  Density: {:.1}%", board.density() * 100.0);

    println!("\nNeighbour counts:");
    print!("{}", BoardFormatter::format_neighbor_counts(&board));

    let mut simulation = Simulation::new(board, 16);
    simulation.run(generations, true);
    let stability = simulation.stability();

    let verdict = format!("After {} generations: {}", simulation.generation(), stability);
    if stability.is_settled() {
        println!("\n{}", ColorOutput::success(&verdict));
    } else {
        println!("\n{}", ColorOutput::warning(&verdict));
    }

    Ok(())
}
