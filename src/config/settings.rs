//! Configuration settings for the console simulator

use crate::game_of_life::{CanvasLayout, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    /// Pause between printed generations
    pub delay_ms: u64,
    /// Past generations kept for stability detection
    pub history: usize,
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Pattern file to load; takes precedence over `preset`
    pub pattern_file: Option<PathBuf>,
    pub preset: Option<Pattern>,
    /// Board position of the seed's top-left corner, (x, y)
    pub origin: (isize, isize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub save_snapshots: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Glyph grid per generation
    Text,
    /// Glyph grid with row and column numbers
    Coords,
    /// One JSON snapshot per line
    Json,
}

impl BoardConfig {
    /// Board size that fills a pixel canvas
    pub fn from_layout(layout: &CanvasLayout) -> Result<Self> {
        let (width, height) = layout
            .board_dimensions()
            .context("Canvas layout does not fit a single cell")?;
        Ok(Self { width, height })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        // 600x600 px canvas with 20 px cells
        Self {
            width: 30,
            height: 30,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            simulation: SimulationConfig {
                generations: 50,
                delay_ms: 200,
                history: 16,
                stop_when_stable: true,
            },
            input: InputConfig {
                pattern_file: None,
                preset: Some(Pattern::Glider),
                origin: (0, 0),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                alive_glyph: '█',
                dead_glyph: '·',
                save_snapshots: false,
                output_directory: PathBuf::from("output/generations"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

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
        if self.board.width == 0 || self.board.height == 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.width,
                self.board.height
            );
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        match (&self.input.pattern_file, &self.input.preset) {
            (None, None) => anyhow::bail!("Either input.pattern_file or input.preset must be set"),
            (Some(file), _) if !file.exists() => {
                anyhow::bail!("Pattern file does not exist: {}", file.display())
            }
            _ => {}
        }

        if self.output.alive_glyph == self.output.dead_glyph {
            anyhow::bail!("Alive and dead glyphs must differ");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(preset) = cli_overrides.preset {
            // An explicit preset on the command line beats a configured file
            self.input.preset = Some(preset);
            if cli_overrides.pattern_file.is_none() {
                self.input.pattern_file = None;
            }
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save_snapshots = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub preset: Option<Pattern>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}
