//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use commands::{AppContext, Commands};

use crate::core::rotation::validate_players;
use crate::core::settings::Settings;
use crate::core::simulate::DEFAULT_ROUNDS;
use crate::infra::dirs::RotationDirs;
use output::{resolve_color, OutputConfig};

/// mode_rotation - weighted map rotation for multi-mode lobbies
///
/// Offers a short-list of maps for the mode that is up next, favoring maps
/// that haven't been played recently.
#[derive(Parser, Debug)]
#[command(name = "mode_rotation")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Map catalog file
    #[arg(long, global = true, env = "MODE_ROTATION_MAPS", value_name = "PATH")]
    pub maps: Option<PathBuf>,

    /// Play log file
    #[arg(long, global = true, env = "MODE_ROTATION_LOG", value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Settings file (defaults to config.toml in the config directory)
    #[arg(long, global = true, env = "MODE_ROTATION_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Same as the `simulate` command
    #[arg(long, hide = true)]
    pub simulate: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Load the settings file
    pub fn load_settings(&self) -> Result<Settings> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => RotationDirs::new().config_path(),
        };

        Settings::load_from_path(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    /// Output settings from flags, environment and, once loaded, the settings file
    pub fn output_config(&self, settings: Option<&Settings>) -> OutputConfig {
        let no_color_env = std::env::var("NO_COLOR").ok();
        let setting = settings.and_then(|s| s.output.color);
        let color = resolve_color(self.no_color, setting, no_color_env.as_deref());
        OutputConfig::new(self.quiet, self.json, self.verbose).with_color(color)
    }

    /// Resolve paths and defaults; flags and environment beat the settings file
    pub fn context(&self, settings: &Settings) -> Result<AppContext> {
        let players = validate_players(settings.players())
            .context("Invalid rotation.players in settings")?;

        Ok(AppContext {
            maps_path: self.maps.clone().unwrap_or_else(|| settings.maps_path()),
            log_path: self.log.clone().unwrap_or_else(|| settings.log_path()),
            players,
            choices: settings.choices().max(1),
        })
    }

    /// Execute the CLI command
    pub fn run(self, settings: &Settings) -> Result<()> {
        let ctx = self.context(settings)?;
        tracing::debug!("Resolved context: {:?}", ctx);

        let command = match self.command {
            Some(cmd) => cmd,
            None if self.simulate => Commands::Simulate {
                rounds: DEFAULT_ROUNDS,
                players: None,
                seed: None,
            },
            None => Commands::Play { players: None },
        };

        command.run(&ctx)
    }
}
