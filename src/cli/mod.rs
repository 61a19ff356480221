//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod batch;
mod render;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, TotemConfig};
use crate::error::TotemError;
use crate::outline::{OutlineOverlay, OutlineSource};
use crate::pipeline::{TotemGenerator, TotemOptions};
use crate::skin::SkinSource;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Skintotem - turn a player skin into a 32x32 totem texture
#[derive(Parser)]
#[command(name = "totem")]
#[command(about = "Skintotem - turn a player skin into a 32x32 totem of undying texture")]
#[command(version)]
pub struct Cli {
    /// Log pipeline details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the skin comes from: a file or a player name
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Skin image file (PNG)
    pub input: Option<PathBuf>,

    /// Look up the skin of this player instead of reading a file
    #[arg(short, long, conflicts_with = "input")]
    pub player: Option<String>,
}

/// Options shared by every command that renders totems
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Composite the head overlay (hat) layer
    #[arg(long, conflicts_with = "no_overlay")]
    pub overlay: bool,

    /// Skip the head overlay layer
    #[arg(long)]
    pub no_overlay: bool,

    /// Outline image drawn over the finished totem
    #[arg(long, conflicts_with = "no_outline")]
    pub outline: Option<PathBuf>,

    /// Ignore any outline from the config file
    #[arg(long)]
    pub no_outline: bool,

    /// Enlargement factor for the exported preview or pack icon (1-64)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: Option<u32>,

    /// Config file (default: nearest totem.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one skin to a totem PNG
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file or directory.
        /// If omitted: {input}_totem.png (or {player}_totem.png)
        /// If directory (ends with /): dir/{name}_totem.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert one skin and write it as a resource pack
    Pack {
        #[command(flatten)]
        source: SourceArgs,

        /// Resource pack to write: a `.zip` path gives an archive,
        /// anything else a directory
        #[arg(short, long, default_value = "Custom_Totem.zip")]
        output: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert every PNG under a directory, in parallel
    Batch {
        /// Directory containing skin images
        dir: PathBuf,

        /// Directory for the generated totems
        #[arg(short, long, default_value = "totems")]
        output: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Install the stderr logger. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { source, output, render } => {
            render::run_render(&source, output.as_deref(), &render)
        }
        Commands::Pack { source, output, render } => render::run_pack(&source, &output, &render),
        Commands::Batch { dir, output, render } => batch::run_batch(&dir, &output, &render),
    }
}

/// Settings after merging config file and flags
pub(crate) struct Settings {
    pub config: TotemConfig,
    pub generator: TotemGenerator,
}

impl Settings {
    /// Export enlargement factor: flag, then config.
    pub fn scale(&self, render: &RenderArgs) -> u32 {
        render.scale.unwrap_or(self.config.export.scale)
    }
}

/// Load config and apply flag overrides.
pub(crate) fn resolve_settings(render: &RenderArgs) -> Result<Settings, TotemError> {
    let config = load_config(render.config.as_deref())?;

    let overlay = if render.overlay {
        true
    } else if render.no_overlay {
        false
    } else {
        config.render.overlay
    };

    let outline = if render.no_outline {
        None
    } else {
        render.outline.clone().or_else(|| config.render.outline.clone()).map(OutlineSource::File)
    };

    let generator = TotemGenerator::new(TotemOptions { overlay }, OutlineOverlay::new(outline));
    Ok(Settings { config, generator })
}

/// The skin source picked from the arguments
pub(crate) enum Selected<'a> {
    File(&'a Path),
    Player(&'a str),
}

impl Selected<'_> {
    /// Stem used for default output names.
    pub fn stem(&self) -> String {
        match self {
            Selected::File(path) => path.file_stem().unwrap_or_default().to_string_lossy().to_string(),
            Selected::Player(name) => name.to_string(),
        }
    }

    /// Encoded skin bytes, performing lookups for player names.
    pub fn load(&self) -> Result<Vec<u8>, TotemError> {
        let source = match self {
            Selected::File(path) => SkinSource::from_file(path)?,
            Selected::Player(name) => SkinSource::Player(name.to_string()),
        };
        fetch_skin_bytes(source)
    }
}

/// Check that exactly one source was given.
pub(crate) fn select_source(source: &SourceArgs) -> Result<Selected<'_>, &'static str> {
    match (&source.input, &source.player) {
        (Some(path), None) => Ok(Selected::File(path)),
        (None, Some(name)) => Ok(Selected::Player(name)),
        (None, None) => Err("a skin file or --player is required"),
        (Some(_), Some(_)) => Err("give either a skin file or --player, not both"),
    }
}

/// Turn a source into encoded skin bytes, performing lookups when needed.
#[cfg(feature = "remote")]
fn fetch_skin_bytes(source: SkinSource) -> Result<Vec<u8>, TotemError> {
    let client = crate::remote::MojangClient::new();
    crate::skin::acquire_skin(source, &client, &client)
}

#[cfg(not(feature = "remote"))]
fn fetch_skin_bytes(source: SkinSource) -> Result<Vec<u8>, TotemError> {
    match source {
        SkinSource::Upload(bytes) => Ok(bytes),
        SkinSource::Player(_) => Err(TotemError::Fetch {
            reason: "player lookups need the `remote` feature".to_string(),
        }),
    }
}

/// Directory part of an input path, used for default output placement.
pub(crate) fn input_dir(source: &SourceArgs) -> Option<&Path> {
    source.input.as_deref().and_then(Path::parent)
}
