use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::config::{Config, GenerationMode};

#[derive(Parser, Debug)]
#[command(name = "vibe_uigen", version, about = "Randomized UI prompt composer and HTML generation proxy")]
pub struct Args {
    /// TOML config file; environment variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP proxy (default)
    Serve(ServeArgs),
    /// Print one composed prompt as JSON
    Compose(ComposeArgs),
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ServeArgs {
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub bind: Option<String>,

    #[arg(long, value_enum)]
    pub mode: Option<GenerationMode>,

    #[arg(long, default_value_t = false)]
    pub no_layout_diversity: bool,
}

impl ServeArgs {
    /// Command-line values win over file and environment.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(bind) = &self.bind {
            cfg.bind = bind.clone();
        }
        if let Some(mode) = self.mode {
            cfg.mode = mode;
        }
        if self.no_layout_diversity {
            cfg.diversify_layout = false;
        }
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ComposeArgs {
    /// Seed for a reproducible composition
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compose a branded business idea instead of a portfolio screen
    #[arg(long, default_value_t = false)]
    pub business: bool,

    /// Custom business description (implies --business)
    #[arg(long)]
    pub custom: Option<String>,

    #[arg(long, default_value_t = false)]
    pub no_metrics: bool,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}
