//! Command-line arguments and config resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rb_core::SimConfig;

/// Rescue-bots city fire simulation.
#[derive(Parser, Debug)]
#[command(name = "rescue")]
#[command(about = "Simulate a fleet of firefighting agents in a burning city")]
pub struct Args {
    /// TOML scenario file; missing fields take their defaults
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of agents
    #[arg(long)]
    pub agents: Option<usize>,

    /// Number of structures
    #[arg(long)]
    pub structures: Option<usize>,

    /// Number of initial fires
    #[arg(long)]
    pub fires: Option<usize>,

    /// Number of water depots
    #[arg(long)]
    pub depots: Option<usize>,

    /// Tick limit
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Directory for tick_summaries.csv and simulation_state.json
    #[arg(long, default_value = "output/city")]
    pub out_dir: PathBuf,

    /// Skip all file output
    #[arg(long)]
    pub no_export: bool,
}

impl Args {
    /// The scenario: the TOML file (or defaults) with CLI overrides applied.
    pub fn resolve(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };

        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.agents {
            config.num_agents = v;
        }
        if let Some(v) = self.structures {
            config.num_structures = v;
        }
        if let Some(v) = self.fires {
            config.num_fires = v;
        }
        if let Some(v) = self.depots {
            config.num_depots = v;
        }
        if let Some(v) = self.max_ticks {
            config.max_ticks = v;
        }
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<SimConfig> {
    Ok(toml::from_str(text)?)
}
