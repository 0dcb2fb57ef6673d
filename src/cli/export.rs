//! Export subcommand - re-write the node list as JSON.

use std::path::PathBuf;

use clap::Parser;

use super::{write_output, InputArgs};
use crate::config::Config;
use crate::models::{load_nodes, nodes_to_json};
use crate::render::adjust_height;

/// Export the (optionally flattened) node list as pretty JSON.
#[derive(Parser)]
pub struct ExportCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep node heights instead of flattening them (`--keep-height=false` to flatten)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub keep_height: Option<bool>,

    /// Write the node list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    /// Run the export command.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        self.run_with(&config)
    }

    /// Run against an already loaded config.
    pub fn run_with(&self, config: &Config) -> color_eyre::Result<()> {
        let keep_height = self.keep_height.unwrap_or(config.display.keep_height);

        let nodes = adjust_height(load_nodes(&self.input.input)?, keep_height);
        tracing::info!("Exporting {} nodes", nodes.len());

        write_output(self.output.as_deref(), &nodes_to_json(&nodes)?)?;
        Ok(())
    }
}
