//! Render subcommand - build a render bundle from a node list.

use std::path::PathBuf;

use clap::Parser;

use super::{write_output, InputArgs, SectionArgs};
use crate::config::{Config, DisplayConfig};
use crate::error::AppError;
use crate::models::load_nodes;
use crate::render::{render_nodes, RenderOptions};

/// Build a render bundle from a node list JSON file.
#[derive(Parser)]
pub struct RenderCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Render mode: scatter, surface, line or mesh
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Marker symbol (scatter mode only)
    #[arg(short, long)]
    pub symbol: Option<String>,

    #[command(flatten)]
    pub sections: SectionArgs,

    /// Multiplier applied to node radius
    #[arg(long)]
    pub size_scale: Option<f64>,

    /// Keep node heights instead of flattening them (`--keep-height=false` to flatten)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub keep_height: Option<bool>,

    /// Write the bundle here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the bundle
    #[arg(long)]
    pub pretty: bool,
}

impl RenderCommand {
    /// Run the render command.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        self.run_with(&config)
    }

    /// Run against an already loaded config.
    ///
    /// An unknown mode is logged and produces no output.
    pub fn run_with(&self, config: &Config) -> color_eyre::Result<()> {
        let options = match self.options(config) {
            Ok(options) => options,
            Err(e) if e.is_invalid_input() => {
                tracing::error!("{}", e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let tables = config.material_tables();
        let nodes = load_nodes(&self.input.input)?;
        let bundle = render_nodes(nodes, &options, &tables);

        write_output(self.output.as_deref(), &bundle.to_json(self.pretty)?)?;
        Ok(())
    }

    /// Configured display settings with the flags applied on top.
    fn display(&self, config: &Config) -> DisplayConfig {
        let mut display = config.display.clone();
        if let Some(mode) = &self.mode {
            display.mode = mode.clone();
        }
        if let Some(symbol) = &self.symbol {
            display.symbol = symbol.clone();
        }
        if let Some(size_scale) = self.size_scale {
            display.size_scale = size_scale;
        }
        if let Some(keep_height) = self.keep_height {
            display.keep_height = keep_height;
        }
        self.sections.apply(&mut display);
        display
    }

    fn options(&self, config: &Config) -> Result<RenderOptions, AppError> {
        self.display(config).render_options()
    }
}
