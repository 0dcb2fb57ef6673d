//! CLI module for igi-graph.
//!
//! Subcommands:
//! - `render`: Build a render bundle from a node list
//! - `hover`: Print per-node hover text
//! - `export`: Re-write a node list as JSON

mod export;
mod hover;
mod render;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

pub use export::ExportCommand;
pub use hover::HoverCommand;
pub use render::RenderCommand;

use crate::config::DisplayConfig;
use crate::render::HoverSections;

/// IGI Graph - 3D viewer pipeline for game-level graphs
#[derive(Parser)]
#[command(name = "igi-graph")]
#[command(about = "Turn parsed game-level graphs into 3D render bundles")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a render bundle for the rendering backend
    Render(RenderCommand),

    /// Print the hover text of every node
    Hover(HoverCommand),

    /// Export the node list as JSON
    Export(ExportCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Render(cmd) => cmd.run(),
            Command::Hover(cmd) => cmd.run(),
            Command::Export(cmd) => cmd.run(),
        }
    }
}

/// Hover section toggles.
///
/// `--links` turns a section on, `--links=false` turns it off; an absent
/// flag keeps the configured value.
#[derive(Args, Debug, Clone, Default)]
pub struct SectionArgs {
    /// Show node links (also draws edges when rendering)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub links: Option<bool>,

    /// Show node material
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub material: Option<bool>,

    /// Show node gamma and radius
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub gamma_radius: Option<bool>,

    /// Show node criteria
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub criteria: Option<bool>,
}

impl SectionArgs {
    /// Merge with the configured defaults.
    pub fn resolve(&self, display: &DisplayConfig) -> HoverSections {
        HoverSections {
            links: self.links.unwrap_or(display.links),
            material: self.material.unwrap_or(display.material),
            gamma_radius: self.gamma_radius.unwrap_or(display.gamma_radius),
            criteria: self.criteria.unwrap_or(display.criteria),
        }
    }

    /// Write the resolved toggles back into `display`.
    pub fn apply(&self, display: &mut DisplayConfig) {
        let sections = self.resolve(display);
        display.links = sections.links;
        display.material = sections.material;
        display.gamma_radius = sections.gamma_radius;
        display.criteria = sections.criteria;
    }
}

/// Write to `output` if given, stdout otherwise.
fn write_output(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content)
        }
    }
}

/// Shared input argument.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the node list JSON produced by the level file parser
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_command() {
        let app = App::try_parse_from([
            "igi-graph",
            "render",
            "level.json",
            "--mode",
            "mesh",
            "--links",
            "--size-scale",
            "20",
        ])
        .unwrap();

        let Command::Render(cmd) = app.command else {
            panic!("expected render command");
        };
        assert_eq!(cmd.mode.as_deref(), Some("mesh"));
        assert_eq!(cmd.size_scale, Some(20.0));
        assert_eq!(cmd.sections.links, Some(true));
        assert_eq!(cmd.sections.criteria, None);
        assert_eq!(cmd.input.input, PathBuf::from("level.json"));
    }

    #[test]
    fn test_section_flags_override_config() {
        let display = DisplayConfig {
            criteria: true,
            links: true,
            ..DisplayConfig::default()
        };
        let args = SectionArgs {
            material: Some(true),
            links: Some(false),
            ..SectionArgs::default()
        };
        let sections = args.resolve(&display);
        assert!(sections.material && sections.criteria);
        assert!(!sections.links && !sections.gamma_radius);
    }

    #[test]
    fn test_section_flags_can_disable() {
        let app = App::try_parse_from([
            "igi-graph",
            "hover",
            "level.json",
            "--criteria=false",
            "--material",
        ])
        .unwrap();

        let Command::Hover(cmd) = app.command else {
            panic!("expected hover command");
        };
        assert_eq!(cmd.sections.criteria, Some(false));
        assert_eq!(cmd.sections.material, Some(true));
        assert_eq!(cmd.sections.links, None);
    }
}
