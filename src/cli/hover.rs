//! Hover subcommand - print per-node hover text.

use std::io::Write;

use clap::Parser;

use super::{InputArgs, SectionArgs};
use crate::config::Config;
use crate::models::load_nodes;
use crate::render::hover_texts;

/// Print the hover text of every node, one per line.
#[derive(Parser)]
pub struct HoverCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub sections: SectionArgs,
}

impl HoverCommand {
    /// Run the hover command.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        let mut stdout = std::io::stdout().lock();
        self.write_texts(&config, &mut stdout)
    }

    /// Write one hover line per node to `out`.
    pub fn write_texts(&self, config: &Config, out: &mut impl Write) -> color_eyre::Result<()> {
        let nodes = load_nodes(&self.input.input)?;

        for text in hover_texts(&nodes, self.sections.resolve(&config.display)) {
            writeln!(out, "{}", text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: &str = r#"[
        {"id": 1, "x": 0, "y": 0, "z": 0, "material": 6, "criteria": "walk", "edges": [2, 3]},
        {"id": 2, "x": 1, "y": 1, "z": 1, "material": "99", "edges": []},
        {"id": 3, "x": 2, "y": 2, "z": 2, "edges": []}
    ]"#;

    fn hover(args: &[&str], config: &Config) -> Vec<String> {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("level.json");
        std::fs::write(&input, LEVEL).unwrap();

        let mut argv = vec!["hover".to_string(), input.display().to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        let mut out = Vec::new();
        HoverCommand::try_parse_from(argv)
            .unwrap()
            .write_texts(config, &mut out)
            .unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_one_line_per_node() {
        let lines = hover(&["--links", "--material"], &Config::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Node ID: 1<br>Links: 2, 3<br>Material: 6");
        assert_eq!(lines[1], "Node ID: 2<br>Links: <br>Material: 99");
    }

    #[test]
    fn test_flag_disables_configured_section() {
        let mut config = Config::default();
        config.display.criteria = true;

        assert_eq!(hover(&[], &config)[0], "Node ID: 1<br>Criteria: walk");
        assert_eq!(hover(&["--criteria=false"], &config)[0], "Node ID: 1");
    }
}
