//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/igi-graph/config.toml` (XDG) or platform config dir
//! 2. Project config: `.igi-graph.toml`
//! 3. Environment variables: `IGI_GRAPH_*` (nested keys split on `__`)
//!
//! # Example
//!
//! ```toml
//! [display]
//! mode = "mesh"
//! symbol = "diamond"
//! links = true
//! size_scale = 30.0
//! keep_height = true
//!
//! [materials.names]
//! 12 = "LAVA"
//!
//! [materials.colors]
//! LAVA = "red"
//! ```
//!
//! Material entries are layered over the built-in tables. Command-line flags
//! override everything for a single invocation.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::materials::MaterialTables;
use crate::render::constants::DEFAULT_SIZE_SCALE;
use crate::render::{HoverSections, MarkerSymbol, RenderMode, RenderOptions};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".igi-graph.toml";
/// Environment variable prefix.
pub const ENV_PREFIX: &str = "IGI_GRAPH_";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    /// Overrides layered on top of the built-in material tables.
    pub materials: MaterialTables,
}

/// Default render settings.
///
/// Mode and symbol stay as text here; they are validated when a render
/// cycle starts, so a bad value only affects that cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: String,
    pub symbol: String,
    pub links: bool,
    pub material: bool,
    pub gamma_radius: bool,
    pub criteria: bool,
    pub size_scale: f64,
    pub keep_height: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default().to_string(),
            symbol: MarkerSymbol::default().to_string(),
            links: false,
            material: false,
            gamma_radius: false,
            criteria: false,
            size_scale: DEFAULT_SIZE_SCALE,
            keep_height: false,
        }
    }
}

impl DisplayConfig {
    /// Hover sections enabled by default.
    pub fn sections(&self) -> HoverSections {
        HoverSections {
            links: self.links,
            material: self.material,
            gamma_radius: self.gamma_radius,
            criteria: self.criteria,
        }
    }

    /// Render options from these settings.
    ///
    /// The symbol is only validated in scatter mode, the one mode that uses it.
    pub fn render_options(&self) -> Result<RenderOptions, AppError> {
        let mode: RenderMode = self.mode.parse()?;
        let symbol = match mode {
            RenderMode::Scatter => self.symbol.parse()?,
            _ => MarkerSymbol::default(),
        };

        Ok(RenderOptions {
            mode,
            symbol,
            sections: self.sections(),
            size_scale: self.size_scale,
            keep_height: self.keep_height,
        })
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::user_config_path(), Path::new(PROJECT_CONFIG_FILE))
    }

    /// Load config from explicit user and project files (missing files are skipped).
    pub fn load_from(
        user_config: Option<PathBuf>,
        project_config: &Path,
    ) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();

        // Layer 1: User config (lowest priority)
        if let Some(user_config) = user_config {
            figment = figment.merge(Toml::file(user_config));
        }

        figment
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Built-in material tables with configured entries layered on top.
    pub fn material_tables(&self) -> MaterialTables {
        MaterialTables::builtin().merged_with(&self.materials)
    }

    /// User config path: ~/.config/igi-graph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> Option<PathBuf> {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("igi-graph").join("config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir().map(|p| p.join("igi-graph").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialCode;
    use serial_test::serial;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(None, &dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.material_tables(), *MaterialTables::builtin());
        let options = config.display.render_options().unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    #[serial]
    fn test_project_overrides_user() {
        let dir = tempfile::tempdir().unwrap();
        let user = write_toml(
            &dir,
            "user.toml",
            "[display]\nmode = \"line\"\nsize_scale = 20.0\nlinks = true\n",
        );
        let project = write_toml(&dir, "project.toml", "[display]\nmode = \"mesh\"\n");

        let config = Config::load_from(Some(user), &project).unwrap();
        assert_eq!(config.display.mode, "mesh");
        assert_eq!(config.display.size_scale, 20.0);
        assert!(config.display.links);
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(&dir, "project.toml", "[display]\nsize_scale = 20.0\n");

        std::env::set_var("IGI_GRAPH_DISPLAY__SIZE_SCALE", "75");
        let result = Config::load_from(None, &project);
        std::env::remove_var("IGI_GRAPH_DISPLAY__SIZE_SCALE");

        assert_eq!(result.unwrap().display.size_scale, 75.0);
    }

    #[test]
    #[serial]
    fn test_material_overrides_layer_on_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(
            &dir,
            "project.toml",
            "[materials.names]\n12 = \"LAVA\"\n\n[materials.colors]\nLAVA = \"red\"\n",
        );

        let tables = Config::load_from(None, &project).unwrap().material_tables();
        assert_eq!(tables.color_for_material(&MaterialCode::from(12)), "red");
        assert_eq!(tables.color_for_material(&MaterialCode::from(6)), "blue");
    }

    #[test]
    fn test_bad_symbol_ignored_outside_scatter() {
        let display = DisplayConfig {
            mode: "mesh".to_string(),
            symbol: "star".to_string(),
            ..DisplayConfig::default()
        };
        let options = display.render_options().unwrap();
        assert_eq!(options.mode, RenderMode::Mesh);
        assert_eq!(options.symbol, MarkerSymbol::default());
    }

    #[test]
    fn test_bad_mode_is_invalid_input() {
        let display = DisplayConfig {
            mode: "torus".to_string(),
            ..DisplayConfig::default()
        };
        let err = display.render_options().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_bad_symbol_is_reported() {
        let display = DisplayConfig {
            symbol: "star".to_string(),
            ..DisplayConfig::default()
        };
        assert!(matches!(
            display.render_options(),
            Err(AppError::InvalidSymbol(_))
        ));
    }
}
