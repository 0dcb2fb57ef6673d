//! Per-call render configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_SIZE_SCALE;
use crate::error::AppError;

/// The four supported render modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Shaped markers at node positions.
    #[default]
    Scatter,
    /// Plain markers at node positions.
    Surface,
    /// Markers joined by a polyline in list order.
    Line,
    /// Translucent interpolated surface beneath the markers.
    Mesh,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::Scatter,
        RenderMode::Surface,
        RenderMode::Line,
        RenderMode::Mesh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Scatter => "scatter",
            RenderMode::Surface => "surface",
            RenderMode::Line => "line",
            RenderMode::Mesh => "mesh",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = AppError;

    /// Accepts `scatter` as well as the selector label `3D Scatter`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed
            .strip_prefix("3D ")
            .or_else(|| trimmed.strip_prefix("3d "))
            .unwrap_or(trimmed);

        RenderMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::InvalidMode(s.to_string()))
    }
}

/// Marker shapes. Only meaningful in scatter mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSymbol {
    #[default]
    Circle,
    CircleOpen,
    Cross,
    Diamond,
    DiamondOpen,
    Square,
    SquareOpen,
    X,
}

impl MarkerSymbol {
    pub const ALL: [MarkerSymbol; 8] = [
        MarkerSymbol::Circle,
        MarkerSymbol::CircleOpen,
        MarkerSymbol::Cross,
        MarkerSymbol::Diamond,
        MarkerSymbol::DiamondOpen,
        MarkerSymbol::Square,
        MarkerSymbol::SquareOpen,
        MarkerSymbol::X,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerSymbol::Circle => "circle",
            MarkerSymbol::CircleOpen => "circle-open",
            MarkerSymbol::Cross => "cross",
            MarkerSymbol::Diamond => "diamond",
            MarkerSymbol::DiamondOpen => "diamond-open",
            MarkerSymbol::Square => "square",
            MarkerSymbol::SquareOpen => "square-open",
            MarkerSymbol::X => "x",
        }
    }
}

impl fmt::Display for MarkerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerSymbol {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkerSymbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == s.trim())
            .ok_or_else(|| AppError::InvalidSymbol(s.to_string()))
    }
}

/// Which hover text sections to include.
///
/// Gamma and radius are always toggled together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverSections {
    pub links: bool,
    pub material: bool,
    pub gamma_radius: bool,
    pub criteria: bool,
}

impl HoverSections {
    pub fn all() -> Self {
        Self {
            links: true,
            material: true,
            gamma_radius: true,
            criteria: true,
        }
    }
}

/// Immutable configuration for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub symbol: MarkerSymbol,
    /// Hover sections. `sections.links` also turns on edge geometry.
    pub sections: HoverSections,
    /// Multiplier applied to each node radius.
    pub size_scale: f64,
    /// When false, every node is flattened to the ground plane.
    pub keep_height: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            symbol: MarkerSymbol::default(),
            sections: HoverSections::default(),
            size_scale: DEFAULT_SIZE_SCALE,
            keep_height: false,
        }
    }
}

impl RenderOptions {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_symbol(mut self, symbol: MarkerSymbol) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_sections(mut self, sections: HoverSections) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_links(mut self, show: bool) -> Self {
        self.sections.links = show;
        self
    }

    pub fn with_size_scale(mut self, size_scale: f64) -> Self {
        self.size_scale = size_scale;
        self
    }

    pub fn with_keep_height(mut self, keep_height: bool) -> Self {
        self.keep_height = keep_height;
        self
    }

    /// Whether adjacency edges are drawn.
    pub fn show_links(&self) -> bool {
        self.sections.links
    }
}
