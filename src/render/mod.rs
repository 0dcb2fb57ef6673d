//! Render pipeline
//!
//! Turns a node list into a mode-tagged [`RenderBundle`].
//!
//! ## Module Structure
//!
//! - `height` - Optional flattening of the vertical axis
//! - `edges` - Adjacency lists to pen-up delimited line segments
//! - `style` - Material color and scaled marker size per node
//! - `hover` - Per-node hover text sections
//! - `renderer` - Mode dispatch and bundle assembly
//! - `bundle` - The payload handed to the rendering backend
//! - `options` - Per-call render configuration
//! - `constants` - Colors, sizes, and layout constants

mod bundle;
pub mod constants;
mod edges;
mod height;
mod hover;
mod options;
mod renderer;
mod style;

pub use bundle::{
    Axis, EdgeLines, Markers, MeshSurface, ModeGeometry, Positions, RenderBundle, SceneLayout,
};
pub use edges::{EdgeGeometry, PEN_UP};
pub use height::adjust_height;
pub use hover::{hover_text, hover_texts};
pub use options::{HoverSections, MarkerSymbol, RenderMode, RenderOptions};
pub use renderer::{render_nodes, GraphRenderer};
pub use style::NodeStyles;
