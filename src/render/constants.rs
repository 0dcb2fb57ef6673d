//! Styling and layout constants for render bundles.

// =============================================================================
// Lines
// =============================================================================

/// Color of adjacency edge segments.
pub const EDGE_LINE_COLOR: &str = "red";
/// Color of the list-order polyline drawn in line mode.
pub const LINE_MODE_COLOR: &str = "red";

// =============================================================================
// Markers
// =============================================================================

/// Marker sizes are diameters, not areas.
pub const MARKER_SIZE_MODE: &str = "diameter";
/// Default multiplier applied to node radius.
pub const DEFAULT_SIZE_SCALE: f64 = 50.0;

// =============================================================================
// Mesh
// =============================================================================

/// Mesh surface opacity.
pub const MESH_OPACITY: f64 = 0.5;
/// Gradient driven by mesh intensity.
pub const MESH_COLORSCALE: &str = "Viridis";

// =============================================================================
// Hover Text
// =============================================================================

/// Line break understood by the rendering backend.
pub const SECTION_BREAK: &str = "<br>";
/// Separator between neighbor ids in the links section.
pub const LINK_SEPARATOR: &str = ", ";

// =============================================================================
// Height
// =============================================================================

/// Height every node is collapsed to when heights are not kept.
pub const FLAT_HEIGHT: i64 = 0;

// =============================================================================
// Scene Layout
// =============================================================================

/// Scene width in pixels.
pub const SCENE_WIDTH: u32 = 800;
/// Scene height in pixels.
pub const SCENE_HEIGHT: u32 = 600;
/// Axes scale to the data rather than a cube.
pub const SCENE_ASPECT_MODE: &str = "data";
