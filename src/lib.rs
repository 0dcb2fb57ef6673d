//! IGI Graph - 3D viewer pipeline for game-level node graphs
//!
//! Turns a parsed node list (position, material, adjacency) into a
//! mode-tagged render bundle plus per-node hover text.

pub mod cli;
pub mod config;
pub mod error;
pub mod materials;
pub mod models;
pub mod render;
