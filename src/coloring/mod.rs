// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex colorings and the r-dynamic consistency check.
//!
//! - Color / Coloring: partial vertex coloring
//! - evaluate: compromised vertices and edges for a coloring snapshot
//! - allowed_colors: palette entries a vertex may still take

pub mod color;
pub mod consistency;
pub mod palette;

pub use color::{Color, Coloring};
pub use consistency::{evaluate, CompromiseReport};
pub use palette::allowed_colors;
