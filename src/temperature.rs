//! Temperature event placeholder.
//!
//! Diurnal-cycle bedrock fracturing (probability driven by illumination,
//! elevation, and vegetation density) is not implemented. The entry point
//! exists so event dispatch stays total.

use crate::grid::TerrainGrid;

/// No-op: thermal weathering is not implemented.
pub fn apply_temperature(_grid: &mut TerrainGrid, _x: i32, _y: i32) {}
