//! Fire event placeholder.
//!
//! Vegetation burn-off is not implemented. The entry point exists so event
//! dispatch stays total.

use crate::grid::TerrainGrid;

/// No-op: fire is not implemented.
pub fn apply_fire(_grid: &mut TerrainGrid, _x: i32, _y: i32) {}
