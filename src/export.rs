//! Export: write the terrain grid back to host fields, plus the derived
//! combined-elevation and surface-color visualization outputs.

use crate::fields::{FieldSet, COLOR_FIELD, HEIGHT_FIELD};
use crate::grid::{TerrainGrid, TerrainLayer};
use crate::metrics;

/// Minimum thickness at which a stacked layer is considered visible for
/// surface coloring.
pub const VISIBILITY_THRESHOLD: f32 = 0.05;

/// Display color of one layer's exposed surface.
pub fn layer_color(layer: TerrainLayer) -> [f32; 3] {
    match layer {
        TerrainLayer::Bedrock => [0.50, 0.50, 0.50],
        TerrainLayer::Rock => [0.38, 0.35, 0.32],
        TerrainLayer::Sand => [0.76, 0.70, 0.50],
        TerrainLayer::Humus => [0.33, 0.24, 0.14],
        TerrainLayer::Moisture => [0.20, 0.35, 0.60],
        TerrainLayer::Vegetation => [0.22, 0.45, 0.18],
        TerrainLayer::DeadVegetation => [0.45, 0.42, 0.25],
    }
}

/// Write every layer, the combined `height` field, and the `color` field
/// into `fields`, creating absent outputs. Works on any valid grid,
/// including one from a cancelled run.
pub fn export(grid: &TerrainGrid, fields: &mut FieldSet) {
    fields.width = grid.width;
    fields.height = grid.height;
    fields.cell_size = grid.cell_size;
    let cells = grid.cells();

    for layer in TerrainLayer::ALL {
        let out = fields.scalar_mut(layer.name());
        out.resize(cells, 0.0);
        out.copy_from_slice(grid.layer(layer));
    }

    let height = fields.scalar_mut(HEIGHT_FIELD);
    height.resize(cells, 0.0);
    for y in 0..grid.height {
        for x in 0..grid.width {
            height[y as usize * grid.width as usize + x as usize] =
                metrics::elevation(grid, x, y, TerrainLayer::Humus);
        }
    }

    let color = fields.vector_mut(COLOR_FIELD);
    color.resize(cells, [0.0; 3]);
    for y in 0..grid.height {
        for x in 0..grid.width {
            color[y as usize * grid.width as usize + x as usize] = surface_color(grid, x, y);
        }
    }
}

/// Color of the topmost visible stacked layer at a cell: layers are scanned
/// from Humus down to Bedrock and the first one thicker than
/// [`VISIBILITY_THRESHOLD`] wins, defaulting to the bedrock color.
pub fn surface_color(grid: &TerrainGrid, x: i32, y: i32) -> [f32; 3] {
    for layer in TerrainLayer::STACKED.iter().rev() {
        if grid.get(x, y, *layer) > VISIBILITY_THRESHOLD {
            return layer_color(*layer);
        }
    }
    layer_color(TerrainLayer::Bedrock)
}
