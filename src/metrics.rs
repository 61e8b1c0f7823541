//! Derived terrain geometry: elevation, slope, curvature, surface normal,
//! and the weighted downhill-neighbor selection shared by the event walks.
//!
//! All functions are stateless reads over a [`TerrainGrid`] snapshot.
//! Coordinates outside the grid are handled by replicate clamping here;
//! the grid itself never wraps.

use crate::grid::{CellPos, TerrainGrid, TerrainLayer};
use rand::Rng;
use smallvec::SmallVec;

/// Cardinal neighbor offsets, fixed iteration order.
pub const CARDINALS: [[i32; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Elevation at a cell: the sum of stacked layers from `Bedrock` up to and
/// including `top_layer`.
pub fn elevation(grid: &TerrainGrid, x: i32, y: i32, top_layer: TerrainLayer) -> f32 {
    debug_assert!(top_layer.is_stacked());
    let mut e = 0.0;
    for layer in TerrainLayer::STACKED {
        if layer.index() > top_layer.index() {
            break;
        }
        e += grid.get(x, y, layer);
    }
    e
}

/// Central-difference gradient magnitude of elevation at `(x, y)`, with each
/// sampled coordinate independently clamped to the grid (replicate boundary).
pub fn slope(grid: &TerrainGrid, x: i32, y: i32, top_layer: TerrainLayer) -> f32 {
    let xm = (x - 1).max(0);
    let xp = (x + 1).min(grid.width - 1);
    let ym = (y - 1).max(0);
    let yp = (y + 1).min(grid.height - 1);
    let two_dx = 2.0 * grid.cell_size;
    let gx = (elevation(grid, xp, y, top_layer) - elevation(grid, xm, y, top_layer)) / two_dx;
    let gy = (elevation(grid, x, yp, top_layer) - elevation(grid, x, ym, top_layer)) / two_dx;
    (gx * gx + gy * gy).sqrt()
}

/// Directional slope between two (not necessarily adjacent) cells:
/// positive when `b` is higher than `a`.
pub fn slope_between(grid: &TerrainGrid, a: CellPos, b: CellPos, top_layer: TerrainLayer) -> f32 {
    let dx = (b[0] - a[0]) as f32;
    let dy = (b[1] - a[1]) as f32;
    let dist = (dx * dx + dy * dy).sqrt() * grid.cell_size;
    (elevation(grid, b[0], b[1], top_layer) - elevation(grid, a[0], a[1], top_layer)) / dist
}

/// Curvature proxy at `(x, y)`.
///
/// Defined identically to [`slope`]; not true curvature. Lightning strike
/// probability therefore responds to slope.
pub fn curvature(grid: &TerrainGrid, x: i32, y: i32) -> f32 {
    slope(grid, x, y, TerrainLayer::Humus)
}

/// Unit surface normal at `(x, y)`: normalized cross product of the two
/// central-difference tangent vectors, z pointing up. Used by shading
/// consumers, not by the event loop.
pub fn surface_normal(grid: &TerrainGrid, x: i32, y: i32) -> [f32; 3] {
    let xm = (x - 1).max(0);
    let xp = (x + 1).min(grid.width - 1);
    let ym = (y - 1).max(0);
    let yp = (y + 1).min(grid.height - 1);
    let top = TerrainLayer::Humus;
    let two_dx = 2.0 * grid.cell_size;
    // tangents: tx = (2Δ, 0, de/dx·2Δ), ty = (0, 2Δ, de/dy·2Δ)
    let dzx = elevation(grid, xp, y, top) - elevation(grid, xm, y, top);
    let dzy = elevation(grid, x, yp, top) - elevation(grid, x, ym, top);
    let n = [-dzx * two_dx, -dzy * two_dx, two_dx * two_dx];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 0.0 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// A selected downhill step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descent {
    /// The chosen neighbor cell.
    pub pos: CellPos,
    /// Downhill steepness toward it (positive magnitude).
    pub steepness: f32,
}

/// Pick a downhill cardinal neighbor of `pos` by slope-weighted sampling.
///
/// In-bounds neighbors with strictly negative directional slope are weighted
/// by their steepness; one is chosen with a single uniform draw in
/// `[0, total_weight)` and a linear subtract scan. Floating-point shortfall
/// in the scan falls back to the last candidate. Returns `None` at a local
/// minimum (no downhill neighbor), consuming no draw.
pub fn downhill_neighbor<R: Rng>(
    grid: &TerrainGrid,
    rng: &mut R,
    pos: CellPos,
    top_layer: TerrainLayer,
) -> Option<Descent> {
    let mut candidates: SmallVec<[Descent; 4]> = SmallVec::new();
    let mut total_weight = 0.0f32;
    for d in CARDINALS {
        let n = [pos[0] + d[0], pos[1] + d[1]];
        if !grid.in_bounds(n) {
            continue;
        }
        let s = slope_between(grid, pos, n, top_layer);
        if s < 0.0 {
            candidates.push(Descent { pos: n, steepness: -s });
            total_weight += -s;
        }
    }
    let last = candidates.last().copied()?;
    let mut draw = rng.gen_range(0.0..total_weight);
    for c in &candidates {
        if draw < c.steepness {
            return Some(*c);
        }
        draw -= c.steepness;
    }
    Some(last)
}
