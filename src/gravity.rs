//! Gravity event: talus slippage of one granular material down its
//! friction-angle threshold.

use crate::grid::{TerrainGrid, TerrainLayer};
use crate::metrics;
use rand::Rng;

/// Material friction angles, in radians.
#[derive(Clone, Copy, Debug)]
pub struct GravityParams {
    /// Friction angle sustained by loose rock.
    pub rock_friction_angle: f32,
    /// Friction angle sustained by sand.
    pub sand_friction_angle: f32,
    /// Friction angle sustained by humus.
    pub humus_friction_angle: f32,
}

impl Default for GravityParams {
    fn default() -> Self {
        Self {
            rock_friction_angle: 40.0f32.to_radians(),
            sand_friction_angle: 33.0f32.to_radians(),
            humus_friction_angle: 25.0f32.to_radians(),
        }
    }
}

/// Slump one granular layer downhill from `(x, y)`.
///
/// Picks Rock/Sand/Humus with equal probability, then repeatedly selects a
/// slope-weighted downhill neighbor (elevation measured up to the chosen
/// layer) and, while the elevation gap exceeds `tan(friction) * cell_size`,
/// moves a uniform random fraction of the excess over that threshold to the
/// neighbor, bounded by the material actually present. Stops at a
/// local minimum, exhausted material, or a sub-threshold gap.
pub fn apply_gravity<R: Rng>(
    grid: &mut TerrainGrid,
    p: &GravityParams,
    rng: &mut R,
    x: i32,
    y: i32,
) {
    let (layer, friction) = match rng.gen_range(0..3) {
        0 => (TerrainLayer::Rock, p.rock_friction_angle),
        1 => (TerrainLayer::Sand, p.sand_friction_angle),
        _ => (TerrainLayer::Humus, p.humus_friction_angle),
    };
    let threshold = friction.tan() * grid.cell_size;

    let mut pos = [x, y];
    loop {
        let next = match metrics::downhill_neighbor(grid, rng, pos, layer) {
            Some(d) => d,
            None => break,
        };
        let gap = metrics::elevation(grid, pos[0], pos[1], layer)
            - metrics::elevation(grid, next.pos[0], next.pos[1], layer);
        if gap <= threshold {
            break;
        }
        let available = grid.get(pos[0], pos[1], layer);
        if available <= 0.0 {
            break;
        }
        let moved = (rng.gen::<f32>() * (gap - threshold)).min(available);
        grid.add(pos[0], pos[1], layer, -moved);
        grid.add(next.pos[0], next.pos[1], layer, moved);
        pos = next.pos;
    }
}
