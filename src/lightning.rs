//! Lightning event: strike-driven bedrock fracture on exposed terrain.

use crate::grid::{TerrainGrid, TerrainLayer};
use crate::metrics::{self, CARDINALS};
use rand::Rng;

/// Parameters controlling lightning strikes.
#[derive(Clone, Copy, Debug)]
pub struct LightningParams {
    /// Exponential curvature scaling applied to the strike probability.
    pub curvature_scale: f32,
    /// Curvature below this threshold suppresses strikes exponentially.
    pub curvature_threshold: f32,
    /// Bedrock thickness removed by one strike (bounded by what is present).
    pub bedrock_removed: f32,
    /// Share of the removed thickness deposited when the draw picks rock.
    pub rock_share: f32,
    /// Share of the removed thickness deposited when the draw picks sand.
    pub sand_share: f32,
}

impl Default for LightningParams {
    fn default() -> Self {
        Self {
            curvature_scale: 4.0,
            curvature_threshold: 1.0,
            bedrock_removed: 0.5,
            rock_share: 0.5,
            sand_share: 0.7,
        }
    }
}

/// Attempt one strike at `(x, y)` with base probability `chance`.
///
/// Strike probability is `chance * min(1, exp(scale * (curvature - threshold)))`.
/// On success, a fixed bedrock quantum is removed at the cell and a share of
/// it lands on a single candidate among the cell itself and its in-bounds
/// cardinal neighbors: the index draw selects one candidate, and only that
/// first-selected candidate receives material, as rock or sand depending on
/// a secondary draw. Returns whether a strike fractured any bedrock.
pub fn apply_lightning<R: Rng>(
    grid: &mut TerrainGrid,
    p: &LightningParams,
    chance: f32,
    rng: &mut R,
    x: i32,
    y: i32,
) -> bool {
    let c = metrics::curvature(grid, x, y);
    let gate = (p.curvature_scale * (c - p.curvature_threshold)).exp().min(1.0);
    let probability = chance * gate;
    if rng.gen::<f32>() >= probability {
        return false;
    }

    let removed = grid.get(x, y, TerrainLayer::Bedrock).min(p.bedrock_removed);
    if removed <= 0.0 {
        return false;
    }
    grid.add(x, y, TerrainLayer::Bedrock, -removed);

    let mut candidates = [[x, y]; 5];
    let mut n_candidates = 1;
    for d in CARDINALS {
        let n = [x + d[0], y + d[1]];
        if grid.in_bounds(n) {
            candidates[n_candidates] = n;
            n_candidates += 1;
        }
    }
    let target = candidates[rng.gen_range(0..n_candidates)];
    if rng.gen::<f32>() < 0.5 {
        grid.add(target[0], target[1], TerrainLayer::Rock, removed * p.rock_share);
    } else {
        grid.add(target[0], target[1], TerrainLayer::Sand, removed * p.sand_share);
    }
    true
}
