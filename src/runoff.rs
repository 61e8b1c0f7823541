//! Runoff event: one water droplet walked downhill, absorbing moisture,
//! eroding rock and bedrock, and depositing carried sediment.
//!
//! Conventions:
//! - The walk reads a consistent pre-event snapshot: every mutation along the
//!   path is deferred as a [`LayerChange`] and applied as one batch after the
//!   walk terminates. Elevation strictly decreases along the path, so no cell
//!   is visited twice within one walk.
//! - Eroded rock travels as carried sand; eroded bedrock travels as carried
//!   rock. Carried sediment deposits into the matching layers.

use crate::grid::{CellPos, LayerChange, TerrainGrid, TerrainLayer};
use crate::metrics;
use rand::Rng;

/// Parameters controlling one runoff droplet.
///
/// Thicknesses and water are in world units; rates are dimensionless.
#[derive(Clone, Copy, Debug)]
pub struct RunoffParams {
    /// Water volume carried by a fresh droplet.
    pub initial_water: f32,
    /// Moisture capacity contributed per unit of rock thickness.
    pub rock_moisture_capacity: f32,
    /// Moisture capacity contributed per unit of sand thickness.
    pub sand_moisture_capacity: f32,
    /// Moisture capacity contributed per unit of humus thickness.
    pub humus_moisture_capacity: f32,
    /// Absorption numerator; absorbed water scales with 1/steepness.
    pub absorption_rate: f32,
    /// Carried-sediment capacity per unit of remaining water.
    pub sediment_capacity_factor: f32,
    /// Fraction of excess carried rock deposited per overloaded step.
    pub rock_deposition_rate: f32,
    /// Fraction of excess carried sand deposited per overloaded step.
    pub sand_deposition_rate: f32,
    /// Fraction of excess carried humus deposited per overloaded step.
    pub humus_deposition_rate: f32,
    /// Fraction of spare capacity spent eroding the rock layer.
    pub rock_erosion_rate: f32,
    /// Fraction of spare capacity spent eroding bedrock.
    pub bedrock_erosion_rate: f32,
    /// Carried-sediment shielding of bedrock: factor 1/(1 + k·carried).
    pub sediment_shielding: f32,
    /// Flat moisture removed at the source cell after the walk, floored at 0.
    pub source_transpiration: f32,
}

impl Default for RunoffParams {
    fn default() -> Self {
        Self {
            initial_water: 1.6,
            rock_moisture_capacity: 0.02,
            sand_moisture_capacity: 0.05,
            humus_moisture_capacity: 0.20,
            absorption_rate: 0.12,
            sediment_capacity_factor: 0.01,
            rock_deposition_rate: 0.8,
            sand_deposition_rate: 0.7,
            humus_deposition_rate: 0.6,
            rock_erosion_rate: 0.008,
            bedrock_erosion_rate: 0.004,
            sediment_shielding: 1.2,
            source_transpiration: 0.5,
        }
    }
}

/// Diagnostic summary for one runoff walk.
#[derive(Default, Clone, Copy, Debug)]
pub struct RunoffStats {
    /// Downhill moves taken before termination.
    pub steps: u32,
    /// Bedrock thickness eroded along the path.
    pub bedrock_eroded: f64,
    /// Rock thickness eroded along the path.
    pub rock_eroded: f64,
    /// Total sediment thickness deposited (all materials).
    pub deposited: f64,
    /// Water absorbed into the moisture layer along the path.
    pub moisture_absorbed: f64,
}

/// Walk one droplet from `(x, y)` and apply its effects.
///
/// Order per step:
/// 1) pick a slope-weighted downhill neighbor;
/// 2) terminate (depositing all carried sediment in place) at a local
///    minimum or when the water is spent;
/// 3) absorb moisture bounded by local capacity and remaining water;
/// 4) deposit the capacity excess, or erode rock then shielded bedrock;
/// 5) move downhill.
///
/// Afterwards the accumulated changes are applied as one batch and the
/// source cell loses a flat amount of moisture (floored at zero).
pub fn apply_runoff<R: Rng>(
    grid: &mut TerrainGrid,
    p: &RunoffParams,
    rng: &mut R,
    x: i32,
    y: i32,
) -> RunoffStats {
    let source: CellPos = [x, y];
    let mut pos = source;
    let mut water = p.initial_water;
    let mut carried_rock = 0.0f32;
    let mut carried_sand = 0.0f32;
    let mut carried_humus = 0.0f32;
    let mut changes: Vec<LayerChange> = Vec::new();
    let mut stats = RunoffStats::default();

    loop {
        let descent = metrics::downhill_neighbor(grid, rng, pos, TerrainLayer::Humus);
        let next = match descent {
            Some(d) if water > 0.0 => d,
            _ => {
                // Local minimum or spent droplet: drop everything here.
                if carried_rock > 0.0 {
                    changes.push(LayerChange::new(pos, TerrainLayer::Rock, carried_rock));
                }
                if carried_sand > 0.0 {
                    changes.push(LayerChange::new(pos, TerrainLayer::Sand, carried_sand));
                }
                if carried_humus > 0.0 {
                    changes.push(LayerChange::new(pos, TerrainLayer::Humus, carried_humus));
                }
                stats.deposited += (carried_rock + carried_sand + carried_humus) as f64;
                break;
            }
        };

        // Moisture absorption, bounded by local capacity and remaining water.
        // A zero-slope division cannot occur: the chosen descent is strictly
        // downhill, so its steepness is positive.
        let cap = p.rock_moisture_capacity * grid.get(pos[0], pos[1], TerrainLayer::Rock)
            + p.sand_moisture_capacity * grid.get(pos[0], pos[1], TerrainLayer::Sand)
            + p.humus_moisture_capacity * grid.get(pos[0], pos[1], TerrainLayer::Humus);
        let remaining_cap = (cap - grid.get(pos[0], pos[1], TerrainLayer::Moisture)).max(0.0);
        let absorbed = (p.absorption_rate / next.steepness).min(remaining_cap).min(water);
        if absorbed > 0.0 {
            changes.push(LayerChange::new(pos, TerrainLayer::Moisture, absorbed));
            water -= absorbed;
            stats.moisture_absorbed += absorbed as f64;
        }

        // Sediment exchange against the droplet's carrying capacity.
        let capacity = water * p.sediment_capacity_factor;
        let carried_total = carried_rock + carried_sand + carried_humus;
        if carried_total > capacity {
            let ratio = (carried_total - capacity) / carried_total;
            let dep_rock = carried_rock * p.rock_deposition_rate * ratio;
            let dep_sand = carried_sand * p.sand_deposition_rate * ratio;
            let dep_humus = carried_humus * p.humus_deposition_rate * ratio;
            if dep_rock > 0.0 {
                changes.push(LayerChange::new(pos, TerrainLayer::Rock, dep_rock));
                carried_rock -= dep_rock;
            }
            if dep_sand > 0.0 {
                changes.push(LayerChange::new(pos, TerrainLayer::Sand, dep_sand));
                carried_sand -= dep_sand;
            }
            if dep_humus > 0.0 {
                changes.push(LayerChange::new(pos, TerrainLayer::Humus, dep_humus));
                carried_humus -= dep_humus;
            }
            stats.deposited += (dep_rock + dep_sand + dep_humus) as f64;
        } else {
            let mut spare = capacity - carried_total;

            // Loose rock weathers into carried sand first.
            let rock_here = grid.get(pos[0], pos[1], TerrainLayer::Rock);
            let rock_taken = (spare * p.rock_erosion_rate).min(rock_here).max(0.0);
            if rock_taken > 0.0 {
                changes.push(LayerChange::new(pos, TerrainLayer::Rock, -rock_taken));
                carried_sand += rock_taken;
                spare -= rock_taken;
                stats.rock_eroded += rock_taken as f64;
            }

            // Bedrock incision, shielded by the sediment already carried.
            let carried_total = carried_rock + carried_sand + carried_humus;
            let shield = 1.0 / (1.0 + p.sediment_shielding * carried_total);
            let bedrock_here = grid.get(pos[0], pos[1], TerrainLayer::Bedrock);
            let bedrock_taken =
                (spare * p.bedrock_erosion_rate * shield).min(bedrock_here).max(0.0);
            if bedrock_taken > 0.0 {
                changes.push(LayerChange::new(pos, TerrainLayer::Bedrock, -bedrock_taken));
                carried_rock += bedrock_taken;
                stats.bedrock_eroded += bedrock_taken as f64;
            }
        }

        pos = next.pos;
        stats.steps += 1;
    }

    grid.apply_changes(&changes);

    // Transpiration/seepage at the droplet's source.
    let m = grid.get(source[0], source[1], TerrainLayer::Moisture);
    grid.set(source[0], source[1], TerrainLayer::Moisture, (m - p.source_transpiration).max(0.0));

    stats
}
