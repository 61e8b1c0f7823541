//! Run configuration and the aggregate event-parameter bundle.
//!
//! These are shared by the scheduler and the host boundary; per-event
//! numeric parameters live with their algorithms.

use crate::gravity::GravityParams;
use crate::lightning::LightningParams;
use crate::runoff::RunoffParams;

/// External simulation inputs, immutable for one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of simulated years to run.
    pub years: u32,
    /// Seed for the run-scoped random generator, consumed exactly once.
    pub seed: u64,
    /// Base lightning strike probability in `[0, 1]`.
    pub lightning_chance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { years: 1, seed: 0, lightning_chance: 0.05 }
    }
}

/// Physical parameters for every event algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventParams {
    /// Runoff droplet parameters.
    pub runoff: RunoffParams,
    /// Lightning strike parameters.
    pub lightning: LightningParams,
    /// Talus friction angles.
    pub gravity: GravityParams,
}
