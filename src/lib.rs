//! Regolith: a stochastic, layered landscape-evolution engine.
//!
//! Terrain is a stack of per-cell material layers on a regular square grid.
//! Aging the terrain by one "year" runs `width * height * num_event_kinds`
//! independent Monte Carlo trials, each applying one local event (runoff,
//! lightning, gravity, or a stub) at a randomly sampled cell. Ingest and
//! export exchange the layer stack with a host through named scalar fields.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod config;
pub mod export;
pub mod fields;
pub mod fire;
pub mod gravity;
pub mod grid;
pub mod ingest;
pub mod lightning;
pub mod metrics;
pub mod runoff;
pub mod scheduler;
pub mod temperature;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
