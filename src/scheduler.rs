//! Per-year Monte Carlo event scheduler and the multi-year run driver.
//!
//! A year is `width * height * num_event_kinds` independent trials. Each
//! trial draws a cell and an event kind uniformly from the run-scoped
//! generator and dispatches; later trials read state mutated by earlier
//! trials in the same year. Draw order per trial is fixed (x, then y, then
//! kind, then any in-event draws), which makes a run bit-reproducible for a
//! given seed.

use crate::config::{EventParams, SimConfig};
use crate::grid::TerrainGrid;
use crate::{fire, gravity, lightning, runoff, temperature};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The kinds of local event a trial can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Water droplet runoff (erosion/deposition/moisture transport).
    Runoff,
    /// Thermal weathering (stub).
    Temperature,
    /// Lightning strike fracture.
    Lightning,
    /// Talus slippage.
    Gravity,
    /// Fire (stub).
    Fire,
}

impl EventKind {
    /// All event kinds, in dispatch order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Runoff,
        EventKind::Temperature,
        EventKind::Lightning,
        EventKind::Gravity,
        EventKind::Fire,
    ];
}

/// Diagnostic summary for one simulated year.
#[derive(Default, Clone, Copy, Debug)]
pub struct YearStats {
    /// Trials executed this year.
    pub trials: u64,
    /// Runoff walks started.
    pub runoff_events: u64,
    /// Lightning strikes that fractured bedrock.
    pub lightning_strikes: u64,
    /// Gravity events dispatched.
    pub gravity_events: u64,
}

/// Progress report delivered to the run observer after each completed year.
#[derive(Clone, Copy, Debug)]
pub struct YearReport {
    /// 1-based index of the year just completed.
    pub year: u32,
    /// Total years requested for the run.
    pub years_total: u32,
    /// Completion percentage, `(year / years_total) * 100`.
    pub percent: f32,
    /// Stats for the completed year.
    pub stats: YearStats,
}

/// Observer verdict after each year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunControl {
    /// Keep running.
    Continue,
    /// Stop before the next year; mutations made so far are kept.
    Stop,
}

/// Summary of a whole run.
#[derive(Default, Clone, Copy, Debug)]
pub struct RunStats {
    /// Years fully completed.
    pub years_completed: u32,
    /// Total trials executed.
    pub trials: u64,
    /// Whether the observer stopped the run early.
    pub cancelled: bool,
}

/// Execute one year of event trials against `grid`.
pub fn run_year<R: Rng>(
    grid: &mut TerrainGrid,
    params: &EventParams,
    config: &SimConfig,
    rng: &mut R,
) -> YearStats {
    let mut stats = YearStats::default();
    let trials = grid.width as u64 * grid.height as u64 * EventKind::ALL.len() as u64;
    for _ in 0..trials {
        let x = rng.gen_range(0..grid.width);
        let y = rng.gen_range(0..grid.height);
        let kind = EventKind::ALL[rng.gen_range(0..EventKind::ALL.len())];
        match kind {
            EventKind::Runoff => {
                runoff::apply_runoff(grid, &params.runoff, rng, x, y);
                stats.runoff_events += 1;
            }
            EventKind::Temperature => temperature::apply_temperature(grid, x, y),
            EventKind::Lightning => {
                if lightning::apply_lightning(
                    grid,
                    &params.lightning,
                    config.lightning_chance,
                    rng,
                    x,
                    y,
                ) {
                    stats.lightning_strikes += 1;
                }
            }
            EventKind::Gravity => {
                gravity::apply_gravity(grid, &params.gravity, rng, x, y);
                stats.gravity_events += 1;
            }
            EventKind::Fire => fire::apply_fire(grid, x, y),
        }
        stats.trials += 1;
    }
    stats
}

/// Run `config.years` years in order, seeding the generator exactly once.
///
/// The observer is invoked after each completed year with that year's
/// [`YearReport`]; returning [`RunControl::Stop`] cancels the run between
/// years, keeping every mutation made so far. Cancellation is never checked
/// mid-year.
pub fn run(
    grid: &mut TerrainGrid,
    config: &SimConfig,
    params: &EventParams,
    mut observer: impl FnMut(&YearReport) -> RunControl,
) -> RunStats {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut out = RunStats::default();
    for year in 1..=config.years {
        let stats = run_year(grid, params, config, &mut rng);
        out.trials += stats.trials;
        out.years_completed = year;
        let report = YearReport {
            year,
            years_total: config.years,
            percent: year as f32 / config.years as f32 * 100.0,
            stats,
        };
        if observer(&report) == RunControl::Stop && year < config.years {
            out.cancelled = true;
            break;
        }
    }
    out
}

/// Observer that logs one `[sim]` line per completed year and never cancels.
pub fn logging_observer() -> impl FnMut(&YearReport) -> RunControl {
    |r: &YearReport| {
        println!(
            "[sim] year {}/{} ({:.0}%) trials={} runoff={} strikes={}",
            r.year,
            r.years_total,
            r.percent,
            r.stats.trials,
            r.stats.runoff_events,
            r.stats.lightning_strikes
        );
        RunControl::Continue
    }
}
