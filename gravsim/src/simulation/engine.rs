//! One simulation tick over the body set
//!
//! Phase order:
//! 1. overlap detection on the current snapshot (read-only)
//! 2. batch merge of overlapping clusters, staged on a working copy
//! 3. gravity among the survivors, into a side buffer
//! 4. commit: integrate, record trails, advance the clock
//!
//! Nothing is written to the `System` before phase 4, so a fault in any
//! earlier phase leaves it as it was.
//!
//! The engine's radius model decides contact in phase 1 and, together with
//! its trail bound, is applied to the whole set on commit.

use log::debug;

use super::error::SimError;
use super::forces::ForceField;
use super::integrator::integrate_system;
use super::merge::resolve_collisions;
use super::params::Parameters;
use super::states::{NVec2, RadiusModel, System, DEFAULT_TRAIL_MAX};

/// What a completed tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub merges: usize,    // bodies absorbed this tick
    pub survivors: usize, // bodies left after the tick
}

/// Run one tick of length `dt` under `params`
pub fn step(sys: &mut System, params: &Parameters, dt: f64) -> Result<StepReport, SimError> {
    Engine::from_parameters(params).step(sys, dt)
}

/// Whether a driver stepping by `dt` has reached `t_end`
///
/// The last tick is taken when it lands within half a step of `t_end`, so
/// accumulated rounding in `t` neither drops nor adds a tick
pub fn reached_end(t: f64, dt: f64, t_end: f64) -> bool {
    t + 0.5 * dt >= t_end
}

/// Settings for driving ticks
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    pub field: ForceField,
    pub trail_max: usize, // positions kept per trail
}

impl Engine {
    /// Engine with the default radius model and trail bound
    pub fn new(g: f64) -> Self {
        Self {
            field: ForceField::new(g),
            trail_max: DEFAULT_TRAIL_MAX,
        }
    }

    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            field: ForceField::new(params.g).with_radius_model(params.radius_model),
            trail_max: params.trail_max,
        }
    }

    pub fn radius_model(&self) -> RadiusModel {
        self.field.radius_model
    }

    pub fn step(&self, sys: &mut System, dt: f64) -> Result<StepReport, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimestep(dt));
        }

        let before = sys.len();

        // Phases 1 and 2
        let pairs = self.field.detect_overlaps(sys.bodies())?;
        let merged = resolve_collisions(sys.bodies(), &pairs);

        // Phase 3
        let survivors = merged.as_deref().unwrap_or(sys.bodies());
        let mut forces = vec![NVec2::zeros(); survivors.len()];
        self.field.accumulate_forces(survivors, &mut forces)?;

        // Phase 4
        if let Some(bodies) = merged {
            sys.replace_bodies(bodies);
        }
        if sys.radius_model() != self.radius_model() {
            sys.set_radius_model(self.radius_model());
        }
        if sys.trail_max() != self.trail_max {
            sys.set_trail_max(self.trail_max);
        }
        for (b, f) in sys.bodies_mut().iter_mut().zip(forces.iter()) {
            b.add_force(*f);
        }
        integrate_system(sys, dt);
        for b in sys.bodies_mut().iter_mut() {
            b.record_trail();
        }
        sys.ticks += 1;

        let report = StepReport {
            merges: before - sys.len(),
            survivors: sys.len(),
        };
        if report.merges > 0 {
            debug!(
                "tick {}: {} merge(s) from {} overlapping pair(s), {} bodies left",
                sys.ticks,
                report.merges,
                pairs.len(),
                report.survivors
            );
        }

        Ok(report)
    }

    /// Run ticks of `dt` until `t_end` is reached or a fault occurs
    ///
    /// Returns the number of ticks taken
    pub fn run_until(&self, sys: &mut System, dt: f64, t_end: f64) -> Result<u64, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimestep(dt));
        }
        let mut taken = 0;
        while !reached_end(sys.t, dt, t_end) {
            self.step(sys, dt)?;
            taken += 1;
        }
        Ok(taken)
    }
}
