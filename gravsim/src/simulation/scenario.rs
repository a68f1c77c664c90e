//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! bundle containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::{reached_end, Engine, StepReport};
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters = Parameters {
            g: cfg.parameters.g,
            h0: cfg.parameters.h0,
            t_end: cfg.parameters.t_end,
            trail_max: cfg.engine.trail_max,
            radius_model: cfg.engine.radius_model,
        };

        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<Body>, SimError>>()?;

        let engine = Engine::from_parameters(&parameters);
        let system = System::with_policy(bodies, parameters.radius_model, parameters.trail_max);

        info!(
            "scenario: {} bodies, total mass {:.3}, G = {}, {:?} radii",
            system.len(),
            system.total_mass(),
            parameters.g,
            parameters.radius_model
        );

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }

    /// One tick with the configured step size
    pub fn step(&mut self) -> Result<StepReport, SimError> {
        self.engine.step(&mut self.system, self.parameters.h0)
    }

    pub fn is_finished(&self) -> bool {
        reached_end(self.system.t, self.parameters.h0, self.parameters.t_end)
    }
}

/// Map a `BodyConfig` to a runtime `Body` using nalgebra vectors
///
/// Radius model and trail bound are applied by the `System` afterwards
fn build_body(i: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    let name = bc.name.clone().unwrap_or_else(|| i.to_string());

    let x = vec2(&name, "x", &bc.x)?;
    let v = match &bc.v {
        Some(v) => vec2(&name, "v", v)?,
        None => NVec2::zeros(),
    };

    let mut body = Body::new(name, bc.m, x)?.with_velocity(v);
    if let Some(color) = bc.color {
        body = body.with_color(color);
    }
    if let Some(density) = bc.density {
        body = body.with_density(density)?;
    }

    Ok(body)
}

fn vec2(name: &str, field: &str, xs: &[f64]) -> Result<NVec2, SimError> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidConfig(format!(
            "body '{}': `{}` needs 2 components, got {}",
            name,
            field,
            xs.len()
        ))),
    }
}
