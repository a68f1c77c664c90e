//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – radius policy and trail bound
//! - [`ParametersConfig`] – gravitational constant and driver timing
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   radius_model: "volume"  # or "area"
//!   trail_max: 120          # positions kept per trail
//!
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   h0: 1.0                 # step size used by the driver
//!   t_end: 600.0            # total simulation time
//!
//! bodies:
//!   - name: "red"
//!     x: [ 860.0, 540.0 ]
//!     v: [ 1.0, 0.0 ]       # optional, defaults to rest
//!     m: 100.0
//!     color: [ 255, 0, 0 ]  # optional, defaults to white
//!   - name: "blue"
//!     x: [ 1060.0, 540.0 ]
//!     m: 100.0
//!     density: 2.0          # optional, defaults to 1.0
//!     color: [ 0, 0, 255 ]
//! ```

use serde::Deserialize;

use crate::simulation::states::{RadiusModel, Rgb, DEFAULT_TRAIL_MAX};

fn default_trail_max() -> usize {
    DEFAULT_TRAIL_MAX
}

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub radius_model: RadiusModel, // mass -> radius policy shared by all bodies
    #[serde(default = "default_trail_max")]
    pub trail_max: usize, // positions kept per trail
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius_model: RadiusModel::default(),
            trail_max: DEFAULT_TRAIL_MAX,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub h0: f64,    // time step size
    pub t_end: f64, // time end
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // label, defaults to the body's index
    pub x: Vec<f64>, // initial position [x, y]
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity [vx, vy]
    pub m: f64, // mass
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub color: Option<Rgb>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
