//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g`,
//! - driver step size `h0` and end time `t_end`,
//! - trail bound and radius policy applied to every body

use super::states::{RadiusModel, DEFAULT_TRAIL_MAX};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,                    // gravitational constant
    pub h0: f64,                   // step size used by the driver
    pub t_end: f64,                // time end
    pub trail_max: usize,          // positions kept per trail
    pub radius_model: RadiusModel, // mass -> radius policy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 1.0,
            h0: 1.0,
            t_end: 1000.0,
            trail_max: DEFAULT_TRAIL_MAX,
            radius_model: RadiusModel::Volume,
        }
    }
}
