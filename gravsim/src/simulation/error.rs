//! Error type shared by the simulation core and scenario building

use thiserror::Error;

/// Faults reported by body construction, scenario building and the tick
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be a positive, finite number
    #[error("body '{name}' has invalid mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    /// Density must be a positive, finite number
    #[error("body '{name}' has invalid density {density}")]
    NonPositiveDensity { name: String, density: f64 },

    /// Two non-overlapping bodies ended up at a zero or non-finite distance
    #[error("degenerate distance {distance} between '{first}' and '{second}'")]
    DegenerateDistance {
        first: String,
        second: String,
        distance: f64,
    },

    /// The inverse-square law overflowed for a pair or for a body's total
    #[error("non-finite gravitational force on '{body}' (partner: {partner:?})")]
    NonFiniteForce {
        body: String,
        partner: Option<String>,
    },

    /// Timestep must be a positive, finite number
    #[error("invalid timestep {0}")]
    InvalidTimestep(f64),

    /// Scenario file content that cannot be turned into a body set
    #[error("invalid scenario: {0}")]
    InvalidConfig(String),
}
