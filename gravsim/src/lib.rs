pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, Rgb, RadiusModel, DEFAULT_DENSITY, DEFAULT_TRAIL_MAX};
pub use simulation::trail::TrailBuffer;
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::forces::ForceField;
pub use simulation::merge::{merge_bodies, resolve_collisions};
pub use simulation::integrator::{symplectic_euler, integrate_system};
pub use simulation::engine::{step, reached_end, Engine, StepReport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_forces, bench_step, bench_step_curve};
