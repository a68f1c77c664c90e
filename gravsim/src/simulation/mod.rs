pub mod states;
pub mod trail;
pub mod error;
pub mod params;
pub mod engine;
pub mod forces;
pub mod merge;
pub mod integrator;
pub mod scenario;
