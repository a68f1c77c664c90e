use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::ForceField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Timing for one body count
#[derive(Debug, Clone, Copy)]
pub struct BenchRow {
    pub n: usize,
    pub ms: f64, // mean wall time per call in milliseconds
}

/// Build a manual System of size `n`
///
/// Unit masses on a square grid, spaced well beyond their radii so the
/// timings are not disturbed by merges
fn make_system(n: usize) -> Result<System, SimError> {
    let side = (n as f64).sqrt().ceil() as usize;
    let spacing = 10.0;

    let bodies = (0..n)
        .map(|i| {
            let x = NVec2::new((i % side) as f64 * spacing, (i / side) as f64 * spacing);
            Body::new(i.to_string(), 1.0, x)
        })
        .collect::<Result<Vec<Body>, SimError>>()?;

    Ok(System::new(bodies))
}

fn make_params() -> Parameters {
    Parameters {
        g: 0.1,
        h0: 0.001,
        ..Parameters::default()
    }
}

/// Time the pairwise force pass alone
pub fn bench_forces() -> Result<Vec<BenchRow>, SimError> {
    let ns = [100, 200, 400, 800, 1600];
    let params = make_params();
    let field = ForceField::new(params.g);

    let mut rows = Vec::with_capacity(ns.len());
    for n in ns {
        let sys = make_system(n)?;
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        field.accumulate_forces(sys.bodies(), &mut out)?;
        out.fill(NVec2::zeros());

        let t0 = Instant::now();
        field.accumulate_forces(sys.bodies(), &mut out)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        rows.push(BenchRow { n, ms });
    }
    Ok(rows)
}

/// Time a full tick: detection, merge, forces, integration and trails
pub fn bench_step() -> Result<Vec<BenchRow>, SimError> {
    let ns = [100, 200, 400, 800, 1600];
    let steps = 3;
    let params = make_params();
    let engine = Engine::from_parameters(&params);

    let mut rows = Vec::with_capacity(ns.len());
    for n in ns {
        let mut sys = make_system(n)?;

        // Warm up
        engine.step(&mut sys, params.h0)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.step(&mut sys, params.h0)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        rows.push(BenchRow { n, ms });
    }
    Ok(rows)
}

/// Full tick timings for a smooth range of n, meant to be printed as CSV
pub fn bench_step_curve() -> Result<Vec<BenchRow>, SimError> {
    let params = make_params();
    let engine = Engine::from_parameters(&params);

    (50..=2000)
        .step_by(50)
        .map(|n| {
            // Small n: average over a few steps to smooth noise
            let steps = if n <= 500 { 5 } else { 1 };
            let mut sys = make_system(n)?;

            let t0 = Instant::now();
            for _ in 0..steps {
                engine.step(&mut sys, params.h0)?;
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

            Ok(BenchRow { n, ms })
        })
        .collect()
}
