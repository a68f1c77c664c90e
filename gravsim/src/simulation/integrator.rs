//! Time integration for the body set
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! position drifts with the updated velocity. Forces must already be
//! accumulated on the bodies; they are cleared afterwards.

use super::states::{Body, System};

/// Advance every body by `dt` from its accumulated force
///
/// For each body:
/// - a = F / m
/// - v_n+1 = v_n + a dt
/// - x_n+1 = x_n + v_n+1 dt
/// - F = 0
pub fn symplectic_euler(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        b.advance(dt);
    }
}

/// Integrate the whole system and advance its clock by `dt`
pub fn integrate_system(sys: &mut System, dt: f64) {
    symplectic_euler(sys.bodies_mut(), dt);
    sys.t += dt;
}
