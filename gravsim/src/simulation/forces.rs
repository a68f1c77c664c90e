//! Pairwise Newtonian gravity for the 2D body set
//!
//! Two passes over the unordered pairs `(i, j)` with `i < j`:
//! - `detect_overlaps` flags touching pairs for merging, read-only
//! - `accumulate_forces` adds `G m_i m_j / d^2` into a force buffer,
//!   skipping pairs that touch
//!
//! Radii come from the field's `RadiusModel`, not from the bodies, so one
//! policy decides contact for the whole set.

use super::error::SimError;
use super::states::{Body, NVec2, RadiusModel};

/// Newtonian gravity with a configurable `G`
#[derive(Debug, Clone, Copy)]
pub struct ForceField {
    pub g: f64,                    // gravitational constant
    pub radius_model: RadiusModel, // radius policy used for contact
}

/// Outcome of the geometric test for one pair
enum Contact {
    Overlapping,
    Separated(f64), // center distance
}

impl ForceField {
    pub fn new(g: f64) -> Self {
        Self {
            g,
            radius_model: RadiusModel::default(),
        }
    }

    pub fn with_radius_model(mut self, radius_model: RadiusModel) -> Self {
        self.radius_model = radius_model;
        self
    }

    /// Pairs `(i, j)`, `i < j`, whose discs touch or overlap, in
    /// lexicographic order
    pub fn detect_overlaps(&self, bodies: &[Body]) -> Result<Vec<(usize, usize)>, SimError> {
        let n = bodies.len();
        let mut pairs = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if let Contact::Overlapping = self.contact(&bodies[i], &bodies[j])? {
                    pairs.push((i, j));
                }
            }
        }

        Ok(pairs)
    }

    /// Add the gravitational force on every body into `out[i]`
    ///
    /// On error `out` may hold a partial sum and should be discarded
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [NVec2]) -> Result<(), SimError> {
        let n = bodies.len();

        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];

                let d = match self.contact(bi, bj)? {
                    // touching pairs merge next tick, no force either way
                    Contact::Overlapping => continue,
                    Contact::Separated(d) => d,
                };

                // magnitude, attractive
                let f = self.g * bi.mass() * bj.mass() / (d * d);

                // delta points from j to i, so -f along it pulls i toward j
                let delta = bi.position() - bj.position();
                let theta = delta.y.atan2(delta.x);
                let fi = NVec2::new(-f * theta.cos(), -f * theta.sin());

                if !(f.is_finite() && fi.x.is_finite() && fi.y.is_finite()) {
                    return Err(SimError::NonFiniteForce {
                        body: bi.name().to_string(),
                        partner: Some(bj.name().to_string()),
                    });
                }

                out[i] += fi;
                out[j] -= fi;
            }
        }

        // finite pair terms can still overflow once summed
        for (b, f) in bodies.iter().zip(out.iter()) {
            if !(f.x.is_finite() && f.y.is_finite()) {
                return Err(SimError::NonFiniteForce {
                    body: b.name().to_string(),
                    partner: None,
                });
            }
        }

        Ok(())
    }

    /// Force on every body as a fresh buffer
    pub fn forces(&self, bodies: &[Body]) -> Result<Vec<NVec2>, SimError> {
        let mut out = vec![NVec2::zeros(); bodies.len()];
        self.accumulate_forces(bodies, &mut out)?;
        Ok(out)
    }

    /// Classify a pair, rejecting separations the inverse-square law cannot use
    fn contact(&self, a: &Body, b: &Body) -> Result<Contact, SimError> {
        let d = (a.position() - b.position()).norm();
        let reach = self.radius_model.radius(a.mass(), a.density())
            + self.radius_model.radius(b.mass(), b.density());

        if d <= reach {
            return Ok(Contact::Overlapping);
        }

        if d == 0.0 || !d.is_finite() {
            return Err(SimError::DegenerateDistance {
                first: a.name().to_string(),
                second: b.name().to_string(),
                distance: d,
            });
        }

        Ok(Contact::Separated(d))
    }
}
