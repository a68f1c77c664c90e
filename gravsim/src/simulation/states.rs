//! Core state types for the N-body simulation.
//!
//! - `Body`   one simulated mass with derived radius and momentum
//! - `System` the live body set plus the simulation clock
//!
//! Radius and momentum are never stored: they are derived from mass,
//! density, velocity and the body's `RadiusModel` every time they are read,
//! so they cannot drift out of sync with the state they depend on.

use std::f64::consts::PI;

use nalgebra::Vector2;
use serde::Deserialize;

use super::error::SimError;
use super::trail::TrailBuffer;

pub type NVec2 = Vector2<f64>;

/// Density used when a body does not set one
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Trail length used when a body does not set one
pub const DEFAULT_TRAIL_MAX: usize = 120;

/// How a body's radius follows from its mass
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RadiusModel {
    /// Disc whose area equals the mass: `r = sqrt(m / pi)`, density is ignored
    #[serde(rename = "area")]
    Area,

    /// Sphere of the given density: `r = cbrt(3m / (4 pi rho))`
    #[default]
    #[serde(rename = "volume")]
    Volume,
}

impl RadiusModel {
    pub fn radius(self, m: f64, density: f64) -> f64 {
        match self {
            RadiusModel::Area => (m / PI).sqrt(),
            RadiusModel::Volume => ((3.0 * m) / (4.0 * PI * density)).cbrt(),
        }
    }
}

/// Display color, one byte per channel
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Componentwise integer average (rounds down)
    pub fn blend(self, other: Rgb) -> Rgb {
        let avg = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Rgb(avg(self.0, other.0), avg(self.1, other.1), avg(self.2, other.2))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    m: f64,       // mass
    density: f64, // only read by RadiusModel::Volume
    x: NVec2,     // position
    v: NVec2,     // velocity
    a: NVec2,     // acceleration from the last integration
    f: NVec2,     // force accumulated this tick
    color: Rgb,
    radius_model: RadiusModel,
    trail: TrailBuffer,
}

impl Body {
    /// New body at rest, white, default density and radius model
    ///
    /// Fails if `m` is not a positive finite number
    pub fn new(name: impl Into<String>, m: f64, x: NVec2) -> Result<Self, SimError> {
        let name = name.into();
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::NonPositiveMass { name, mass: m });
        }

        Ok(Self {
            name,
            m,
            density: DEFAULT_DENSITY,
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            f: NVec2::zeros(),
            color: Rgb::WHITE,
            radius_model: RadiusModel::default(),
            trail: TrailBuffer::new(DEFAULT_TRAIL_MAX),
        })
    }

    pub fn with_velocity(mut self, v: NVec2) -> Self {
        self.v = v;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Fails if `density` is not a positive finite number
    pub fn with_density(mut self, density: f64) -> Result<Self, SimError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(SimError::NonPositiveDensity {
                name: self.name,
                density,
            });
        }
        self.density = density;
        Ok(self)
    }

    // accessors ====================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn acceleration(&self) -> NVec2 {
        self.a
    }

    pub fn force(&self) -> NVec2 {
        self.f
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn radius(&self) -> f64 {
        self.radius_model.radius(self.m, self.density)
    }

    pub fn radius_model(&self) -> RadiusModel {
        self.radius_model
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    // mutation from the driver =====================================================

    pub fn set_position(&mut self, x: NVec2) {
        self.x = x;
    }

    pub fn set_velocity(&mut self, v: NVec2) {
        self.v = v;
    }

    // mutation from the tick =======================================================

    // set-wide policy, changed only through `System`
    pub(crate) fn set_radius_model(&mut self, model: RadiusModel) {
        self.radius_model = model;
    }

    pub(crate) fn set_trail_max(&mut self, max_len: usize) {
        self.trail.set_max_len(max_len);
    }

    pub(crate) fn add_force(&mut self, f: NVec2) {
        self.f += f;
    }

    /// Semi-implicit Euler update, then clear the force accumulator
    pub(crate) fn advance(&mut self, dt: f64) {
        self.a = self.f / self.m;
        self.v += self.a * dt;
        self.x += self.v * dt;
        self.f = NVec2::zeros();
    }

    pub(crate) fn record_trail(&mut self) {
        self.trail.record(self.x);
    }

    /// Fold `other` into `self`: mass and momentum add, the position moves to
    /// the barycenter, colors average and the trail starts over
    pub(crate) fn absorb(&mut self, other: &Body) {
        let m = self.m + other.m;
        let p = self.momentum() + other.momentum();

        self.x = self.x * (self.m / m) + other.x * (other.m / m);
        self.v = p / m;

        // conserve volume so equal densities stay unchanged
        self.density = m / (self.m / self.density + other.m / other.density);
        self.m = m;

        self.color = self.color.blend(other.color);
        self.trail.clear();
    }
}

/// The live body set and the simulation clock
///
/// The radius model and trail bound are properties of the whole set: every
/// body added through `System` is brought onto them, and changing them
/// changes every body
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // live bodies, index order is the merge order
    radius_model: RadiusModel,
    trail_max: usize,
    pub t: f64,     // time
    pub ticks: u64, // completed ticks
}

impl Default for System {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl System {
    /// Body set with the default radius model and trail bound
    pub fn new(bodies: Vec<Body>) -> Self {
        Self::with_policy(bodies, RadiusModel::default(), DEFAULT_TRAIL_MAX)
    }

    pub fn with_policy(bodies: Vec<Body>, radius_model: RadiusModel, trail_max: usize) -> Self {
        let mut sys = Self {
            bodies,
            radius_model,
            trail_max,
            t: 0.0,
            ticks: 0,
        };
        sys.set_radius_model(radius_model);
        sys.set_trail_max(trail_max);
        sys
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable view for the driver; bodies can be moved but not added
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Add a body under the set's radius model and trail bound
    pub fn push(&mut self, mut body: Body) {
        body.set_radius_model(self.radius_model);
        body.set_trail_max(self.trail_max);
        self.bodies.push(body);
    }

    /// Swap in the survivors of a merge pass, which already share the policy
    pub(crate) fn replace_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
    }

    pub fn radius_model(&self) -> RadiusModel {
        self.radius_model
    }

    pub fn trail_max(&self) -> usize {
        self.trail_max
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body carrying `name`
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    /// Mass-weighted mean position, `None` for an empty set
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let m = self.total_mass();
        if self.bodies.is_empty() || m <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.position() * b.mass());
        Some(weighted / m)
    }

    /// Apply one radius policy to every body
    pub fn set_radius_model(&mut self, model: RadiusModel) {
        self.radius_model = model;
        for b in self.bodies.iter_mut() {
            b.set_radius_model(model);
        }
    }

    pub fn set_trail_max(&mut self, max_len: usize) {
        self.trail_max = max_len;
        for b in self.bodies.iter_mut() {
            b.set_trail_max(max_len);
        }
    }
}
