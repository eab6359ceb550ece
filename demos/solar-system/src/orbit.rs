//! Circular orbital kinematics.
//!
//! Each planet hangs off an orbit pivot at the origin. The pivot turns about
//! +Y by `initial_phase + orbital_angle`; the planet sits `distance` out along
//! the pivot's +X axis and spins about its own Y axis.

use glam::{Quat, Vec3};
use orrery_engine::Rng;

use crate::bodies::PlanetDescriptor;

/// Self-spin rate in radians per second. Not scaled by the speed multiplier.
pub const SELF_SPIN_RATE: f32 = 0.5;

/// Per-planet animation state, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Accumulated orbital rotation since start (radians).
    pub orbital_angle: f32,
    /// Random starting angle, fixed at creation (radians, `[0, 2π)`).
    pub initial_phase: f32,
    /// Accumulated self-spin (radians).
    pub self_rotation: f32,
}

impl OrbitState {
    pub fn new(initial_phase: f32) -> Self {
        Self {
            orbital_angle: 0.0,
            initial_phase,
            self_rotation: 0.0,
        }
    }

    /// Draw the initial phase from `rng`.
    pub fn random(rng: &mut Rng) -> Self {
        Self::new(rng.next_angle())
    }

    /// Advance by `dt` seconds at the given speed multiplier.
    pub fn advance(&mut self, planet: &PlanetDescriptor, speed_multiplier: f32, dt: f32) {
        self.orbital_angle += planet.speed * speed_multiplier * dt;
        self.self_rotation += SELF_SPIN_RATE * dt;
    }

    /// Total angle of the orbit pivot about +Y.
    pub fn pivot_angle(&self) -> f32 {
        self.initial_phase + self.orbital_angle
    }

    pub fn pivot_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.pivot_angle())
    }

    pub fn spin_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.self_rotation)
    }

    /// Planet center in world space.
    pub fn world_position(&self, planet: &PlanetDescriptor) -> Vec3 {
        self.pivot_rotation() * Vec3::new(planet.distance, 0.0, 0.0)
    }
}
