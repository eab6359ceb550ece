//! Planet data: visual properties and circular-orbit parameters.
//!
//! Scenic scale, not physical: distances and sizes are chosen so every
//! planet is visible from the default camera.

use serde::{Deserialize, Serialize};
use orrery_engine::Color;

/// Static description of one planet. Never mutated after load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetDescriptor {
    /// Unique display name.
    pub name: &'static str,
    /// Surface color as `#RRGGBB`.
    pub color: &'static str,
    /// Sphere radius.
    pub size: f32,
    /// Orbital radius from the system origin.
    pub distance: f32,
    /// Base angular speed in radians per second at multiplier 1.0.
    pub speed: f32,
}

impl PlanetDescriptor {
    pub fn color(&self) -> Color {
        Color::from_hex(self.color).unwrap_or_else(|| {
            log::warn!("{}: bad color {:?}, using white", self.name, self.color);
            Color::WHITE
        })
    }
}

pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [PlanetDescriptor; PLANET_COUNT] = [
    PlanetDescriptor { name: "Mercury", color: "#B0B0B0", size: 0.4, distance: 10.0, speed: 4.1 },
    PlanetDescriptor { name: "Venus",   color: "#E3BB76", size: 0.8, distance: 15.0, speed: 1.6 },
    PlanetDescriptor { name: "Earth",   color: "#2B3284", size: 1.0, distance: 20.0, speed: 1.0 },
    PlanetDescriptor { name: "Mars",    color: "#D14A28", size: 0.6, distance: 25.0, speed: 0.5 },
    PlanetDescriptor { name: "Jupiter", color: "#BCB19C", size: 3.5, distance: 35.0, speed: 0.08 },
    PlanetDescriptor { name: "Saturn",  color: "#C5AB6E", size: 3.0, distance: 45.0, speed: 0.03 },
    PlanetDescriptor { name: "Uranus",  color: "#93B8BE", size: 1.8, distance: 55.0, speed: 0.01 },
    PlanetDescriptor { name: "Neptune", color: "#4b70dd", size: 1.7, distance: 65.0, speed: 0.006 },
];

/// Reference to an entry of [`PLANETS`]. Always a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PlanetId(usize);

impl PlanetId {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < PLANET_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn descriptor(self) -> &'static PlanetDescriptor {
        &PLANETS[self.0]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// All planets, innermost first.
    pub fn all() -> impl Iterator<Item = PlanetId> {
        (0..PLANET_COUNT).map(PlanetId)
    }
}

impl TryFrom<usize> for PlanetId {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| format!("planet index {index} out of range"))
    }
}

impl From<PlanetId> for usize {
    fn from(id: PlanetId) -> usize {
        id.0
    }
}

/// Look up a planet by its display name (exact match).
pub fn planet_by_name(name: &str) -> Option<PlanetId> {
    PlanetId::all().find(|p| p.name() == name)
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 4.5;
pub const SUN_COLOR: &str = "#FFD700";
pub const SUN_EMISSIVE: &str = "#FFD000";
pub const SUN_EMISSIVE_INTENSITY: f32 = 2.0;
pub const SUN_LIGHT_INTENSITY: f32 = 2.0;
pub const SUN_LIGHT_DISTANCE: f32 = 100.0;
pub const SUN_LIGHT_DECAY: f32 = 2.0;
pub const AMBIENT_INTENSITY: f32 = 0.1;

// ── Materials ────────────────────────────────────────────────────────

pub const PLANET_ROUGHNESS: f32 = 0.7;
/// Emissive intensity of the selected planet.
pub const EMISSIVE_SELECTED: f32 = 0.6;
pub const EMISSIVE_IDLE: f32 = 0.1;

pub const RING_THICKNESS: f32 = 0.05;
pub const RING_OPACITY: f32 = 0.2;
