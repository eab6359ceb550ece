//! Scene lighting description for the host renderer.
//!
//! Lights are persistent and stay until explicitly removed.
//! The engine only describes lights; shading happens in the host.

use glam::Vec3;

/// A 3D point light with physically-based falloff.
///
/// Wire format (12 floats / 48 bytes):
/// `[x, y, z, r, g, b, intensity, distance, decay, pad×3]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Cut-off distance in world units (0 = infinite).
    pub distance: f32,
    /// Falloff exponent (2 = physically correct inverse square).
    pub decay: f32,
    _pad: [f32; 3],
}

pub const LIGHT_FLOATS: usize = 12;

impl PointLight {
    /// Create a new point light at `pos`.
    ///
    /// - `color`: RGB color (typically [0..1])
    /// - `intensity`: Light strength multiplier
    /// - `distance`: Cut-off distance in world units
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, distance: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            distance,
            decay: 2.0,
            _pad: [0.0; 3],
        }
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Active lights plus a uniform ambient term.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    ambient_intensity: f32,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [1.0, 1.0, 1.0],
            ambient_intensity: 1.0,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light. For a dark space scene use a low intensity like 0.1.
    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient = color;
        self.ambient_intensity = intensity.max(0.0);
    }

    /// Ambient color pre-multiplied by its intensity.
    pub fn ambient(&self) -> [f32; 3] {
        self.ambient.map(|c| c * self.ambient_intensity)
    }

    /// Pointer to the lights data for host reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), [1.0, 0.5, 0.0], 2.0, 100.0);
        assert_eq!(light.pos(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.distance, 100.0);
        assert_eq!(light.decay, 2.0);
    }

    #[test]
    fn ambient_is_premultiplied() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0]);
        state.set_ambient([1.0, 1.0, 1.0], 0.1);
        assert_eq!(state.ambient(), [0.1, 0.1, 0.1]);
    }

    #[test]
    fn add_and_clear() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.0, 100.0));
        assert_eq!(state.count(), 1);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn point_light_wire_size() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }
}
