use serde::{Deserialize, Serialize};

/// Linear RGB color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string. Case-insensitive.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        Some(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Mesh primitive understood by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Torus lying in the entity's local XZ plane.
    Ring { radius: f32, thickness: f32 },
}

impl MeshShape {
    /// Wire code for the instance buffer.
    pub fn code(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
        }
    }

    /// Radius of a sphere enclosing the untransformed shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            MeshShape::Sphere { radius } => radius,
            MeshShape::Ring { radius, thickness } => radius + thickness,
        }
    }
}

/// Standard lit material on a mesh primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: Color,
    /// Self-illumination color (black = none).
    pub emissive: Color,
    /// Multiplier on `emissive`; values > 1 push into HDR range.
    pub emissive_intensity: f32,
    /// PBR roughness (default: 1.0).
    pub roughness: f32,
    /// 1.0 = opaque.
    pub opacity: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0 },
            color: Color::default(),
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            roughness: 1.0,
            opacity: 1.0,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: Color) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(radius: f32, thickness: f32, color: Color) -> Self {
        Self::new(MeshShape::Ring { radius, thickness }, color)
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
