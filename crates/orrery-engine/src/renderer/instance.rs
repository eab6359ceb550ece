use bytemuck::{Pod, Zeroable};

/// Per-instance mesh data read by the host renderer.
/// 20 floats = 80 bytes per instance, five vec4 rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius or ring major radius.
    pub radius: f32,
    /// World orientation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// Base color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    /// Emissive color, separate from the base color.
    pub er: f32,
    pub eg: f32,
    pub eb: f32,
    pub emissive_intensity: f32,
    pub roughness: f32,
    /// 0 = sphere, 1 = ring.
    pub shape: f32,
    /// Ring tube thickness (0 for spheres).
    pub thickness: f32,
    pub _pad: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of mesh instances rebuilt every frame.
pub struct InstanceBuffer {
    instances: Vec<MeshInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_slice(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_80_bytes() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
        assert_eq!(MeshInstance::STRIDE_BYTES, 80);
    }

    #[test]
    fn push_and_count() {
        let mut buf = InstanceBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
