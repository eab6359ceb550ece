use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::renderer::instance::{InstanceBuffer, MeshInstance};

/// Build the instance buffer from entities with mesh components.
/// Inactive entities and pure transform nodes are skipped.
pub fn build_instance_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut InstanceBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(mesh) = &entity.mesh else { continue };

        let scale = entity.scale.max_element();
        let (radius, thickness) = match mesh.shape {
            MeshShape::Sphere { radius } => (radius * scale, 0.0),
            MeshShape::Ring { radius, thickness } => (radius * scale, thickness * scale),
        };
        let q = entity.rotation;

        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius,
            qx: q.x,
            qy: q.y,
            qz: q.z,
            qw: q.w,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            opacity: mesh.opacity,
            er: mesh.emissive.r,
            eg: mesh.emissive.g,
            eb: mesh.emissive.b,
            emissive_intensity: mesh.emissive_intensity,
            roughness: mesh.roughness,
            shape: mesh.shape.code(),
            thickness,
            _pad: 0.0,
        });
    }
}
