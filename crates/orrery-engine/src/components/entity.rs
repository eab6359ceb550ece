use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;

/// Fat Entity: a single struct with optional components.
/// `pos`/`rotation`/`scale` are world-space; entities in a
/// [`TransformGraph`](crate::TransformGraph) get them rewritten on propagate.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are not rendered).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    /// Non-uniform scale.
    pub scale: Vec3,
    /// Renderable mesh (optional; entities without one are pure transforms,
    /// e.g. orbit pivots).
    pub mesh: Option<MeshComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// World-space bounding sphere radius of the mesh, if any.
    pub fn bounding_radius(&self) -> Option<f32> {
        self.mesh
            .as_ref()
            .map(|m| m.shape.bounding_radius() * self.scale.max_element())
    }
}
