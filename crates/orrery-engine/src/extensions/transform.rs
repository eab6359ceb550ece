// extensions/transform.rs
//
// Transform hierarchy extension. Tracks parent-child relationships by EntityId.
// Decoupled from Entity/Scene internals: the graph owns local transforms,
// propagate() writes world transforms into the scene.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.register_with(pivot, LocalTransform::new());
//   graph.register_with(planet, LocalTransform::new().with_offset(Vec3::X * 20.0));
//   graph.set_parent(planet, Some(pivot));
//   graph.propagate(&mut scene);

use std::collections::HashMap;
use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Local transform data for entities in a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Position relative to parent (or world if no parent).
    pub offset: Vec3,
    /// Rotation relative to parent.
    pub rotation: Quat,
    /// Scale multiplier relative to parent.
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: LocalTransform,
}

/// Transform hierarchy graph. Manages parent-child relationships.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent, in registration order.
    roots: Vec<EntityId>,
    /// Set when hierarchy or a local transform changes, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity in the hierarchy with default local transform.
    pub fn register(&mut self, id: EntityId) {
        self.register_with(id, LocalTransform::default());
    }

    /// Register an entity with a specific local transform.
    pub fn register_with(&mut self, id: EntityId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if node.parent.is_none() && !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            if !self.nodes.contains_key(&p) {
                self.register(p);
            }
        }

        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(&p) {
                    if !parent_node.children.contains(&child) {
                        parent_node.children.push(child);
                    }
                }
                self.roots.retain(|&r| r != child);
            }
            None => {
                if !self.roots.contains(&child) {
                    self.roots.push(child);
                }
            }
        }

        self.dirty = true;
    }

    /// Set only the local rotation (the common per-frame animation case).
    pub fn set_local_rotation(&mut self, id: EntityId, rotation: Quat) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local.rotation = rotation;
            self.dirty = true;
        }
    }

    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Propagate transforms from roots down through the hierarchy,
    /// writing world pos/rotation/scale into scene entities.
    /// Nodes whose entity is missing from the scene still pass their
    /// transform on to their children.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }
        for &root in &self.roots {
            self.propagate_recursive(root, Vec3::ZERO, Quat::IDENTITY, Vec3::ONE, scene);
        }
        self.dirty = false;
    }

    fn propagate_recursive(
        &self,
        id: EntityId,
        parent_pos: Vec3,
        parent_rot: Quat,
        parent_scale: Vec3,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        let world_pos = parent_pos + parent_rot * (local.offset * parent_scale);
        let world_rot = (parent_rot * local.rotation).normalize();
        let world_scale = parent_scale * local.scale;

        if let Some(entity) = scene.get_mut(id) {
            entity.pos = world_pos;
            entity.rotation = world_rot;
            entity.scale = world_scale;
        }

        for &child in &node.children {
            self.propagate_recursive(child, world_pos, world_rot, world_scale, scene);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
