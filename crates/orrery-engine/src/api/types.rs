use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
/// Ids are allocated from 1 upward; raw 0 means "no object" on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Decode a raw id coming from the host. `0` maps to `None` (background).
    pub fn from_raw(raw: u32) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Encode an optional id for the host (`None` becomes `0`).
    pub fn to_raw(id: Option<Self>) -> u32 {
        id.map(|e| e.0).unwrap_or(0)
    }
}

/// A game event communicated from Rust to the host UI.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}
