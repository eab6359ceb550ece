pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, MeshShape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FrameTime;
pub use renderer::instance::{MeshInstance, InstanceBuffer};
pub use renderer::camera::{CameraConfig, CameraUniform, OrbitCamera};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::lighting::{PointLight, LightState, LIGHT_FLOATS};
pub use systems::render::build_instance_buffer;

// Extensions, decoupled optional systems
pub use extensions::{
    Easing, lerp, ease, ease_vec3,
    TransformGraph, LocalTransform,
};
