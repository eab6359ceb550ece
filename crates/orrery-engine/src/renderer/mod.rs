pub mod instance;
pub mod camera;

pub use camera::{CameraConfig, CameraUniform, OrbitCamera};
pub use instance::{InstanceBuffer, MeshInstance};
