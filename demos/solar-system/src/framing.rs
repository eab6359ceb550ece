//! Camera framing on selection.
//!
//! A framing request snapshots the selected planet's world-space bounding
//! sphere at the moment of selection and hands it to the camera. The camera
//! is not re-locked on later frames; the user is free to orbit/pan/zoom.

use glam::Vec3;
use orrery_engine::{EntityId, OrbitCamera, Scene};

use crate::bodies::PlanetId;

/// Current world transform lookup, decoupled from scene-graph handles.
pub trait WorldQuery {
    /// World-space bounding sphere `(center, radius)` of a planet's render
    /// target, or `None` if it is not mounted.
    fn bounding_sphere(&self, planet: PlanetId) -> Option<(Vec3, f32)>;
}

/// Anything that can move to frame a sphere.
pub trait CameraRig {
    /// Start a move that frames the sphere. A new call supersedes any move
    /// still in flight. Returns the final eye-to-target distance.
    fn frame_sphere(&mut self, center: Vec3, radius: f32, animated: bool) -> f32;
}

impl CameraRig for OrbitCamera {
    fn frame_sphere(&mut self, center: Vec3, radius: f32, animated: bool) -> f32 {
        self.fit_sphere(center, radius, animated)
    }
}

/// Planet render targets living in a [`Scene`], indexed by planet.
pub struct SceneTargets<'a> {
    pub scene: &'a Scene,
    pub targets: &'a [Option<EntityId>],
}

impl WorldQuery for SceneTargets<'_> {
    fn bounding_sphere(&self, planet: PlanetId) -> Option<(Vec3, f32)> {
        let id = (*self.targets.get(planet.index())?)?;
        let entity = self.scene.get(id).filter(|e| e.active)?;
        Some((entity.pos, entity.bounding_radius()?))
    }
}

/// A framing move that was issued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingRequest {
    pub planet: PlanetId,
    pub center: Vec3,
    pub radius: f32,
    pub distance: f32,
}

#[derive(Debug, Clone)]
pub struct FramingController {
    animated: bool,
    last: Option<FramingRequest>,
}

impl Default for FramingController {
    fn default() -> Self {
        Self::new()
    }
}

impl FramingController {
    pub fn new() -> Self {
        Self { animated: true, last: None }
    }

    /// Cut straight to the framed view instead of easing.
    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Frame `planet` at its current position. Dropped silently (no retry)
    /// when the planet has no render target yet.
    pub fn frame(
        &mut self,
        planet: PlanetId,
        world: &impl WorldQuery,
        rig: &mut impl CameraRig,
    ) -> Option<FramingRequest> {
        let Some((center, radius)) = world.bounding_sphere(planet) else {
            log::debug!("framing {} dropped: no render target", planet.name());
            return None;
        };
        let distance = rig.frame_sphere(center, radius, self.animated);
        log::debug!("framing {} at {center:?}, distance {distance:.2}", planet.name());
        let request = FramingRequest { planet, center, radius, distance };
        self.last = Some(request);
        Some(request)
    }

    /// Most recent request issued.
    pub fn last(&self) -> Option<&FramingRequest> {
        self.last.as_ref()
    }
}
