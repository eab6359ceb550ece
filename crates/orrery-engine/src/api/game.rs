use serde::{Deserialize, Serialize};
use crate::core::scene::Scene;
use crate::core::time::FrameTime;
use crate::api::types::{EntityId, GameEvent};
use crate::extensions::transform::TransformGraph;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::{CameraConfig, OrbitCamera};
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
///
/// Every field has a default, so the host may override any subset with a
/// partial JSON object (see [`GameConfig::from_json`] and
/// [`GameConfig::merge_json`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Camera projection, start pose, distance limits and framing.
    pub camera: CameraConfig,
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            max_instances: 64,
            max_events: 32,
            max_lights: 4,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply a (possibly partial) JSON override on top of `self`.
    /// Missing fields, including nested camera fields, keep `self`'s values.
    pub fn merge_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut merged = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        merge_value(&mut merged, overrides);
        serde_json::from_value(merged)
    }
}

fn merge_value(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_value(base.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (base, value) => *base = value,
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. Pending input is visible in `input` in receipt
    /// order; camera gestures should be passed to `ctx.handle_camera_input`
    /// in that same pass. The frame delta is `ctx.time.delta()`.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub transforms: TransformGraph,
    pub camera: OrbitCamera,
    pub lights: LightState,
    pub time: FrameTime,
    pub events: Vec<GameEvent>,
    /// Latest UI snapshot as JSON, replaced by `publish_ui`.
    pub ui_state: String,
    next_id: u32,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_instances),
            transforms: TransformGraph::new(),
            camera: OrbitCamera::from_config(&config.camera),
            lights: LightState::new(),
            time: FrameTime::new(),
            events: Vec::with_capacity(config.max_events),
            ui_state: String::from("{}"),
            next_id: 1,
            max_events: config.max_events,
        }
    }

    /// Generate the next unique entity ID. IDs start at 1; 0 is reserved.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("game event dropped: per-frame capacity {} reached", self.max_events);
            return;
        }
        self.events.push(event);
    }

    /// Serialize a UI snapshot for the host. On failure the previous
    /// snapshot is kept.
    pub fn publish_ui<T: Serialize>(&mut self, view: &T) {
        match serde_json::to_string(view) {
            Ok(json) => self.ui_state = json,
            Err(err) => log::warn!("ui state not published: {err}"),
        }
    }

    /// Clear per-frame transient data and advance the clock.
    pub fn begin_frame(&mut self, dt: f32) {
        self.events.clear();
        self.time.advance(dt);
    }

    /// Route a camera-control event to the camera. Returns false for
    /// events the camera does not consume.
    pub fn handle_camera_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Drag { dx, dy, pan: false } => self.camera.orbit(dx, dy),
            InputEvent::Drag { dx, dy, pan: true } => self.camera.pan(dx, dy),
            InputEvent::Wheel { delta } => self.camera.zoom(delta),
            InputEvent::Resize { width, height } => self.camera.set_viewport(width, height),
            _ => return false,
        }
        true
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn ids_start_at_one() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"camera":{"fov_y_degrees":60.0}}"#).unwrap();
        assert_eq!(config.camera.fov_y_degrees, 60.0);
        assert_eq!(config.camera.max_distance, 200.0);
        assert_eq!(config.max_instances, 64);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{not json").is_err());
        assert!(GameConfig::default().merge_json("{not json").is_err());
        assert!(GameConfig::default().merge_json("[1, 2]").is_err());
    }

    #[test]
    fn merge_keeps_base_values() {
        let base = GameConfig { max_instances: 32, ..GameConfig::default() };
        let config = base.merge_json(r#"{"camera":{"fov_y_degrees":60.0}}"#).unwrap();
        assert_eq!(config.max_instances, 32);
        assert_eq!(config.camera.fov_y_degrees, 60.0);
        assert_eq!(config.camera.max_distance, base.camera.max_distance);
        assert_eq!(config.camera.position, base.camera.position);

        let config = base.merge_json(r#"{"max_events":8}"#).unwrap();
        assert_eq!(config, GameConfig { max_events: 8, ..base.clone() });
        assert_eq!(base.merge_json("{}").unwrap(), base);
    }

    #[test]
    fn begin_frame_clears_events_and_advances_time() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, a: 0.0, b: 0.0, c: 0.0 });
        ctx.begin_frame(0.016);
        assert!(ctx.events.is_empty());
        assert!((ctx.time.delta() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn emit_event_respects_capacity() {
        let config = GameConfig { max_events: 2, ..GameConfig::default() };
        let mut ctx = EngineContext::with_config(&config);
        for _ in 0..5 {
            ctx.emit_event(GameEvent { kind: 1.0, a: 0.0, b: 0.0, c: 0.0 });
        }
        assert_eq!(ctx.events.len(), 2);
    }

    #[test]
    fn publish_ui_stores_json() {
        #[derive(Serialize)]
        struct View {
            title: &'static str,
        }
        let mut ctx = EngineContext::new();
        ctx.publish_ui(&View { title: "Solar System" });
        assert_eq!(ctx.ui_state, r#"{"title":"Solar System"}"#);
    }

    #[test]
    fn camera_input_cancels_framing() {
        let mut ctx = EngineContext::new();
        ctx.camera.fit_sphere(Vec3::new(20.0, 0.0, 0.0), 1.0, true);
        assert!(ctx.camera.is_transitioning());
        assert!(ctx.handle_camera_input(&InputEvent::Wheel { delta: 1.0 }));
        assert!(!ctx.camera.is_transitioning());
        assert!(!ctx.handle_camera_input(&InputEvent::Click { target: None }));
    }
}
