use orrery_engine::{
    Game, GameConfig, EngineContext,
    InputEvent, InputQueue, InstanceBuffer,
    CameraUniform, GameEvent, MeshInstance, LIGHT_FLOATS,
};
use orrery_engine::systems::render::build_instance_buffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    camera_uniform: CameraUniform,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_config(game, config)
    }

    /// Build a runner with an explicit config, bypassing `Game::config`.
    pub fn with_config(game: G, config: GameConfig) -> Self {
        let ctx = EngineContext::with_config(&config);
        let camera_uniform = ctx.camera.uniform();
        Self {
            game,
            ctx,
            input: InputQueue::new(),
            instances: InstanceBuffer::with_capacity(config.max_instances),
            camera_uniform,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("init called twice; ignoring");
            return;
        }
        self.game.init(&mut self.ctx);
        self.ctx.transforms.propagate(&mut self.ctx.scene);
        self.rebuild_buffers();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, advance camera, rebuild buffers.
    ///
    /// The game walks the queue once in receipt order and forwards camera
    /// gestures via `EngineContext::handle_camera_input` as it meets them.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.begin_frame(dt);
        self.game.update(&mut self.ctx, &self.input);

        self.input.drain();

        self.ctx.transforms.propagate(&mut self.ctx.scene);
        self.ctx.camera.update(self.ctx.time.delta());
        self.rebuild_buffers();
    }

    fn rebuild_buffers(&mut self) {
        build_instance_buffer(self.ctx.scene.iter(), &mut self.instances);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn instance_floats(&self) -> u32 {
        MeshInstance::FLOATS as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn game_events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.config.max_lights) as u32
    }

    pub fn light_floats(&self) -> u32 {
        LIGHT_FLOATS as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    /// Latest UI snapshot published by the game, as JSON.
    pub fn ui_state(&self) -> &str {
        &self.ctx.ui_state
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
