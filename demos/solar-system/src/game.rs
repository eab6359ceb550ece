/// Solar System: a sun, eight planets on circular orbits, hover/select
/// with camera framing, and a global orbit-speed slider.
///
/// Frame order: queued pointer, camera and UI events are handled first in one
/// pass (receipt order), the overlay is republished if it changed, then
/// orbits advance.

use orrery_engine::*;
use glam::Vec3;

use crate::bodies::{self, PlanetId, PLANET_COUNT};
use crate::framing::{FramingController, SceneTargets};
use crate::interaction::{reduce, Action, InteractionState};
use crate::orbit::OrbitState;
use crate::overlay::{OverlayView, CMD_SET_SPEED, CMD_UNLOCK};

// ── Game event kinds to the host ─────────────────────────────────────

/// `a` = planet index, or -1 when cleared.
const EVENT_SELECTION: f32 = 3.0;
/// `a` = planet index, `b` = framing distance.
const EVENT_FRAMING: f32 = 4.0;

/// Parse a color constant, falling back to white.
fn hex(color: &str) -> Color {
    Color::from_hex(color).unwrap_or_else(|| {
        log::warn!("bad color {color:?}, using white");
        Color::WHITE
    })
}

/// Per-session seed for the initial orbital phases.
fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * (1u64 << 53) as f64) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15)
    }
}

pub struct SolarSystem {
    interaction: InteractionState,
    framing: FramingController,
    orbits: [OrbitState; PLANET_COUNT],

    // Entity IDs
    sun_id: Option<EntityId>,
    pivot_ids: [Option<EntityId>; PLANET_COUNT],
    planet_ids: [Option<EntityId>; PLANET_COUNT],

    /// Last overlay sent to the host.
    published: Option<OverlayView>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_seed(session_seed())
    }

    /// Pin the initial phases (tests, replays).
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        Self {
            interaction: InteractionState::default(),
            framing: FramingController::new(),
            orbits: std::array::from_fn(|_| OrbitState::random(&mut rng)),
            sun_id: None,
            pivot_ids: [None; PLANET_COUNT],
            planet_ids: [None; PLANET_COUNT],
            published: None,
        }
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn orbit(&self, planet: PlanetId) -> &OrbitState {
        &self.orbits[planet.index()]
    }

    pub fn planet_entity(&self, planet: PlanetId) -> Option<EntityId> {
        self.planet_ids[planet.index()]
    }

    pub fn sun_entity(&self) -> Option<EntityId> {
        self.sun_id
    }

    pub fn framing(&self) -> &FramingController {
        &self.framing
    }

    /// Resolve a pointer target to a planet. Anything else (sun, rings,
    /// unknown ids, empty space) is background.
    fn planet_at(&self, target: Option<EntityId>) -> Option<PlanetId> {
        let target = target?;
        let index = self.planet_ids.iter().position(|id| *id == Some(target))?;
        PlanetId::from_index(index)
    }

    fn action_for(&self, event: &InputEvent) -> Option<Action> {
        match *event {
            InputEvent::PointerOver { target } => Some(match self.planet_at(target) {
                Some(p) => Action::Enter(p),
                None => Action::Leave,
            }),
            InputEvent::PointerOut { .. } => Some(Action::Leave),
            InputEvent::Click { target } => Some(match self.planet_at(target) {
                Some(p) => Action::ClickPlanet(p),
                None => Action::ClickBackground,
            }),
            InputEvent::Custom { kind: CMD_SET_SPEED, a, .. } => Some(Action::SetSpeed(a)),
            InputEvent::Custom { kind: CMD_UNLOCK, .. } => Some(Action::Unlock),
            InputEvent::Custom { kind, .. } => {
                log::warn!("unknown ui command {kind}");
                None
            }
            _ => None,
        }
    }

    fn apply(&mut self, ctx: &mut EngineContext, action: Action) {
        let before = self.interaction;
        self.interaction = reduce(before, action);

        if before.selected != self.interaction.selected {
            log::debug!("selection {:?} -> {:?}", before.selected, self.interaction.selected);
            ctx.emit_event(GameEvent {
                kind: EVENT_SELECTION,
                a: self.interaction.selected.map_or(-1.0, |p| p.index() as f32),
                b: 0.0,
                c: 0.0,
            });
        }

        // Re-clicking the selected planet re-frames it at its current position.
        if let Action::ClickPlanet(planet) = action {
            let world = SceneTargets { scene: &ctx.scene, targets: &self.planet_ids };
            if let Some(req) = self.framing.frame(planet, &world, &mut ctx.camera) {
                ctx.emit_event(GameEvent {
                    kind: EVENT_FRAMING,
                    a: planet.index() as f32,
                    b: req.distance,
                    c: 0.0,
                });
            }
        }
    }

    fn publish_overlay(&mut self, ctx: &mut EngineContext) {
        let view = OverlayView::from_state(&self.interaction);
        if self.published.as_ref() != Some(&view) {
            ctx.publish_ui(&view);
            self.published = Some(view);
        }
    }

    fn animate(&mut self, ctx: &mut EngineContext) {
        let dt = ctx.time.delta();
        let speed = self.interaction.speed_multiplier;

        for planet in PlanetId::all() {
            let i = planet.index();
            let orbit = &mut self.orbits[i];
            orbit.advance(planet.descriptor(), speed, dt);

            if let Some(pivot) = self.pivot_ids[i] {
                ctx.transforms.set_local_rotation(pivot, orbit.pivot_rotation());
            }
            if let Some(id) = self.planet_ids[i] {
                ctx.transforms.set_local_rotation(id, orbit.spin_rotation());
                let intensity = if self.interaction.selected == Some(planet) {
                    bodies::EMISSIVE_SELECTED
                } else {
                    bodies::EMISSIVE_IDLE
                };
                if let Some(mesh) = ctx.scene.get_mut(id).and_then(|e| e.mesh.as_mut()) {
                    mesh.emissive_intensity = intensity;
                }
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 32,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Lighting ─────────────────────────────────────────────────
        ctx.lights.set_ambient([1.0, 1.0, 1.0], bodies::AMBIENT_INTENSITY);
        ctx.lights.add(
            PointLight::new(Vec3::ZERO, [1.0, 1.0, 1.0], bodies::SUN_LIGHT_INTENSITY, bodies::SUN_LIGHT_DISTANCE)
                .with_decay(bodies::SUN_LIGHT_DECAY),
        );

        // ── Spawn Sun ────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("sun")
                .with_mesh(
                    MeshComponent::sphere(bodies::SUN_RADIUS, hex(bodies::SUN_COLOR))
                        .with_emissive(hex(bodies::SUN_EMISSIVE), bodies::SUN_EMISSIVE_INTENSITY),
                ),
        );
        self.sun_id = Some(sun_id);

        // ── Spawn orbit pivots, rings and planets ────────────────────
        for planet in PlanetId::all() {
            let i = planet.index();
            let desc = planet.descriptor();
            let orbit = &self.orbits[i];

            let pivot = ctx.next_id();
            ctx.scene.spawn(Entity::new(pivot).with_tag(format!("{}-orbit", desc.name)));
            ctx.transforms.register_with(
                pivot,
                LocalTransform::new().with_rotation(orbit.pivot_rotation()),
            );

            let ring = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(ring)
                    .with_tag("orbit-ring")
                    .with_mesh(
                        MeshComponent::ring(desc.distance, bodies::RING_THICKNESS, Color::WHITE)
                            .with_opacity(bodies::RING_OPACITY),
                    ),
            );

            let color = desc.color();
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(desc.name)
                    .with_mesh(
                        MeshComponent::sphere(desc.size, color)
                            .with_emissive(color, bodies::EMISSIVE_IDLE)
                            .with_roughness(bodies::PLANET_ROUGHNESS),
                    ),
            );
            ctx.transforms.register_with(
                id,
                LocalTransform::new()
                    .with_offset(Vec3::new(desc.distance, 0.0, 0.0))
                    .with_rotation(orbit.spin_rotation()),
            );
            ctx.transforms.set_parent(id, Some(pivot));

            self.pivot_ids[i] = Some(pivot);
            self.planet_ids[i] = Some(id);
        }

        self.publish_overlay(ctx);
        log::info!("solar system: {} planets spawned", PLANET_COUNT);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            if ctx.handle_camera_input(event) {
                continue;
            }
            if let Some(action) = self.action_for(event) {
                self.apply(ctx, action);
            }
        }
        self.publish_overlay(ctx);

        // ── Advance orbits ───────────────────────────────────────────
        self.animate(ctx);
    }
}
