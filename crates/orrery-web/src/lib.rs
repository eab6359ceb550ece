pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
///
/// Calls made before `game_init` are ignored (accessors return zero/empty).
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: call before game_init() ignored", $game_name);
                    R::default()
                }
            })
        }

        fn start_runner(runner: $crate::GameRunner<$game_type>) {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        fn install_hooks() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        }

        #[wasm_bindgen]
        pub fn game_init() {
            install_hooks();
            start_runner($crate::GameRunner::new(<$game_type>::new()));
        }

        /// Initialize with a partial JSON `GameConfig` override applied on
        /// top of the game's own config. Malformed JSON is logged and the
        /// game's config is used unchanged.
        #[wasm_bindgen]
        pub fn game_init_with_config(json: &str) {
            install_hooks();
            let game = <$game_type>::new();
            let config = match game.config().merge_json(json) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("{}: invalid config ({}), using defaults", $game_name, err);
                    game.config()
                }
            };
            start_runner($crate::GameRunner::with_config(game, config));
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Pointer input (raw id 0 = background) ----

        #[wasm_bindgen]
        pub fn game_pointer_over(target: u32) {
            let target = EntityId::from_raw(target);
            with_runner(|r| r.push_input(InputEvent::PointerOver { target }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_out(target: u32) {
            let target = EntityId::from_raw(target);
            with_runner(|r| r.push_input(InputEvent::PointerOut { target }));
        }

        #[wasm_bindgen]
        pub fn game_click(target: u32) {
            let target = EntityId::from_raw(target);
            with_runner(|r| r.push_input(InputEvent::Click { target }));
        }

        // ---- Camera controls ----

        #[wasm_bindgen]
        pub fn game_drag(dx: f32, dy: f32, pan: bool) {
            with_runner(|r| r.push_input(InputEvent::Drag { dx, dy, pan }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        // ---- UI commands ----

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn get_ui_state() -> String {
            with_runner(|r| r.ui_state().to_owned())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.instances_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.camera_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.game_events_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.lights_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_light_floats() -> u32 {
            with_runner(|r| r.light_floats())
        }

        #[wasm_bindgen]
        pub fn get_instance_floats() -> u32 {
            with_runner(|r| r.instance_floats())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient()[0])
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient()[1])
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient()[2])
        }
    };
}
