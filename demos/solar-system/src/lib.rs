use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
pub mod framing;
pub mod game;
pub mod interaction;
pub mod orbit;
pub mod overlay;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
