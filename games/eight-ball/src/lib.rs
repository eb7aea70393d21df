//! Two-player 8-ball pool on the cue engine.

use wasm_bindgen::prelude::*;

pub mod balls;
pub mod config;
pub mod error;
pub mod game;
pub mod physics;
pub mod predictor;
pub mod rules;
pub mod table;
pub mod view;

pub use config::PoolConfig;
pub use error::PlacementError;
pub use game::EightBallGame;

cue_web::export_game!(EightBallGame, "eight-ball");
