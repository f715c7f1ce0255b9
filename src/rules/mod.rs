//! Rules: move generation, move resolution and the engine trait.
//!
//! - `generator`: which moves a die face allows (pure)
//! - `resolver`: the board after a move plus its trail (pure)
//! - `engine`: the `RulesEngine` trait the turn machine implements

pub mod engine;
pub mod generator;
pub mod resolver;

pub use engine::{GameResult, RulesEngine, Transition};
pub use generator::{capture_target, generate_moves, step_index, Direction};
pub use resolver::{apply_move, trail, Resolution};
