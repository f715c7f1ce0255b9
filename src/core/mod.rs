//! Core engine types: players, colors, dice, configuration, commands,
//! events, errors and game state.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Command, Move, MoveList, MoveRecord};
pub use color::Color;
pub use config::{GameConfig, DEFAULT_REVERSE_BUDGET, MAX_NAME_LEN};
pub use error::{CommandError, ConfigError};
pub use event::{ExtraTurn, GameEvent};
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{DiceSource, DieValue, FixedDice, GameRng};
pub use state::{GameState, TurnContext, TurnPhase};
