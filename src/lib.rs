//! # reverse-ludo
//!
//! Rules engine for Ludo with a limited supply of backward moves.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Move generation, move resolution and turn transitions
//!    are functions of a state snapshot. Dice arrive as commands, so any
//!    game replays exactly from its command log.
//!
//! 2. **Board Geometry Is Data**: The 52-square ring, the private home
//!    stretches and the safe squares are derived once from one quarter of
//!    the board and a rotation.
//!
//! 3. **Events Out, Nothing Back In**: Every transition reports what
//!    happened as `GameEvent`s; presentation reads them and never feeds
//!    them back.
//!
//! ## Modules
//!
//! - `core`: Players, colors, dice, configuration, commands, events, state
//! - `board`: Cells, geometry and token positions
//! - `rules`: Move generation, move resolution, `RulesEngine` trait
//! - `game`: `ReverseLudo` turn machine and the `Session` driver
//!
//! ## Example
//!
//! ```
//! use reverse_ludo::{GameConfig, Session};
//!
//! let mut session = Session::new(GameConfig::new(2).with_seed(42)).unwrap();
//! session.roll(Some(6)).unwrap();
//! let mv = session.legal_moves()[0];
//! session.select(&mv).unwrap();
//!
//! // A six keeps the turn
//! assert_eq!(session.current_player().number(), 1);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, Command, CommandError, ConfigError, DiceSource, DieValue, ExtraTurn, FixedDice,
    GameConfig, GameEvent, GameRng, GameState, Move, MoveList, MoveRecord, Player, PlayerId,
    TurnPhase,
};

pub use crate::board::{BoardState, CellRef, Coord, TokenId};

pub use crate::rules::{GameResult, RulesEngine, Transition};

pub use crate::game::{ReverseLudo, Session};
