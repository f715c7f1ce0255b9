//! Board model: cell references, static geometry and token positions.
//!
//! - `cell`: `CellRef`, `Coord`, `TokenId` and track constants
//! - `topology`: pure geometry (squares, safety, tracks, entry/final cells)
//! - `state`: `BoardState` plus the derived square occupancy and blocks

pub mod cell;
pub mod state;
pub mod topology;

pub use cell::{CellRef, Coord, TokenId, FINAL_INDEX, GRID_SIZE, LAST_RING_INDEX, TOKENS_PER_COLOR, TRACK_LEN};
pub use state::{BoardState, Occupancy, Occupants};
pub use topology::{coordinate_of, entry_cell, final_cell, is_safe, track_of, RING_LEN};
