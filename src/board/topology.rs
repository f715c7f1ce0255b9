//! Static board geometry.
//!
//! The outer ring is one shared loop of 52 squares. Each color walks 51 of
//! them starting from its own entry square, then turns into a private
//! 6-square home stretch. Only Red's quarter is written out; the other
//! colors are the same squares rotated by a quarter-turn per seat, so the
//! four tracks line up under rotation by construction.
//!
//! All functions here are pure.

use super::cell::{CellRef, Coord, FINAL_INDEX, LAST_RING_INDEX, TRACK_LEN};
use crate::core::Color;

/// Squares in the shared ring.
pub const RING_LEN: u8 = 52;

/// Squares in one quarter of the ring (entry square through the corner).
const QUARTER_LEN: u8 = 13;

/// Offset of the star square from its quarter's entry square.
const STAR_OFFSET: u8 = 8;

/// Red's quarter of the ring, starting at Red's entry square.
const RED_QUARTER: [Coord; QUARTER_LEN as usize] = [
    Coord::new(13, 6),
    Coord::new(12, 6),
    Coord::new(11, 6),
    Coord::new(10, 6),
    Coord::new(9, 6),
    Coord::new(8, 5),
    Coord::new(8, 4),
    Coord::new(8, 3),
    Coord::new(8, 2),
    Coord::new(8, 1),
    Coord::new(8, 0),
    Coord::new(7, 0),
    Coord::new(6, 0),
];

/// Red's home stretch, track indices 51-56.
const RED_STRETCH: [Coord; 6] = [
    Coord::new(13, 7),
    Coord::new(12, 7),
    Coord::new(11, 7),
    Coord::new(10, 7),
    Coord::new(9, 7),
    Coord::new(8, 7),
];

/// Absolute ring position (0 = Red's entry) of a color-relative ring index.
#[must_use]
pub const fn ring_position(color: Color, index: u8) -> u8 {
    (color.quarter() * QUARTER_LEN + index) % RING_LEN
}

const fn ring_coord(position: u8) -> Coord {
    let quarter = position / QUARTER_LEN;
    RED_QUARTER[(position % QUARTER_LEN) as usize].rotate(quarter)
}

/// Grid square of a cell. `None` for Home, Finished and indices past the
/// final cell.
#[must_use]
pub const fn coordinate_of(cell: CellRef) -> Option<Coord> {
    match cell {
        CellRef::Home | CellRef::Finished => None,
        CellRef::Track { index, .. } if index > FINAL_INDEX => None,
        CellRef::Track { color, index } if index <= LAST_RING_INDEX => {
            Some(ring_coord(ring_position(color, index)))
        }
        CellRef::Track { color, index } => Some(
            RED_STRETCH[(index - LAST_RING_INDEX - 1) as usize].rotate(color.quarter()),
        ),
    }
}

/// Tokens on a safe square can never be captured.
///
/// Safe squares are the four entry squares and the four stars. Safety is a
/// property of the square, so the same square is safe for every color.
#[must_use]
pub const fn is_safe(cell: CellRef) -> bool {
    match cell {
        CellRef::Track { color, index } if index <= LAST_RING_INDEX => {
            let offset = ring_position(color, index) % QUARTER_LEN;
            offset == 0 || offset == STAR_OFFSET
        }
        _ => false,
    }
}

/// A color's full track in travel order.
#[must_use]
pub fn track_of(color: Color) -> [CellRef; TRACK_LEN] {
    std::array::from_fn(|i| CellRef::Track {
        color,
        index: i as u8,
    })
}

/// Where a token lands when it leaves Home.
#[must_use]
pub const fn entry_cell(color: Color) -> CellRef {
    CellRef::Track { color, index: 0 }
}

/// The last cell of a color's track.
#[must_use]
pub const fn final_cell(color: Color) -> CellRef {
    CellRef::Track {
        color,
        index: FINAL_INDEX,
    }
}
