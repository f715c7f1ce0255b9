//! Cell references, grid coordinates and token identifiers.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Side length of the square board grid.
pub const GRID_SIZE: u8 = 15;

/// Index of the last shared-ring cell on a color's track.
pub const LAST_RING_INDEX: u8 = 50;

/// Index of a color's final cell (end of its home stretch).
pub const FINAL_INDEX: u8 = 56;

/// Number of cells on a color's track, Home excluded.
pub const TRACK_LEN: usize = FINAL_INDEX as usize + 1;

/// Tokens per color.
pub const TOKENS_PER_COLOR: u8 = 4;

/// Where a token is.
///
/// `Track` indices are relative to the owning color: 0 is its entry cell,
/// 0-50 walk the shared ring, 51-56 its private home stretch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CellRepr", into = "CellRepr")]
pub enum CellRef {
    /// Not yet entered.
    Home,
    /// Off the board after completing the track.
    Finished,
    /// On `color`'s track at `index`.
    Track { color: Color, index: u8 },
}

impl CellRef {
    /// Track cell constructor. Panics if `index` is past the final cell.
    #[must_use]
    pub const fn track(color: Color, index: u8) -> Self {
        assert!(index <= FINAL_INDEX, "Track index must be 0-56");
        CellRef::Track { color, index }
    }

    /// Track index, if on the track.
    #[must_use]
    pub const fn track_index(self) -> Option<u8> {
        match self {
            CellRef::Track { index, .. } => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, CellRef::Track { .. })
    }

    /// Is this the final cell of some color's track?
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, CellRef::Track { index: FINAL_INDEX, .. })
    }

    /// Is this on a private home stretch (indices 51-56)?
    #[must_use]
    pub const fn is_home_stretch(self) -> bool {
        matches!(self, CellRef::Track { index, .. } if index > LAST_RING_INDEX)
    }
}

/// Wire shape of `CellRef`, checked on the way in.
#[derive(Serialize, Deserialize)]
enum CellRepr {
    Home,
    Finished,
    Track { color: Color, index: u8 },
}

impl TryFrom<CellRepr> for CellRef {
    type Error = String;

    fn try_from(repr: CellRepr) -> Result<Self, Self::Error> {
        match repr {
            CellRepr::Home => Ok(CellRef::Home),
            CellRepr::Finished => Ok(CellRef::Finished),
            CellRepr::Track { color, index } if index <= FINAL_INDEX => {
                Ok(CellRef::Track { color, index })
            }
            CellRepr::Track { index, .. } => {
                Err(format!("track index {index} is past {FINAL_INDEX}"))
            }
        }
    }
}

impl From<CellRef> for CellRepr {
    fn from(cell: CellRef) -> Self {
        match cell {
            CellRef::Home => CellRepr::Home,
            CellRef::Finished => CellRepr::Finished,
            CellRef::Track { color, index } => CellRepr::Track { color, index },
        }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellRef::Home => f.write_str("home"),
            CellRef::Finished => f.write_str("finished"),
            CellRef::Track { color, index } => write!(f, "{color}:{index}"),
        }
    }
}

/// A square on the 15x15 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Rotate a quarter-turn clockwise about the board center.
    #[must_use]
    pub const fn rotate_quarter(self) -> Self {
        Self {
            row: self.col,
            col: GRID_SIZE - 1 - self.row,
        }
    }

    /// Rotate `turns` quarter-turns clockwise.
    #[must_use]
    pub const fn rotate(self, turns: u8) -> Self {
        let mut coord = self;
        let mut i = 0;
        while i < turns % 4 {
            coord = coord.rotate_quarter();
            i += 1;
        }
        coord
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A token: its color plus a number 1-4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TokenRepr", into = "TokenRepr")]
pub struct TokenId {
    pub color: Color,
    pub number: u8,
}

impl TokenId {
    /// Panics if `number` is not 1-4.
    #[must_use]
    pub const fn new(color: Color, number: u8) -> Self {
        assert!(
            number >= 1 && number <= TOKENS_PER_COLOR,
            "Token number must be 1-4"
        );
        Self { color, number }
    }

    /// All four tokens of a color, in number order.
    pub fn all_of(color: Color) -> impl Iterator<Item = TokenId> {
        (1..=TOKENS_PER_COLOR).map(move |number| TokenId { color, number })
    }
}

#[derive(Serialize, Deserialize)]
struct TokenRepr {
    color: Color,
    number: u8,
}

impl TryFrom<TokenRepr> for TokenId {
    type Error = String;

    fn try_from(TokenRepr { color, number }: TokenRepr) -> Result<Self, Self::Error> {
        if number >= 1 && number <= TOKENS_PER_COLOR {
            Ok(TokenId { color, number })
        } else {
            Err(format!("token number {number} is not in 1..={TOKENS_PER_COLOR}"))
        }
    }
}

impl From<TokenId> for TokenRepr {
    fn from(TokenId { color, number }: TokenId) -> Self {
        TokenRepr { color, number }
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color, self.number)
    }
}
