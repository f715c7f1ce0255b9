//! Token colors.

use serde::{Deserialize, Serialize};

/// One of the four seat colors.
///
/// The declaration order is the seat order (player 1 is Red) and the
/// iteration order used for winner reporting. It also fixes each color's
/// quarter of the shared ring: Red starts at the bottom arm and every
/// following color starts a quarter-turn further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in seat order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Storage index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// How many quarter-turns this color's start is rotated from Red's.
    #[must_use]
    pub const fn quarter(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(color.quarter() as usize, i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
    }
}
