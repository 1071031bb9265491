//! Board coordinates and the fixed winning lines.

use serde::{Deserialize, Serialize};

/// A validated cell on the 3×3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    x: u8,
    y: u8,
}

impl Location {
    /// Creates a location from raw coordinates, rejecting anything
    /// outside [0, 2] × [0, 2].
    pub fn new(x: i32, y: i32) -> Option<Self> {
        if (0..=2).contains(&x) && (0..=2).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column (0-2).
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Row (0-2).
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Row-major board index (0-8).
    pub fn index(&self) -> usize {
        self.y as usize * 3 + self.x as usize
    }

    const fn at(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
    pub const LINES: [[Location; 3]; 8] = [
        // Rows
        [Self::at(0, 0), Self::at(1, 0), Self::at(2, 0)],
        [Self::at(0, 1), Self::at(1, 1), Self::at(2, 1)],
        [Self::at(0, 2), Self::at(1, 2), Self::at(2, 2)],
        // Columns
        [Self::at(0, 0), Self::at(0, 1), Self::at(0, 2)],
        [Self::at(1, 0), Self::at(1, 1), Self::at(1, 2)],
        [Self::at(2, 0), Self::at(2, 1), Self::at(2, 2)],
        // Diagonals
        [Self::at(0, 0), Self::at(1, 1), Self::at(2, 2)],
        [Self::at(2, 0), Self::at(1, 1), Self::at(0, 2)],
    ];
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
