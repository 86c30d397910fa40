use serde::{Deserialize, Serialize};

/// CellState is the fundamental unit of a Wireworld grid.
/// Each cell holds exactly one of four states; `Empty` is the default.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Head,
    Tail,
    Conductor,
}

impl CellState {
    /// All states in ordinal order
    pub const ALL: [CellState; 4] = [
        CellState::Empty,
        CellState::Head,
        CellState::Tail,
        CellState::Conductor,
    ];

    /// Check if the cell is an electron head
    pub const fn is_head(self) -> bool {
        matches!(self, CellState::Head)
    }

    /// Ordinal used by the world file format: Empty=0, Head=1, Tail=2, Conductor=3
    pub const fn ordinal(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Head => 1,
            CellState::Tail => 2,
            CellState::Conductor => 3,
        }
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Head),
            2 => Some(CellState::Tail),
            3 => Some(CellState::Conductor),
            _ => None,
        }
    }

    pub const fn to_digit(self) -> char {
        (b'0' + self.ordinal()) as char
    }

    /// Parse a world file digit; anything outside '0'..='3' is rejected
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '0'..='3' => Self::from_ordinal(c as u8 - b'0'),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CellState::Empty => "Empty",
            CellState::Head => "Head",
            CellState::Tail => "Tail",
            CellState::Conductor => "Conductor",
        }
    }

    /// Pure function to compute the next state from the number of Head neighbours:
    /// 1. Empty stays Empty
    /// 2. Head becomes Tail
    /// 3. Tail becomes Conductor
    /// 4. Conductor becomes Head with exactly one or two Head neighbours
    pub const fn evolve(self, head_neighbors: u8) -> Self {
        match (self, head_neighbors) {
            (CellState::Empty, _) => CellState::Empty,
            (CellState::Head, _) => CellState::Tail,
            (CellState::Tail, _) => CellState::Conductor,
            (CellState::Conductor, 1 | 2) => CellState::Head,
            (CellState::Conductor, _) => CellState::Conductor,
        }
    }
}
