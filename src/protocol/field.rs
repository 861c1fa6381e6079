use super::codec::{CodecError, ResponseFrame};
use super::config::{GRID_SIDE, SNAPSHOT_CELLS};
use super::order::Direction;

/// Content of a single cell around the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldCell {
    #[default]
    Empty,
    Block,
    Item,
    Enemy,
}

impl FieldCell {
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(FieldCell::Empty),
            1 => Some(FieldCell::Block),
            2 => Some(FieldCell::Item),
            3 => Some(FieldCell::Enemy),
            _ => None,
        }
    }

    pub const fn digit(self) -> u8 {
        match self {
            FieldCell::Empty => 0,
            FieldCell::Block => 1,
            FieldCell::Item => 2,
            FieldCell::Enemy => 3,
        }
    }
}

/// Game phase reported in the first digit of every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Finished,
}

impl GameStatus {
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(GameStatus::InProgress),
            1 => Some(GameStatus::Finished),
            _ => None,
        }
    }
}

/// Decoded reply to one order: the game status plus nine cells, in the
/// order the server emitted them (row-major for square replies, a straight
/// line for search replies).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSnapshot {
    status: GameStatus,
    cells: [FieldCell; SNAPSHOT_CELLS],
}

impl TurnSnapshot {
    pub const fn new(status: GameStatus, cells: [FieldCell; SNAPSHOT_CELLS]) -> Self {
        Self { status, cells }
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub const fn cells(&self) -> &[FieldCell; SNAPSHOT_CELLS] {
        &self.cells
    }

    /// Cell at `(row, col)` of a square reply. `None` outside the 3x3 grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<FieldCell> {
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return None;
        }
        Some(self.cells[row * GRID_SIDE + col])
    }

    /// Orthogonal neighbour of the centre cell of a square reply.
    pub fn neighbor(&self, direction: Direction) -> FieldCell {
        let index = match direction {
            Direction::Up => 1,
            Direction::Left => 3,
            Direction::Right => 5,
            Direction::Down => 7,
        };
        self.cells[index]
    }

    /// Iterate over the square reply one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[FieldCell]> {
        self.cells.chunks(GRID_SIDE)
    }
}

impl TryFrom<ResponseFrame> for TurnSnapshot {
    type Error = CodecError;

    fn try_from(frame: ResponseFrame) -> Result<Self, Self::Error> {
        let status =
            GameStatus::from_digit(frame.status).ok_or(CodecError::UnknownStatus(frame.status))?;
        let mut cells = [FieldCell::Empty; SNAPSHOT_CELLS];
        for (i, (slot, digit)) in cells.iter_mut().zip(frame.cells).enumerate() {
            *slot = FieldCell::from_digit(digit).ok_or(CodecError::UnknownCell {
                position: i + 1,
                digit,
            })?;
        }
        Ok(Self { status, cells })
    }
}
