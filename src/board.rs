use crate::{GameError, Position};
use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Safe,
    Mine,
}

/// One letter of the secret word hidden under a safe cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSlot {
    pub letter: char,
    pub plaintext_letter: char,
    pub word_position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    pub index: usize,
    pub kind: CellKind,
    /// Mines among the surrounding cells; always 0 on mines.
    pub adjacent_mines: u8,
    pub cipher_slot: Option<CipherSlot>,
}

impl BoardCell {
    pub fn is_mine(&self) -> bool {
        self.kind == CellKind::Mine
    }
}

/// Immutable grid of cells. Adjacency counts are fixed at construction and
/// placement produces a new board rather than editing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<BoardCell>,
    safe_indices: Vec<usize>,
}

impl Board {
    /// One mine in six cells on average.
    pub const DEFAULT_MINE_PROBABILITY: f64 = 1.0 / 6.0;

    /// Classifies every cell independently as a mine with `mine_probability`.
    /// Dimensions whose cell count overflows `usize` give an empty board.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mine_probability: f64,
        rng: &mut R,
    ) -> Self {
        let probability = if mine_probability.is_nan() {
            warn!(
                "Mine probability is NaN, using default {}",
                Self::DEFAULT_MINE_PROBABILITY
            );
            Self::DEFAULT_MINE_PROBABILITY
        } else if !(0.0..=1.0).contains(&mine_probability) {
            let clamped = mine_probability.clamp(0.0, 1.0);
            warn!("Mine probability {mine_probability} out of range, clamped to {clamped}");
            clamped
        } else {
            mine_probability
        };

        let Some(len) = rows.checked_mul(cols) else {
            warn!("Board of {rows}x{cols} cells is too large, generating an empty board");
            return Self::build(0, 0, &[]);
        };
        let mines: Vec<bool> = (0..len)
            .map(|_| rng.gen_bool(probability))
            .collect();
        let board = Self::build(rows, cols, &mines);
        debug!(
            "Generated {}x{} board with {} mines and {} safe cells",
            rows,
            cols,
            board.mine_count(),
            board.safe_cell_count()
        );
        board
    }

    /// Builds a board from an explicit row-major mine mask.
    pub fn from_mines(rows: usize, cols: usize, mines: &[bool]) -> Result<Self, GameError> {
        if rows.checked_mul(cols) != Some(mines.len()) {
            return Err(GameError::InvalidBoardShape {
                rows,
                cols,
                actual: mines.len(),
            });
        }
        Ok(Self::build(rows, cols, mines))
    }

    fn build(rows: usize, cols: usize, mines: &[bool]) -> Self {
        let cells: Vec<BoardCell> = mines
            .iter()
            .enumerate()
            .map(|(index, &is_mine)| {
                let adjacent_mines = if is_mine {
                    0
                } else {
                    Position::from_index(index, cols)
                        .neighbors(rows, cols)
                        .filter(|p| mines[p.to_index(cols)])
                        .count() as u8
                };
                BoardCell {
                    index,
                    kind: if is_mine { CellKind::Mine } else { CellKind::Safe },
                    adjacent_mines,
                    cipher_slot: None,
                }
            })
            .collect();

        let safe_indices = cells
            .iter()
            .filter(|cell| !cell.is_mine())
            .map(|cell| cell.index)
            .collect();

        Self {
            rows,
            cols,
            cells,
            safe_indices,
        }
    }

    /// Copy of this board with the given cipher slots attached.
    pub(crate) fn with_slots(&self, slots: impl IntoIterator<Item = (usize, CipherSlot)>) -> Self {
        let mut board = self.clone();
        for (index, slot) in slots {
            board.cells[index].cipher_slot = Some(slot);
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<&BoardCell, GameError> {
        self.cells.get(index).ok_or(GameError::OutOfBounds {
            index,
            cells: self.cells.len(),
        })
    }

    /// Row-major indices of safe cells, in ascending order.
    pub fn safe_indices(&self) -> &[usize] {
        &self.safe_indices
    }

    pub fn safe_cell_count(&self) -> usize {
        self.safe_indices.len()
    }

    pub fn mine_count(&self) -> usize {
        self.cells.len() - self.safe_indices.len()
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .map(|cell| cell.index)
    }

    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> {
        let (rows, cols) = (self.rows, self.cols);
        Position::from_index(index, cols)
            .neighbors(rows, cols)
            .map(move |p| p.to_index(cols))
    }

    /// Renders mines as `*` and safe cells as their count, one line per row.
    pub fn layout(&self) -> String {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.kind {
                        CellKind::Mine => '*',
                        CellKind::Safe => char::from(b'0' + cell.adjacent_mines),
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}
