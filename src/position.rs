#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of a row-major cell index on a board `cols` wide.
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }

    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Up to 8 surrounding positions, clipped to a `rows` x `cols` board.
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
        (-1isize..=1).flat_map(move |dr| {
            (-1isize..=1).filter_map(move |dc| {
                if dr == 0 && dc == 0 {
                    return None;
                }
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                (row < rows && col < cols).then(|| Position::new(row, col))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
    }

    #[test]
    fn test_index_conversion() {
        let pos = Position::from_index(17, 5);
        assert_eq!(pos, Position::new(3, 2));
        assert_eq!(pos.to_index(5), 17);
    }

    #[test]
    fn test_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors(3, 3).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Position::new(0, 0))); // Top-left
        assert!(neighbors.contains(&Position::new(0, 1))); // Top
        assert!(neighbors.contains(&Position::new(0, 2))); // Top-right
        assert!(neighbors.contains(&Position::new(1, 0))); // Left
        assert!(neighbors.contains(&Position::new(1, 2))); // Right
        assert!(neighbors.contains(&Position::new(2, 0))); // Bottom-left
        assert!(neighbors.contains(&Position::new(2, 1))); // Bottom
        assert!(neighbors.contains(&Position::new(2, 2))); // Bottom-right
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        assert_eq!(Position::new(0, 0).neighbors(3, 3).count(), 3);
        assert_eq!(Position::new(0, 1).neighbors(3, 3).count(), 5);
        assert_eq!(Position::new(2, 2).neighbors(3, 3).count(), 3);
        assert_eq!(Position::new(0, 0).neighbors(1, 1).count(), 0);
        // No wraparound from the last column to the next row
        assert!(!Position::new(0, 2)
            .neighbors(3, 3)
            .any(|p| p == Position::new(1, 0)));
    }
}
