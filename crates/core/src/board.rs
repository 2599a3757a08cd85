//! Board module - manages the playing field
//!
//! The board is a 10x20 grid where each cell is `Empty`, `Falling` or `Fixed`.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::geometry::is_out_of_stage;
use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One flag per row, true for rows that are entirely `Fixed`
pub type LineMarks = [bool; HEIGHT];

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellState; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if is_out_of_stage(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<CellState> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: CellState) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and `Fixed`
    pub fn is_fixed(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(CellState::Fixed))
    }

    /// Check if a row is entirely `Fixed`
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|cell| cell.is_fixed())
    }

    /// Fill a whole row with one state
    pub fn fill_row(&mut self, y: usize, cell: CellState) {
        if y >= HEIGHT {
            return;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(cell);
    }

    /// Reset every `Falling` cell to `Empty`
    pub fn clear_falling(&mut self) {
        for cell in &mut self.cells {
            if *cell == CellState::Falling {
                *cell = CellState::Empty;
            }
        }
    }

    /// Mark every row that is entirely `Fixed`
    pub fn line_marks(&self) -> LineMarks {
        let mut marks = [false; HEIGHT];
        for (y, mark) in marks.iter_mut().enumerate() {
            *mark = self.is_row_full(y);
        }
        marks
    }

    /// Empty the marked rows and compact the rest downward.
    ///
    /// Unmarked rows keep their relative order and settle at the bottom; the rows
    /// vacated at the top are `Empty`. Returns the marked row indices, top to bottom.
    pub fn remove_lines(&mut self, marks: &LineMarks) -> ArrayVec<usize, HEIGHT> {
        let mut removed = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if marks[read_y] {
                removed.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        for y in 0..write_y {
            self.fill_row(y, CellState::Empty);
        }

        removed.reverse();
        removed
    }

    /// Mark full rows, then remove and compact them
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let marks = self.line_marks();
        self.remove_lines(&marks)
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Copy into a row-major 2D array
    pub fn to_rows(&self) -> [[CellState; WIDTH]; HEIGHT] {
        let mut out = [[CellState::Empty; WIDTH]; HEIGHT];
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        out
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_falling_keeps_fixed() {
        let mut board = Board::new();
        board.set(1, 1, CellState::Falling);
        board.set(2, 1, CellState::Fixed);

        board.clear_falling();

        assert_eq!(board.get(1, 1), Some(CellState::Empty));
        assert_eq!(board.get(2, 1), Some(CellState::Fixed));
    }

    #[test]
    fn test_falling_row_is_not_full() {
        let mut board = Board::new();
        board.fill_row(19, CellState::Fixed);
        board.set(4, 19, CellState::Falling);

        assert!(!board.is_row_full(19));
        assert_eq!(board.line_marks(), [false; HEIGHT]);
    }

    #[test]
    fn test_remove_non_adjacent_lines() {
        let mut board = Board::new();
        board.fill_row(19, CellState::Fixed);
        board.fill_row(17, CellState::Fixed);
        board.set(0, 18, CellState::Fixed);
        board.set(5, 16, CellState::Fixed);

        let removed = board.clear_full_rows();

        assert_eq!(removed.as_slice(), &[17, 19]);
        assert_eq!(board.get(0, 19), Some(CellState::Fixed));
        assert_eq!(board.get(5, 18), Some(CellState::Fixed));
        assert_eq!(board.count(CellState::Fixed), 2);
    }

    #[test]
    fn test_remove_every_line() {
        let mut board = Board::new();
        for y in 0..HEIGHT {
            board.fill_row(y, CellState::Fixed);
        }

        let removed = board.clear_full_rows();

        assert_eq!(removed.len(), HEIGHT);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(0, 0, CellState::Fixed);
        board.set(1, 0, CellState::Falling);
        let text = board.to_string();
        assert!(text.starts_with("#o........\n"));
        assert_eq!(text.lines().count(), HEIGHT);
    }
}
