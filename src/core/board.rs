//! Playfield - the grid of settled cells.
//!
//! Owns collision testing, piece locking, and full-row compaction.
//! Row-major dense storage; (col, row) addressing with row 0 at the top.
//! Rows above the top (row < 0) form the spawn buffer: they are exempt from
//! occupancy checks and are never stored, but columns are still bounded.

use crate::core::pieces::Piece;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an empty playfield of the given dimensions.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Calculate flat index from (col, row), None if out of bounds.
    fn index(&self, col: i16, row: i16) -> Option<usize> {
        if col < 0 || col >= self.cols as i16 || row < 0 || row >= self.rows as i16 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get cell at (col, row); None if out of bounds.
    pub fn get(&self, col: i16, row: i16) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row); false if out of bounds.
    pub fn set(&mut self, col: i16, row: i16, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled.
    pub fn is_occupied(&self, col: i16, row: i16) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Test whether the piece, displaced by the given offsets and optionally
    /// shown at a different rotation index, sits entirely on free cells.
    ///
    /// Cells in the spawn buffer (row < 0) skip the occupancy and bottom
    /// checks but still fail on column bounds.
    pub fn is_valid_placement(
        &self,
        piece: &Piece,
        col_offset: i16,
        row_offset: i16,
        rotation_override: Option<usize>,
    ) -> bool {
        let mask = match rotation_override {
            Some(rotation) => piece.mask_at(rotation),
            None => piece.mask(),
        };
        for &(dc, dr) in &mask.cells {
            let col = piece.col + dc as i16 + col_offset;
            let row = piece.row + dr as i16 + row_offset;
            if col < 0 || col >= self.cols as i16 || row >= self.rows as i16 {
                return false;
            }
            if row < 0 {
                continue;
            }
            if self.is_occupied(col, row) {
                return false;
            }
        }
        true
    }

    /// Write the piece's active-mask cells into the grid.
    ///
    /// Returns true if any cell fell in the spawn buffer (row < 0) - the
    /// piece could not settle fully inside the visible field, which ends the
    /// game. Visible cells are still written.
    pub fn lock(&mut self, piece: &Piece) -> bool {
        let mut overflow = false;
        for (col, row) in piece.cells() {
            if row < 0 {
                overflow = true;
                continue;
            }
            self.set(col, row, Some(piece.kind));
        }
        overflow
    }

    fn row_full(&self, row: usize) -> bool {
        let start = row * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, compacting the survivors downward in order and
    /// leaving that many empty rows at the top. Returns the count removed.
    ///
    /// Single bottom-up pass: each row's fullness is read from its pre-clear
    /// content before anything is copied over it, so the set of cleared rows
    /// is fixed up front.
    pub fn clear_full_rows(&mut self) -> u32 {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cleared = 0u32;
        let mut write_row = rows;

        for read_row in (0..rows).rev() {
            if self.row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * cols;
                    let dst = write_row * cols;
                    self.cells.copy_within(src..src + cols, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_row * cols] {
            *cell = None;
        }

        cleared
    }

    /// The raw cell array, row-major, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
