//! Win-line scanning primitives.
//!
//! Every detector and heuristic query walks the same three families of
//! lines:
//!
//! - **Rows**: the `w` cells of one row.
//! - **Columns**: the `h` cells of one column.
//! - **Toroidal diagonals**: starting in row 0 at some column, stepping one
//!   row down per cell while the column moves +1 (forward) or -1 (backward)
//!   modulo the width, so diagonals wrap around the left/right edges as if
//!   the columns were arranged on a cylinder. Sweeping every starting
//!   column in both directions enumerates all win-checkable diagonals, on
//!   square and non-square boards alike.
//!
//! A [`Line`] holds cell *indices* into the board's flat buffer, never the
//! cells themselves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Indices never spill to the heap: dimensions are capped at 12 by the
/// input layer, so a line has at most 12 cells.
type IndexBuf = SmallVec<[usize; 12]>;

/// Which family a line belongs to, with its coordinate within the family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `row` (0-based, top to bottom).
    Row(usize),
    /// Column `col` (0-based, left to right).
    Column(usize),
    /// Diagonal starting at row 0, column `start_col`; `forward` means the
    /// column increases per row, otherwise it decreases.
    Diagonal { start_col: usize, forward: bool },
}

/// One win-checkable line: its kind plus the flat cell indices it covers,
/// in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: IndexBuf,
}

impl Line {
    /// The `w` indices of one row: `row*w .. row*w + w`.
    ///
    /// ## Panics
    ///
    /// If `row >= height`.
    #[must_use]
    pub fn row(width: usize, height: usize, row: usize) -> Self {
        assert!(row < height, "row {row} out of range");
        Self {
            kind: LineKind::Row(row),
            cells: (0..width).map(|col| row * width + col).collect(),
        }
    }

    /// The `h` indices of one column: `col, col+w, .., col+(h-1)*w`.
    ///
    /// ## Panics
    ///
    /// If `col >= width`.
    #[must_use]
    pub fn column(width: usize, height: usize, col: usize) -> Self {
        assert!(col < width, "column {col} out of range");
        Self {
            kind: LineKind::Column(col),
            cells: (0..height).map(|row| row * width + col).collect(),
        }
    }

    /// The `h` indices of one toroidal diagonal.
    ///
    /// One index per row; the column starts at `start_col` and moves +1
    /// (forward) or -1 (backward) per row, modulo the width.
    ///
    /// ## Panics
    ///
    /// If `start_col >= width`.
    #[must_use]
    pub fn diagonal(width: usize, height: usize, start_col: usize, forward: bool) -> Self {
        assert!(start_col < width, "start column {start_col} out of range");
        let cells = (0..height)
            .map(|row| {
                let col = if forward {
                    (start_col + row) % width
                } else {
                    // +width before subtracting keeps the sum non-negative
                    (start_col + width - row % width) % width
                };
                row * width + col
            })
            .collect();
        Self {
            kind: LineKind::Diagonal { start_col, forward },
            cells,
        }
    }

    /// Enumerate every win-checkable line in canonical scan order:
    /// columns ascending, then rows ascending, then diagonals by ascending
    /// start column with forward before backward.
    ///
    /// The heuristic's tie-break is defined as "first qualifying line in
    /// this order", so detector and heuristic share the enumeration.
    pub fn all(width: usize, height: usize) -> impl Iterator<Item = Line> {
        let columns = (0..width).map(move |col| Line::column(width, height, col));
        let rows = (0..height).map(move |row| Line::row(width, height, row));
        let diagonals = (0..width).flat_map(move |start_col| {
            [true, false]
                .into_iter()
                .map(move |forward| Line::diagonal(width, height, start_col, forward))
        });
        columns.chain(rows).chain(diagonals)
    }

    /// The line's kind.
    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Number of cells in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true: every line covers a full row or column span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The flat cell indices covered by this line, in scan order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.cells
    }
}
