//! Row-major storage for the frames of one build, and the edge-aware margin
//! rule that places them.

use crate::{shape::GridShape, spacing::Sides};

/// Margins for the cell at `(row, column)` given the halved gap.
///
/// Each interior edge gets its half of the gap, each edge on the outside of
/// the matrix gets nothing. Two neighbours therefore sit exactly one full gap
/// apart while the matrix as a whole has no spacing around it.
pub fn cell_margins(shape: GridShape, half_gap: Sides, row: usize, column: usize) -> Sides {
    let side = |value: f64, interior: bool| if interior { value } else { 0.0 };
    Sides {
        left: side(half_gap.left, column != 0),
        top: side(half_gap.top, row != 0),
        right: side(half_gap.right, column != shape.last_column()),
        bottom: side(half_gap.bottom, row != shape.last_row()),
    }
}

/// Upper bound on up-front allocation; larger matrices grow as they are built.
const PREALLOCATE_LIMIT: usize = 1024;

/// The cells of one build, stored row by row.
///
/// A matrix is never edited in place. Each load builds a new one and swaps
/// it in once the previous cells are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMatrix<H> {
    rows: Vec<Vec<H>>,
}

impl<H> Default for CellMatrix<H> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<H: Copy> CellMatrix<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix by calling `make` for every position in row-major order.
    /// Stops at the first error.
    pub fn try_build<E>(
        shape: GridShape,
        mut make: impl FnMut(usize, usize) -> Result<H, E>,
    ) -> Result<Self, E> {
        let mut rows = Vec::with_capacity(shape.rows.min(PREALLOCATE_LIMIT));
        for row in 0..shape.rows {
            let mut cells = Vec::with_capacity(shape.columns.min(PREALLOCATE_LIMIT));
            for column in 0..shape.columns {
                cells.push(make(row, column)?);
            }
            rows.push(cells);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn shape(&self) -> Option<GridShape> {
        (!self.is_empty()).then(|| GridShape::new(self.rows(), self.columns()))
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<H> {
        self.rows.get(row)?.get(column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[H]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// The row-major 2D view of the cell handles.
    pub fn as_rows(&self) -> &[Vec<H>] {
        &self.rows
    }

    /// Every cell with its `(row, column)`, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, H)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| (row, column, *cell))
        })
    }

    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Empties the matrix, handing back the old cells.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
