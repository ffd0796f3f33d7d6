use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{CellsConfig, GridOptions},
    error::GridError,
    matrix::{CellMatrix, cell_margins},
    shape::GridShape,
    spacing::Sides,
    style::FrameStyle,
    toolkit::{GridPlacement, Placement, Toolkit},
};

/// A container that lays out a matrix of uniformly styled cells.
///
/// The container is two frames: an outer frame that sits in the parent with
/// the outer margin around it, and a transparent inner frame gridded into the
/// outer one with the padding around it. Cells are gridded into the inner
/// frame.
///
/// Every [`load_cells`](Self::load_cells) throws the previous cells away and
/// builds a fresh matrix, so the cell handles of one build are never reused
/// by the next.
///
/// ```rust
/// use floem_cells_grid::prelude::*;
///
/// let mut tk = HeadlessToolkit::new(800.0, 600.0);
/// let root = tk.root();
///
/// let mut grid = CellsGrid::new(&mut tk, root, &GridOptions::new().margin(10)).unwrap();
/// grid.place(&mut tk, Placement::at(0, 0)).unwrap();
/// grid.load_cells(&mut tk, &CellsConfig::new().shape((2, 3)).size(50)).unwrap();
///
/// assert_eq!(grid.cells_grid().len(), 2);
/// assert_eq!(grid.cells_grid()[0].len(), 3);
/// ```
pub struct CellsGrid<T: Toolkit> {
    frame: T::Frame,
    inner: T::Frame,
    outer_margin: Sides,
    inner_padding: Sides,
    cell_spacing: Sides,
    cells: CellMatrix<T::Frame>,
}

impl<T: Toolkit> CellsGrid<T> {
    /// Create the container frames inside `parent`.
    ///
    /// The container is not displayed until it is [placed](Self::place).
    pub fn new(tk: &mut T, parent: T::Frame, options: &GridOptions) -> Result<Self, GridError> {
        let outer_margin = options.margin.to_box();
        let inner_padding = options.padding.to_box();

        let frame = tk.create_frame(parent, options.frame_style())?;
        let inner = tk.create_frame(frame, FrameStyle::new())?;
        tk.grid(inner, GridPlacement::at(0, 0).margin(inner_padding))?;

        debug!(?frame, ?outer_margin, ?inner_padding, "created cells grid");
        Ok(Self {
            frame,
            inner,
            outer_margin,
            inner_padding,
            cell_spacing: Sides::ZERO,
            cells: CellMatrix::new(),
        })
    }

    /// Like [`new`](Self::new), reading the options from a JSON object.
    pub fn from_value(tk: &mut T, parent: T::Frame, options: &Value) -> Result<Self, GridError> {
        let options = GridOptions::from_value(options)?;
        Self::new(tk, parent, &options)
    }

    /// Grid the container into its parent. The normalized outer margin is
    /// always applied around it.
    pub fn place(&self, tk: &mut T, placement: Placement) -> Result<(), GridError> {
        tk.grid(self.frame, placement.with_margin(self.outer_margin))?;
        Ok(())
    }

    /// Rebuild the cell matrix.
    ///
    /// The shape and spacing are validated before any existing cell is
    /// touched, so a rejected call leaves the previous matrix as it was.
    pub fn load_cells(&mut self, tk: &mut T, config: &CellsConfig) -> Result<(), GridError> {
        let shape = config.shape.validate()?;
        let half_gap = config.spacing.to_cell();
        let style = config.cell_style();

        let destroyed = self.clear(tk)?;

        let inner = self.inner;
        let mut created = Vec::new();
        let built = CellMatrix::try_build(shape, |row, column| {
            let cell = tk.create_frame(inner, style.clone())?;
            created.push(cell);
            let margin = cell_margins(shape, half_gap, row, column);
            tk.grid(cell, GridPlacement::at(row, column).margin(margin))?;
            Ok::<_, GridError>(cell)
        });

        match built {
            Ok(cells) => {
                debug!(
                    rows = shape.rows,
                    columns = shape.columns,
                    destroyed,
                    "loaded cells"
                );
                self.cells = cells;
                self.cell_spacing = half_gap;
                Ok(())
            }
            Err(err) => {
                for cell in created {
                    if tk.exists(cell) && tk.destroy(cell).is_err() {
                        warn!(?cell, "failed to clean up a partially built cell");
                    }
                }
                Err(err)
            }
        }
    }

    /// Like [`load_cells`](Self::load_cells), reading the build from a JSON
    /// object.
    pub fn load_cells_from_value(&mut self, tk: &mut T, config: &Value) -> Result<(), GridError> {
        let config = CellsConfig::from_value(config)?;
        self.load_cells(tk, &config)
    }

    /// Destroy every cell of the current build, returning how many were
    /// destroyed. Does nothing when no cells exist.
    ///
    /// A cell the toolkit fails to destroy does not stop the others from
    /// being destroyed. The first failure is returned once every cell has
    /// been tried, and the matrix is empty either way.
    pub fn clear(&mut self, tk: &mut T) -> Result<usize, GridError> {
        let old = self.cells.take();
        self.cell_spacing = Sides::ZERO;

        let mut destroyed = 0;
        let mut first_error = None;
        for cell in old.handles() {
            if !tk.exists(cell) {
                warn!(?cell, "cell was already destroyed");
                continue;
            }
            match tk.destroy(cell) {
                Ok(()) => destroyed += 1,
                Err(err) => {
                    warn!(?cell, %err, "failed to destroy cell");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(destroyed),
        }
    }

    /// Tear down the container together with its cells.
    pub fn destroy(mut self, tk: &mut T) -> Result<(), GridError> {
        self.clear(tk)?;
        tk.destroy(self.frame)?;
        debug!(frame = ?self.frame, "destroyed cells grid");
        Ok(())
    }

    /// The row-major cell handles of the current build. Empty before the
    /// first load.
    pub fn cells_grid(&self) -> &[Vec<T::Frame>] {
        self.cells.as_rows()
    }

    pub fn cells(&self) -> &CellMatrix<T::Frame> {
        &self.cells
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<T::Frame> {
        self.cells.get(row, column)
    }

    /// Shape of the current build.
    pub fn shape(&self) -> Option<GridShape> {
        self.cells.shape()
    }

    /// The outer frame.
    pub fn frame(&self) -> T::Frame {
        self.frame
    }

    /// The frame the cells are gridded into.
    pub fn inner_frame(&self) -> T::Frame {
        self.inner
    }

    pub fn outer_margin(&self) -> Sides {
        self.outer_margin
    }

    pub fn inner_padding(&self) -> Sides {
        self.inner_padding
    }

    /// Half of the gap of the current build, as each cell applies it.
    pub fn cell_spacing(&self) -> Sides {
        self.cell_spacing
    }
}

impl<T: Toolkit> std::fmt::Debug for CellsGrid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellsGrid")
            .field("frame", &self.frame)
            .field("inner", &self.inner)
            .field("outer_margin", &self.outer_margin)
            .field("inner_padding", &self.inner_padding)
            .field("shape", &self.shape())
            .finish()
    }
}
