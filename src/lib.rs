//! # Floem cells grid
//!
//! A container that arranges a `rows × columns` matrix of uniformly styled
//! cells, for dashboards, boards and other grid-shaped displays.
//!
//! ## Example
//! ```rust
//! use floem_cells_grid::prelude::*;
//!
//! let mut tk = HeadlessToolkit::new(800.0, 600.0);
//! let root = tk.root();
//!
//! let options = GridOptions::new().margin(10).padding((4, 8));
//! let mut grid = CellsGrid::new(&mut tk, root, &options).unwrap();
//! grid.place(&mut tk, Placement::at(0, 0)).unwrap();
//!
//! grid.load_cells(
//!     &mut tk,
//!     &CellsConfig::new()
//!         .shape(3)
//!         .size(60)
//!         .spacing(10)
//!         .fill(palette::css::BLUE),
//! )
//! .unwrap();
//!
//! tk.compute_layout().unwrap();
//! let second = tk.frame_rect(grid.cell(0, 1).unwrap()).unwrap();
//! let first = tk.frame_rect(grid.cell(0, 0).unwrap()).unwrap();
//! assert_eq!(second.x0 - first.x1, 10.0);
//! ```
//!
//! ## Spacing
//!
//! Margins, paddings and cell gaps accept one value, an `(x, y)` pair or
//! `(left, top, right, bottom)`. See the [`spacing`] module for the two
//! normalization rules. Cells only get spacing on the edges they share with a
//! neighbour, so the matrix as a whole has none around it.
//!
//! ## Toolkits
//!
//! The grid talks to its GUI backend through the [`Toolkit`](toolkit::Toolkit)
//! trait and never owns a widget implementation itself. The
//! [`headless`] toolkit computes real layouts with taffy and is what the tests
//! use.
//!
//! ## Rebuilding
//!
//! [`CellsGrid::load_cells`] can be called any number of times. Each call
//! validates its arguments first, then destroys every cell of the previous
//! build, then creates the new matrix in row-major order.

pub mod config;
pub mod error;
mod grid;
pub mod headless;
pub mod matrix;
mod shape;
pub mod spacing;
pub mod style;
pub mod toolkit;
pub mod unit;

pub use config::{CellsConfig, GridOptions};
pub use error::{GridError, ToolkitError};
pub use grid::CellsGrid;
pub use matrix::CellMatrix;
pub use peniko;
pub use peniko::kurbo;
pub use shape::GridShape;
pub use spacing::{Sides, Spacing};
pub use taffy;

pub mod prelude {
    pub use crate::config::{CellsConfig, GridOptions};
    pub use crate::headless::{FrameId, HeadlessToolkit};
    pub use crate::spacing::{Sides, Spacing};
    pub use crate::style::FrameStyle;
    pub use crate::toolkit::{GridPlacement, Placement, Sticky, Toolkit};
    pub use crate::unit::UnitExt;
    pub use crate::{CellsGrid, GridError, GridShape};
    pub use peniko::Color;
    pub use peniko::color::palette;
}
