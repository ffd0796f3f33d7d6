//! # Host toolkit seam
//!
//! A [`CellsGrid`](crate::CellsGrid) does not draw anything itself. It asks a
//! [`Toolkit`] for frames, tells the toolkit where to grid them, and destroys
//! them again when the matrix is rebuilt. Any GUI backend that can create a
//! styled rectangle, place it on a row/column grid with per-side margins, and
//! destroy it can host a grid.
//!
//! [`HeadlessToolkit`](crate::headless::HeadlessToolkit) is the in-process
//! implementation used for tests and for computing layouts without a window.

use std::{fmt::Debug, hash::Hash};

use bitflags::bitflags;

use crate::{error::ToolkitError, spacing::Sides, style::FrameStyle};

bitflags! {
    /// Edges of its grid slot that a frame sticks to.
    ///
    /// Sticking to two opposite edges stretches the frame across the slot.
    /// With no edges the frame is centered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sticky: u8 {
        const N = 1 << 0;
        const S = 1 << 1;
        const E = 1 << 2;
        const W = 1 << 3;
        const NS = Self::N.bits() | Self::S.bits();
        const EW = Self::E.bits() | Self::W.bits();
        const NSEW = Self::NS.bits() | Self::EW.bits();
    }
}

/// Where a frame goes in its parent's grid, including the spacing around it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPlacement {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
    pub sticky: Sticky,
    pub margin: Sides,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self::at(0, 0)
    }
}

impl GridPlacement {
    pub const fn at(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
            sticky: Sticky::empty(),
            margin: Sides::ZERO,
        }
    }

    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    pub fn sticky(mut self, sticky: Sticky) -> Self {
        self.sticky = sticky;
        self
    }
}

/// Caller-facing placement of a whole grid container.
///
/// It carries no margin. The container adds its own normalized outer margin
/// when it is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
    pub sticky: Sticky,
}

impl Default for Placement {
    fn default() -> Self {
        Self::at(0, 0)
    }
}

impl Placement {
    pub const fn at(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
            sticky: Sticky::empty(),
        }
    }

    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span.max(1);
        self
    }

    pub fn column_span(mut self, span: usize) -> Self {
        self.column_span = span.max(1);
        self
    }

    pub fn sticky(mut self, sticky: Sticky) -> Self {
        self.sticky = sticky;
        self
    }

    /// The toolkit placement for this position surrounded by `margin`.
    pub fn with_margin(self, margin: Sides) -> GridPlacement {
        GridPlacement {
            row: self.row,
            column: self.column,
            row_span: self.row_span,
            column_span: self.column_span,
            sticky: self.sticky,
            margin,
        }
    }
}

/// The frame, grid and destroy primitives a host GUI toolkit provides.
///
/// All calls happen on the toolkit's UI thread; implementations need not be
/// `Send` or `Sync`.
pub trait Toolkit {
    /// Opaque handle to a frame owned by the toolkit.
    type Frame: Copy + Eq + Hash + Debug;

    /// Create a frame inside `parent`. The new frame is not displayed until
    /// it is gridded.
    fn create_frame(
        &mut self,
        parent: Self::Frame,
        style: FrameStyle,
    ) -> Result<Self::Frame, ToolkitError>;

    /// Grid `frame` into its parent.
    fn grid(&mut self, frame: Self::Frame, placement: GridPlacement) -> Result<(), ToolkitError>;

    /// Destroy `frame` and all of its descendants.
    fn destroy(&mut self, frame: Self::Frame) -> Result<(), ToolkitError>;

    /// Whether `frame` still refers to a live frame.
    fn exists(&self, frame: Self::Frame) -> bool;
}
