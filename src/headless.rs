//! Headless toolkit for tests, benchmarks and offscreen layout.
//!
//! [`HeadlessToolkit`] implements [`Toolkit`] without a window. Frames are
//! kept in a slot map and mirrored into a taffy tree, so after
//! [`compute_layout`](HeadlessToolkit::compute_layout) every displayed frame
//! has a concrete rectangle.
//!
//! Layout follows grid geometry management:
//! - every frame lays its gridded children out on a grid, one track per row
//!   and column, packed towards the top left
//! - a frame's requested width and height are minimums, so it grows to fit
//!   what is gridded into it
//! - placement margins surround the frame inside its grid slot
//! - a frame that was created but never gridded is not displayed
//!
//! # Example
//!
//! ```rust
//! use floem_cells_grid::headless::HeadlessToolkit;
//! use floem_cells_grid::style::FrameStyle;
//! use floem_cells_grid::toolkit::{GridPlacement, Toolkit};
//! use floem_cells_grid::Sides;
//!
//! let mut tk = HeadlessToolkit::new(400.0, 300.0);
//! let frame = tk.create_frame(tk.root(), FrameStyle::new().size(50, 20)).unwrap();
//! tk.grid(frame, GridPlacement::at(0, 0).margin(Sides::all(5.0))).unwrap();
//! tk.compute_layout().unwrap();
//!
//! let rect = tk.frame_rect(frame).unwrap();
//! assert_eq!((rect.x0, rect.y0, rect.width()), (5.0, 5.0, 50.0));
//! ```

use peniko::kurbo::{Point, Rect, Size};
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use taffy::{
    NodeId, TaffyTree,
    geometry::Line,
    style::{AlignSelf, AvailableSpace, Display, Style as TaffyStyle},
    style_helpers::{line, span},
};
use tracing::trace;

use crate::{
    error::ToolkitError,
    style::FrameStyle,
    toolkit::{GridPlacement, Sticky, Toolkit},
};

new_key_type! {
    /// Handle to a frame of a [`HeadlessToolkit`].
    pub struct FrameId;
}

pub struct HeadlessToolkit {
    taffy: TaffyTree,
    frame_ids: SlotMap<FrameId, ()>,
    styles: SecondaryMap<FrameId, FrameStyle>,
    nodes: SecondaryMap<FrameId, NodeId>,
    parent: SecondaryMap<FrameId, FrameId>,
    children: SecondaryMap<FrameId, Vec<FrameId>>,
    placements: SecondaryMap<FrameId, GridPlacement>,
    rects: SecondaryMap<FrameId, Rect>,
    root: FrameId,
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl HeadlessToolkit {
    /// Create a toolkit whose root frame is at least `width` by `height`.
    pub fn new(width: f64, height: f64) -> Self {
        let mut taffy = TaffyTree::new();
        taffy.disable_rounding();

        let mut frame_ids = SlotMap::with_key();
        let root = frame_ids.insert(());
        let style = FrameStyle::new().size(width, height);
        let root_node = taffy
            .new_leaf(TaffyStyle::from(&style))
            .expect("a fresh taffy tree accepts a leaf");

        let mut toolkit = Self {
            taffy,
            frame_ids,
            styles: SecondaryMap::new(),
            nodes: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            children: SecondaryMap::new(),
            placements: SecondaryMap::new(),
            rects: SecondaryMap::new(),
            root,
        };
        toolkit.styles.insert(root, style);
        toolkit.nodes.insert(root, root_node);
        toolkit.children.insert(root, Vec::new());
        toolkit
    }

    /// The frame standing in for the window.
    pub fn root(&self) -> FrameId {
        self.root
    }

    /// Number of live frames, including the root.
    pub fn frame_count(&self) -> usize {
        self.frame_ids.len()
    }

    pub fn style(&self, frame: FrameId) -> Option<&FrameStyle> {
        self.styles.get(frame)
    }

    pub fn placement(&self, frame: FrameId) -> Option<GridPlacement> {
        self.placements.get(frame).copied()
    }

    pub fn parent(&self, frame: FrameId) -> Option<FrameId> {
        self.parent.get(frame).copied()
    }

    pub fn children(&self, frame: FrameId) -> &[FrameId] {
        self.children.get(frame).map_or(&[], Vec::as_slice)
    }

    /// Replace the style of a frame, keeping its placement.
    pub fn set_style(&mut self, frame: FrameId, style: FrameStyle) -> Result<(), ToolkitError> {
        let node = self.node(frame)?;
        let placement = self.placement_for_layout(frame);
        self.taffy
            .set_style(node, taffy_style(&style, placement.as_ref())?)?;
        self.styles.insert(frame, style);
        Ok(())
    }

    /// Lay out the whole tree and cache the absolute rectangle of every
    /// displayed frame.
    pub fn compute_layout(&mut self) -> Result<(), ToolkitError> {
        let root_node = self.node(self.root)?;
        self.taffy.compute_layout(
            root_node,
            taffy::prelude::Size {
                width: AvailableSpace::MaxContent,
                height: AvailableSpace::MaxContent,
            },
        )?;

        self.rects.clear();
        let mut pending = vec![(self.root, Point::ZERO)];
        while let Some((frame, parent_origin)) = pending.pop() {
            let layout = self.taffy.layout(self.node(frame)?)?;
            let origin = Point::new(
                parent_origin.x + layout.location.x as f64,
                parent_origin.y + layout.location.y as f64,
            );
            let size = Size::new(layout.size.width as f64, layout.size.height as f64);
            self.rects.insert(frame, Rect::from_origin_size(origin, size));

            for child in self.children(frame) {
                if self.placements.contains_key(*child) {
                    pending.push((*child, origin));
                }
            }
        }
        trace!(frames = self.rects.len(), "computed headless layout");
        Ok(())
    }

    /// The absolute rectangle of `frame` from the last
    /// [`compute_layout`](Self::compute_layout). `None` for frames that are
    /// not displayed or were created afterwards.
    pub fn frame_rect(&self, frame: FrameId) -> Option<Rect> {
        self.rects.get(frame).copied()
    }

    fn node(&self, frame: FrameId) -> Result<NodeId, ToolkitError> {
        self.nodes
            .get(frame)
            .copied()
            .ok_or_else(|| ToolkitError::stale(frame))
    }

    fn placement_for_layout(&self, frame: FrameId) -> Option<GridPlacement> {
        if frame == self.root {
            Some(GridPlacement::default())
        } else {
            self.placement(frame)
        }
    }

    /// `frame` and all of its descendants, children before parents.
    fn subtree_post_order(&self, frame: FrameId) -> Vec<FrameId> {
        let mut order = Vec::new();
        let mut pending = vec![(frame, false)];
        while let Some((frame, expanded)) = pending.pop() {
            if expanded {
                order.push(frame);
                continue;
            }
            pending.push((frame, true));
            for child in self.children(frame) {
                pending.push((*child, false));
            }
        }
        order
    }
}

impl Toolkit for HeadlessToolkit {
    type Frame = FrameId;

    fn create_frame(
        &mut self,
        parent: FrameId,
        style: FrameStyle,
    ) -> Result<FrameId, ToolkitError> {
        let parent_node = self.node(parent)?;
        let node = self.taffy.new_leaf(taffy_style(&style, None)?)?;
        self.taffy.add_child(parent_node, node)?;

        let frame = self.frame_ids.insert(());
        self.styles.insert(frame, style);
        self.nodes.insert(frame, node);
        self.parent.insert(frame, parent);
        self.children.insert(frame, Vec::new());
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(frame);
        }
        trace!(?frame, ?parent, "created frame");
        Ok(frame)
    }

    fn grid(&mut self, frame: FrameId, placement: GridPlacement) -> Result<(), ToolkitError> {
        if frame == self.root {
            return Err(ToolkitError::Other(
                "the root frame has no parent to grid into".to_string(),
            ));
        }
        let node = self.node(frame)?;
        let style = self
            .styles
            .get(frame)
            .ok_or_else(|| ToolkitError::stale(frame))?;
        let node_style = taffy_style(style, Some(&placement))?;
        self.taffy.set_style(node, node_style)?;
        self.placements.insert(frame, placement);
        trace!(?frame, row = placement.row, column = placement.column, "gridded frame");
        Ok(())
    }

    fn destroy(&mut self, frame: FrameId) -> Result<(), ToolkitError> {
        if frame == self.root {
            return Err(ToolkitError::Other(
                "the root frame cannot be destroyed".to_string(),
            ));
        }
        if !self.exists(frame) {
            return Err(ToolkitError::stale(frame));
        }

        if let Some(parent) = self.parent.get(frame).copied()
            && let Some(siblings) = self.children.get_mut(parent)
        {
            siblings.retain(|c| *c != frame);
        }

        for id in self.subtree_post_order(frame) {
            if let Some(node) = self.nodes.remove(id) {
                self.taffy.remove(node)?;
            }
            self.styles.remove(id);
            self.parent.remove(id);
            self.children.remove(id);
            self.placements.remove(id);
            self.rects.remove(id);
            self.frame_ids.remove(id);
        }
        trace!(?frame, "destroyed frame");
        Ok(())
    }

    fn exists(&self, frame: FrameId) -> bool {
        self.frame_ids.contains_key(frame)
    }
}

/// The taffy style of a frame. Frames without a placement are not displayed.
///
/// Fails when the placement does not fit on a taffy grid.
fn taffy_style(
    style: &FrameStyle,
    placement: Option<&GridPlacement>,
) -> Result<TaffyStyle, ToolkitError> {
    let mut taffy_style = TaffyStyle::from(style);
    let Some(placement) = placement else {
        taffy_style.display = Display::None;
        return Ok(taffy_style);
    };

    taffy_style.margin = placement.margin.into();
    taffy_style.grid_row = Line {
        start: line(grid_line(placement.row, "row")?),
        end: span(grid_span(placement.row_span, "row span")?),
    };
    taffy_style.grid_column = Line {
        start: line(grid_line(placement.column, "column")?),
        end: span(grid_span(placement.column_span, "column span")?),
    };
    taffy_style.justify_self = Some(self_alignment(
        placement.sticky.contains(Sticky::W),
        placement.sticky.contains(Sticky::E),
    ));
    taffy_style.align_self = Some(self_alignment(
        placement.sticky.contains(Sticky::N),
        placement.sticky.contains(Sticky::S),
    ));
    Ok(taffy_style)
}

/// Grid lines are 1-based.
fn grid_line(index: usize, what: &str) -> Result<i16, ToolkitError> {
    index
        .checked_add(1)
        .and_then(|line| i16::try_from(line).ok())
        .ok_or_else(|| ToolkitError::Other(format!("{what} {index} is beyond the last grid line")))
}

fn grid_span(span: usize, what: &str) -> Result<u16, ToolkitError> {
    u16::try_from(span.max(1))
        .map_err(|_| ToolkitError::Other(format!("{what} {span} is wider than a grid allows")))
}

fn self_alignment(start: bool, end: bool) -> AlignSelf {
    match (start, end) {
        (true, true) => AlignSelf::Stretch,
        (true, false) => AlignSelf::Start,
        (false, true) => AlignSelf::End,
        (false, false) => AlignSelf::Center,
    }
}
