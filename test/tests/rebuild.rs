//! Tests for rebuilding the cell matrix on the headless toolkit.

use floem_cells_grid_test::prelude::*;

/// Root, outer frame and inner frame.
const CONTAINER_FRAMES: usize = 3;

#[test]
fn square_shape_from_a_single_integer() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape(3));

    assert_eq!(harness.grid.shape(), Some(GridShape::square(3)));
    assert_eq!(harness.grid.cells_grid().len(), 3);
    assert!(harness.grid.cells_grid().iter().all(|row| row.len() == 3));
    assert_eq!(harness.tk.frame_count(), CONTAINER_FRAMES + 9);
}

#[test]
fn reload_leaves_only_the_new_cells() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape(3));
    let old: Vec<_> = harness.grid.cells().handles().collect();

    harness.load(CellsConfig::new().shape((1, 2)));

    assert!(old.iter().all(|cell| !harness.tk.exists(*cell)));
    let inner = harness.grid.inner_frame();
    assert_eq!(harness.tk.children(inner).len(), 2);
    assert_eq!(harness.tk.frame_count(), CONTAINER_FRAMES + 2);
    for (_, _, cell) in harness.grid.cells().iter() {
        assert_eq!(harness.tk.parent(cell), Some(inner));
    }
}

#[test]
fn shrinking_the_matrix_shrinks_the_inner_frame() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape(4).size(10).spacing(2));
    assert_close(harness.inner_rect().width(), 46.0, "inner width");

    harness.load(CellsConfig::new().shape(2).size(10).spacing(2));
    assert_close(harness.inner_rect().width(), 22.0, "inner width");
    assert_close(harness.inner_rect().height(), 22.0, "inner height");
}

#[test]
fn identical_reload_reproduces_the_layout() {
    let mut harness = GridHarness::new(GridOptions::new().margin(3).padding(6));
    let config = CellsConfig::new().shape((2, 3)).size(25).spacing((8, 2));

    harness.load(config.clone());
    let before: Vec<_> = harness
        .grid
        .cells()
        .iter()
        .map(|(row, column, cell)| (cell, harness.rect(row, column)))
        .collect();

    harness.load(config);
    let after: Vec<_> = harness
        .grid
        .cells()
        .iter()
        .map(|(row, column, cell)| (cell, harness.rect(row, column)))
        .collect();

    assert_eq!(before.len(), after.len());
    for ((old_cell, old_rect), (new_cell, new_rect)) in before.iter().zip(&after) {
        assert_ne!(old_cell, new_cell);
        assert_eq!(old_rect, new_rect);
    }
}

#[test]
fn clear_empties_the_matrix() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape((2, 2)));

    let destroyed = harness.grid.clear(&mut harness.tk).unwrap();

    assert_eq!(destroyed, 4);
    assert!(harness.grid.cells_grid().is_empty());
    assert_eq!(harness.grid.cell_spacing(), Sides::ZERO);
    assert_eq!(harness.tk.frame_count(), CONTAINER_FRAMES);
}

#[test]
fn destroy_removes_every_frame_of_the_grid() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape(5));

    let GridHarness { mut tk, grid } = harness;
    grid.destroy(&mut tk).unwrap();

    assert_eq!(tk.frame_count(), 1);
    assert!(tk.children(tk.root()).is_empty());
}

#[test]
fn two_grids_share_a_parent() {
    let mut tk = HeadlessToolkit::new(1000.0, 1000.0);
    let root = tk.root();

    let mut left = CellsGrid::new(&mut tk, root, &GridOptions::new().size(0, 0)).unwrap();
    left.place(&mut tk, Placement::at(0, 0)).unwrap();
    let mut right = CellsGrid::new(&mut tk, root, &GridOptions::new().size(0, 0).margin((10, 0)))
        .unwrap();
    right.place(&mut tk, Placement::at(0, 1)).unwrap();

    left.load_cells(&mut tk, &CellsConfig::new().shape(2).size(20).spacing(0))
        .unwrap();
    right
        .load_cells(&mut tk, &CellsConfig::new().shape(1).size(20))
        .unwrap();
    tk.compute_layout().unwrap();

    // The left grid is 40 wide, the right one starts after its own margin.
    let right_outer = tk.frame_rect(right.frame()).unwrap();
    assert_close(right_outer.x0, 50.0, "right grid x0");

    left.load_cells(&mut tk, &CellsConfig::new().shape(3).size(20).spacing(0))
        .unwrap();
    tk.compute_layout().unwrap();
    let right_outer = tk.frame_rect(right.frame()).unwrap();
    assert_close(right_outer.x0, 70.0, "right grid x0 after reload");
    assert_eq!(right.cells().len(), 1);
}
