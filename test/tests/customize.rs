//! Tests for working with individual cells after a build.

use floem_cells_grid_test::prelude::*;

#[test]
fn recolor_one_cell_through_its_handle() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape(3).fill(palette::css::GRAY));

    let center = harness.grid.cells_grid()[1][1];
    let style = harness
        .tk
        .style(center)
        .unwrap()
        .clone()
        .foreground(palette::css::ORANGE);
    harness.tk.set_style(center, style).unwrap();
    harness.relayout();

    let orange = palette::css::ORANGE.to_rgba8();
    let gray = palette::css::GRAY.to_rgba8();
    let fill = |row, column| {
        harness
            .tk
            .style(harness.cell(row, column))
            .unwrap()
            .foreground
            .unwrap()
            .to_rgba8()
    };
    assert_eq!(fill(1, 1), orange);
    assert_eq!(fill(0, 0), gray);
    assert_eq!(fill(2, 2), gray);
    assert_close(harness.horizontal_gap(1, 0), 10.0, "horizontal gap");
}

#[test]
fn content_gridded_into_a_cell() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(
        CellsConfig::new()
            .shape(2)
            .size(80)
            .border_width(2)
            .spacing(10),
    );

    let cell = harness.cell(1, 0);
    let label = harness
        .tk
        .create_frame(cell, FrameStyle::new().size(30, 12))
        .unwrap();
    harness
        .tk
        .grid(label, GridPlacement::at(0, 0).sticky(Sticky::NSEW))
        .unwrap();
    harness.relayout();

    let cell_rect = harness.rect(1, 0);
    let label_rect = harness.frame_rect(label);
    assert_close(label_rect.x0, cell_rect.x0 + 2.0, "label x0");
    assert_close(label_rect.y0, cell_rect.y0 + 2.0, "label y0");
    assert!(label_rect.x1 <= cell_rect.x1 && label_rect.y1 <= cell_rect.y1);

    // Content never pushes the cell past its requested size.
    assert_close(cell_rect.width(), 80.0, "cell width");
}

#[test]
fn cell_content_goes_away_with_the_next_build() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness.load(CellsConfig::new().shape(2));

    let cell = harness.cell(0, 0);
    let content = harness.tk.create_frame(cell, FrameStyle::new()).unwrap();

    harness.load(CellsConfig::new().shape(2));

    assert!(!harness.tk.exists(cell));
    assert!(!harness.tk.exists(content));
}

#[test]
fn placing_the_grid_with_sticky_edges() {
    let mut harness = GridHarness::new(GridOptions::new().size(10, 10).margin(5));
    harness.load(CellsConfig::new().shape(1).size(10).spacing(0));

    // A wide sibling in the same column stretches a sticky grid.
    let root = harness.tk.root();
    let wide = harness
        .tk
        .create_frame(root, FrameStyle::new().size(300, 10))
        .unwrap();
    harness.tk.grid(wide, GridPlacement::at(1, 0)).unwrap();
    harness
        .grid
        .place(&mut harness.tk, Placement::at(0, 0).sticky(Sticky::EW))
        .unwrap();
    harness.relayout();

    let outer = harness.outer_rect();
    assert_close(outer.x0, 5.0, "outer x0");
    assert_close(outer.width(), 290.0, "outer width");
}
