//! Tests for building grids from JSON and for rejected arguments.

use floem_cells_grid_test::prelude::*;
use serde_json::json;

#[test]
fn grid_from_json_options() {
    let mut tk = HeadlessToolkit::default();
    let root = tk.root();
    let options = json!({
        "bg_color": "#202020",
        "width": 300,
        "height": 120,
        "margin": [4, 8],
        "padding": 2,
    });

    let grid = CellsGrid::from_value(&mut tk, root, &options).unwrap();

    assert_eq!(grid.outer_margin(), Sides::new(4.0, 8.0, 4.0, 8.0));
    assert_eq!(grid.inner_padding(), Sides::all(2.0));
    let style = tk.style(grid.frame()).unwrap();
    assert_eq!((style.width, style.height), (Some(300.0), Some(120.0)));
    let background = style.background.unwrap().to_rgba8();
    assert_eq!((background.r, background.g, background.b), (0x20, 0x20, 0x20));
}

#[test]
fn cells_from_json_config() {
    let mut harness = GridHarness::new(GridOptions::new());
    harness
        .grid
        .load_cells_from_value(
            &mut harness.tk,
            &json!({
                "array": [2, 5],
                "cells_size": 20,
                "cells_spacing": [4, 6],
                "cells_fg_color": "red",
                "cells_corner_radius": 0,
            }),
        )
        .unwrap();
    harness.relayout();

    assert_eq!(harness.grid.shape(), Some(GridShape::new(2, 5)));
    assert_close(harness.horizontal_gap(0, 0), 4.0, "horizontal gap");
    assert_close(harness.vertical_gap(0, 0), 6.0, "vertical gap");
    let fill = harness
        .tk
        .style(harness.cell(1, 4))
        .unwrap()
        .foreground
        .unwrap()
        .to_rgba8();
    assert_eq!((fill.r, fill.g, fill.b), (255, 0, 0));
}

#[test]
fn invalid_margin_creates_nothing() {
    let mut tk = HeadlessToolkit::default();
    let root = tk.root();

    let err = CellsGrid::from_value(&mut tk, root, &json!({ "margin": "wide" })).unwrap_err();

    assert!(matches!(
        err,
        GridError::InvalidType { ref param, found: "str", .. } if param == "margin"
    ));
    assert_eq!(tk.frame_count(), 1);
}

#[test]
fn invalid_padding_length_lists_examples() {
    let mut tk = HeadlessToolkit::default();
    let root = tk.root();

    let err = CellsGrid::from_value(&mut tk, root, &json!({ "padding": [1, 2, 3] })).unwrap_err();

    assert!(matches!(err, GridError::InvalidSpacingLength { len: 3, .. }));
    let message = err.to_string();
    assert!(message.contains("padding"), "{message}");
    assert!(message.contains("(10, 5, 10, 5)"), "{message}");
}

#[test]
fn rejected_loads_keep_the_previous_matrix_and_layout() {
    let mut harness = GridHarness::new(GridOptions::new().padding(4));
    harness.load(CellsConfig::new().shape(2).size(30).spacing(10));
    let cells = harness.grid.cells().clone();
    let rect = harness.rect(1, 1);
    let frames = harness.tk.frame_count();

    let rejected = [
        json!({ "array": [1, 2, 3] }),
        json!({ "array": [0, 4] }),
        json!({ "array": "3" }),
        json!({ "cells_spacing": [1, "a"] }),
        json!({ "cells_spacing": [1, 2, 3, 4, 5] }),
        json!({ "cells_spacing": 2.5 }),
        json!({ "cells_fg_color": "not a color" }),
        json!({ "cells_shape": 3 }),
    ];
    for config in &rejected {
        let result = harness.grid.load_cells_from_value(&mut harness.tk, config);
        assert!(result.is_err(), "{config} should be rejected");
    }

    harness.relayout();
    assert_eq!(harness.grid.cells(), &cells);
    assert_eq!(harness.tk.frame_count(), frames);
    assert_eq!(harness.rect(1, 1), rect);
}

#[test]
fn each_rejection_has_its_own_kind() {
    let mut harness = GridHarness::new(GridOptions::new());
    let mut load = |config: serde_json::Value| {
        harness
            .grid
            .load_cells_from_value(&mut harness.tk, &config)
            .unwrap_err()
    };

    assert!(matches!(
        load(json!({ "array": [1, 2, 3] })),
        GridError::InvalidShape { .. }
    ));
    assert!(matches!(
        load(json!({ "cells_spacing": [1, "a"] })),
        GridError::InvalidNumericElement { .. }
    ));
    assert!(matches!(
        load(json!({ "cells_spacing": [1, 2, 3] })),
        GridError::InvalidSpacingLength { len: 3, .. }
    ));
    assert!(matches!(
        load(json!({ "cells_spacing": 2.5 })),
        GridError::InvalidType { found: "float", .. }
    ));
    assert!(matches!(
        load(json!({ "cells_border_color": "nope" })),
        GridError::InvalidColor { .. }
    ));
    assert!(matches!(
        load(json!({ "cells_shape": 3 })),
        GridError::UnknownKey { ref key } if key == "cells_shape"
    ));
}
