//! # Spacing
//!
//! Margins, paddings and cell gaps are all given as a [`Spacing`], which can
//! be one value for every side, a horizontal/vertical pair, or four explicit
//! sides. Before use a spacing is normalized into [`Sides`]
//! (left, top, right, bottom) with one of two rules:
//!
//! - **box spacing** ([`Spacing::to_box`]) keeps the values as given. It is
//!   used for the outer margin and the inner padding of a grid.
//! - **cell spacing** ([`Spacing::to_cell`]) halves every value. Two
//!   neighbouring cells each contribute half of the gap, so together they
//!   produce the full gap that was asked for.
//!
//! ```rust
//! use floem_cells_grid::spacing::{Sides, Spacing};
//!
//! assert_eq!(Spacing::from((10, 20)).to_box(), Sides::new(10.0, 20.0, 10.0, 20.0));
//! assert_eq!(Spacing::from(10).to_cell(), Sides::all(5.0));
//! ```
//!
//! Spacing read from dynamic configuration goes through
//! [`Spacing::from_value`], which reports the offending parameter by name.

use serde_json::Value;
use taffy::{geometry::Rect, style::LengthPercentageAuto};

use crate::error::{GridError, kind_of};

/// Parameter name used when normalizing inter-cell gaps.
pub const CELLS_SPACING: &str = "cells_spacing";

/// Normalized spacing for the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Sides {
    pub const ZERO: Sides = Sides::all(0.0);

    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn all(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn halved(self) -> Self {
        Self::new(
            self.left / 2.0,
            self.top / 2.0,
            self.right / 2.0,
            self.bottom / 2.0,
        )
    }
}

impl From<Sides> for Rect<LengthPercentageAuto> {
    fn from(value: Sides) -> Self {
        Rect {
            left: LengthPercentageAuto::length(value.left as f32),
            top: LengthPercentageAuto::length(value.top as f32),
            right: LengthPercentageAuto::length(value.right as f32),
            bottom: LengthPercentageAuto::length(value.bottom as f32),
        }
    }
}

/// A user supplied spacing in one of the three accepted shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Spacing {
    /// The same value on every side.
    Uniform(f64),
    /// `(x, y)`: `x` for left and right, `y` for top and bottom.
    Axes(f64, f64),
    /// `(left, top, right, bottom)`.
    PerSide(f64, f64, f64, f64),
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Normalize as a margin or padding. Values are kept as given.
    pub fn to_box(self) -> Sides {
        match self {
            Spacing::Uniform(v) => Sides::all(v),
            Spacing::Axes(x, y) => Sides::new(x, y, x, y),
            Spacing::PerSide(left, top, right, bottom) => Sides::new(left, top, right, bottom),
        }
    }

    /// Normalize as an inter-cell gap. Every value is halved, since each of
    /// two adjacent cells applies half of the gap.
    pub fn to_cell(self) -> Sides {
        self.to_box().halved()
    }

    /// Build a spacing from a sequence of 2 or 4 numbers.
    pub fn from_slice(values: &[f64], param: &str) -> Result<Self, GridError> {
        match *values {
            [x, y] => Ok(Spacing::Axes(x, y)),
            [left, top, right, bottom] => Ok(Spacing::PerSide(left, top, right, bottom)),
            _ => Err(GridError::InvalidSpacingLength {
                param: param.to_string(),
                len: values.len(),
            }),
        }
    }

    /// Read a spacing from a dynamic value: an integer, or an array of 2 or 4
    /// numbers. `param` names the argument in any error.
    ///
    /// The array length is checked before its elements, so `[1, "a", 3]` is a
    /// length error rather than a numeric one.
    pub fn from_value(value: &Value, param: &str) -> Result<Self, GridError> {
        match value {
            Value::Number(n) if !n.is_f64() => match n.as_f64() {
                Some(v) => Ok(Spacing::Uniform(v)),
                None => Err(invalid_type(value, param)),
            },
            Value::Array(items) => {
                if items.len() != 2 && items.len() != 4 {
                    return Err(GridError::InvalidSpacingLength {
                        param: param.to_string(),
                        len: items.len(),
                    });
                }
                let numbers = items
                    .iter()
                    .map(Value::as_f64)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| GridError::InvalidNumericElement {
                        param: param.to_string(),
                        sequence: value.to_string(),
                    })?;
                Spacing::from_slice(&numbers, param)
            }
            _ => Err(invalid_type(value, param)),
        }
    }
}

fn invalid_type(value: &Value, param: &str) -> GridError {
    GridError::InvalidType {
        param: param.to_string(),
        expected: "an int or a sequence of 2 or 4 numbers",
        found: kind_of(value),
    }
}

/// Normalize a margin or padding read from dynamic configuration.
pub fn normalize_box_spacing(value: &Value, param: &str) -> Result<Sides, GridError> {
    Ok(Spacing::from_value(value, param)?.to_box())
}

/// Normalize an inter-cell gap read from dynamic configuration.
pub fn normalize_cell_spacing(value: &Value) -> Result<Sides, GridError> {
    Ok(Spacing::from_value(value, CELLS_SPACING)?.to_cell())
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Spacing::Uniform(value)
    }
}

impl From<i32> for Spacing {
    fn from(value: i32) -> Self {
        Spacing::Uniform(value as f64)
    }
}

impl From<u32> for Spacing {
    fn from(value: u32) -> Self {
        Spacing::Uniform(value as f64)
    }
}

impl From<(f64, f64)> for Spacing {
    fn from((x, y): (f64, f64)) -> Self {
        Spacing::Axes(x, y)
    }
}

impl From<(i32, i32)> for Spacing {
    fn from((x, y): (i32, i32)) -> Self {
        Spacing::Axes(x as f64, y as f64)
    }
}

impl From<[f64; 2]> for Spacing {
    fn from([x, y]: [f64; 2]) -> Self {
        Spacing::Axes(x, y)
    }
}

impl From<(f64, f64, f64, f64)> for Spacing {
    fn from((left, top, right, bottom): (f64, f64, f64, f64)) -> Self {
        Spacing::PerSide(left, top, right, bottom)
    }
}

impl From<(i32, i32, i32, i32)> for Spacing {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Spacing::PerSide(left as f64, top as f64, right as f64, bottom as f64)
    }
}

impl From<[f64; 4]> for Spacing {
    fn from([left, top, right, bottom]: [f64; 4]) -> Self {
        Spacing::PerSide(left, top, right, bottom)
    }
}

impl From<Sides> for Spacing {
    fn from(value: Sides) -> Self {
        Spacing::PerSide(value.left, value.top, value.right, value.bottom)
    }
}
