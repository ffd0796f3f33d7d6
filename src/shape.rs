use serde_json::Value;

use crate::error::{GridError, kind_of};

/// The `(rows, columns)` dimensions of a cell matrix.
///
/// A single integer describes a square grid:
///
/// ```rust
/// use floem_cells_grid::GridShape;
///
/// assert_eq!(GridShape::from(3), GridShape::new(3, 3));
/// assert_eq!(GridShape::from((2, 5)).columns, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape::square(4)
    }
}

impl GridShape {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Number of cells in the matrix, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    pub fn last_column(&self) -> usize {
        self.columns.saturating_sub(1)
    }

    /// Checks that both dimensions are positive and that the cell count
    /// fits in a `usize`.
    pub fn validate(self) -> Result<Self, GridError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GridError::InvalidShape {
                reason: format!("Received ({}, {}).", self.rows, self.columns),
            });
        }
        if self.rows.checked_mul(self.columns).is_none() {
            return Err(GridError::InvalidShape {
                reason: format!(
                    "({}, {}) has more cells than can be counted.",
                    self.rows, self.columns
                ),
            });
        }
        Ok(self)
    }

    /// Build a shape from a sequence that must hold exactly two values.
    pub fn from_slice(dims: &[usize]) -> Result<Self, GridError> {
        match *dims {
            [rows, columns] => GridShape::new(rows, columns).validate(),
            _ => Err(GridError::InvalidShape {
                reason: format!("Received {} values.", dims.len()),
            }),
        }
    }

    /// Read a shape from a dynamic value: a positive integer or an array of
    /// exactly two positive integers.
    pub fn from_value(value: &Value) -> Result<Self, GridError> {
        match value {
            Value::Number(_) => GridShape::square(dimension(value)?).validate(),
            Value::Array(items) => {
                if items.len() != 2 {
                    return Err(GridError::InvalidShape {
                        reason: format!("Received {value}."),
                    });
                }
                GridShape::new(dimension(&items[0])?, dimension(&items[1])?).validate()
            }
            _ => Err(GridError::InvalidShape {
                reason: format!("Received a {}.", kind_of(value)),
            }),
        }
    }
}

fn dimension(value: &Value) -> Result<usize, GridError> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| GridError::InvalidShape {
            reason: format!("{value} is not a non-negative integer."),
        })
}

impl From<usize> for GridShape {
    fn from(size: usize) -> Self {
        GridShape::square(size)
    }
}

impl From<(usize, usize)> for GridShape {
    fn from((rows, columns): (usize, usize)) -> Self {
        GridShape::new(rows, columns)
    }
}

impl From<[usize; 2]> for GridShape {
    fn from([rows, columns]: [usize; 2]) -> Self {
        GridShape::new(rows, columns)
    }
}

impl TryFrom<&[usize]> for GridShape {
    type Error = GridError;

    fn try_from(dims: &[usize]) -> Result<Self, Self::Error> {
        GridShape::from_slice(dims)
    }
}
