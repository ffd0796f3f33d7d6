//! Error types for grid configuration and the host toolkit seam.

use thiserror::Error;

/// Errors raised while validating arguments or building a [`CellsGrid`](crate::CellsGrid).
///
/// Every variant is raised synchronously at the call that received the bad
/// argument. Nothing is recovered internally; the caller retries with
/// corrected arguments.
#[derive(Debug, Error)]
pub enum GridError {
    /// An argument has a type that cannot describe the requested value.
    #[error("`{param}` must be {expected}, but received {found}")]
    InvalidType {
        param: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A sequence-form spacing argument contains a non-numeric element.
    #[error("all values in `{param}` must be int or float. Received: {sequence}")]
    InvalidNumericElement { param: String, sequence: String },

    /// A sequence-form spacing argument has a length other than 2 or 4.
    #[error(
        "`{param}` must contain 2 or 4 values, but received {len}. Valid examples: 10, (10, 20), (10, 5, 10, 5)"
    )]
    InvalidSpacingLength { param: String, len: usize },

    /// The grid shape does not normalize to exactly two positive dimensions.
    #[error(
        "`array` must be a positive int or a sequence with exactly 2 positive values: (rows, columns). {reason}"
    )]
    InvalidShape { reason: String },

    /// A color string could not be parsed.
    #[error("`{param}` is not a valid color: {value:?}")]
    InvalidColor { param: String, value: String },

    /// A configuration object contained a key this grid does not understand.
    #[error("unknown configuration key `{key}`")]
    UnknownKey { key: String },

    #[error(transparent)]
    Toolkit(#[from] ToolkitError),
}

/// Errors reported by a [`Toolkit`](crate::toolkit::Toolkit) implementation.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// The handle refers to a frame that was already destroyed.
    #[error("frame {frame} does not exist")]
    StaleFrame { frame: String },

    #[error("layout error: {0}")]
    Layout(#[from] taffy::TaffyError),

    #[error("{0}")]
    Other(String),
}

impl ToolkitError {
    pub fn stale(frame: impl std::fmt::Debug) -> Self {
        ToolkitError::StaleFrame {
            frame: format!("{frame:?}"),
        }
    }
}

/// Short name of a JSON value's type, used in [`GridError::InvalidType`].
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
