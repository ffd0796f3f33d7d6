//! Construction and load settings for a [`CellsGrid`](crate::CellsGrid).
//!
//! Both settings types are plain values with chainable setters:
//!
//! ```rust
//! use floem_cells_grid::config::{CellsConfig, GridOptions};
//!
//! let options = GridOptions::new().size(320, 240).margin(8).padding((4, 6));
//! let cells = CellsConfig::new().shape((2, 5)).size(40).spacing(10);
//! assert_eq!(cells.cell_size(), (40.0, 40.0));
//! # let _ = options;
//! ```
//!
//! They can also be read from a JSON object with snake_case keys such as
//! `bg_color` or `cells_spacing`. That path reports the detailed argument
//! errors of [`GridError`].

use peniko::{
    Color,
    color::{Srgb, parse_color},
};
use serde_json::{Map, Value};

use crate::{
    error::{GridError, kind_of},
    shape::GridShape,
    spacing::{CELLS_SPACING, Spacing},
    style::FrameStyle,
    unit::Px,
};

/// Settings fixed when a grid container is constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub width: f64,
    pub height: f64,
    /// Spacing around the container inside its parent.
    pub margin: Spacing,
    /// Spacing between the container's edge and the cells.
    pub padding: Spacing,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            width: 200.0,
            height: 200.0,
            margin: Spacing::default(),
            padding: Spacing::default(),
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: impl Into<Option<Color>>) -> Self {
        self.background = color.into();
        self
    }

    pub fn foreground(mut self, color: impl Into<Option<Color>>) -> Self {
        self.foreground = color.into();
        self
    }

    pub fn width(mut self, width: impl Into<Px>) -> Self {
        self.width = width.into().0;
        self
    }

    pub fn height(mut self, height: impl Into<Px>) -> Self {
        self.height = height.into().0;
        self
    }

    pub fn size(self, width: impl Into<Px>, height: impl Into<Px>) -> Self {
        self.width(width).height(height)
    }

    pub fn margin(mut self, margin: impl Into<Spacing>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Style of the outer frame.
    pub fn frame_style(&self) -> FrameStyle {
        FrameStyle::new()
            .background(self.background)
            .foreground(self.foreground)
            .size(self.width, self.height)
    }

    /// Read options from a JSON object with the keys `bg_color`, `fg_color`,
    /// `height`, `width`, `margin` and `padding`. Missing keys keep their
    /// defaults.
    pub fn from_value(value: &Value) -> Result<Self, GridError> {
        let mut options = Self::default();
        for (key, value) in object(value, "options")? {
            match key.as_str() {
                "bg_color" => options.background = color(value, key)?,
                "fg_color" => options.foreground = color(value, key)?,
                "height" => options.height = number(value, key)?,
                "width" => options.width = number(value, key)?,
                "margin" => options.margin = Spacing::from_value(value, key)?,
                "padding" => options.padding = Spacing::from_value(value, key)?,
                _ => return Err(GridError::UnknownKey { key: key.clone() }),
            }
        }
        Ok(options)
    }
}

/// Settings for one `load_cells` build.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellsConfig {
    pub shape: GridShape,
    pub border_color: Option<Color>,
    pub border_width: f64,
    pub corner_radius: f64,
    pub fill: Option<Color>,
    /// Overrides `size` for the height when set.
    pub height: Option<f64>,
    /// Overrides `size` for the width when set.
    pub width: Option<f64>,
    pub size: f64,
    /// Full gap between neighbouring cells.
    pub spacing: Spacing,
}

impl Default for CellsConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::default(),
            border_color: None,
            border_width: 0.0,
            corner_radius: 30.0,
            fill: None,
            height: None,
            width: None,
            size: 100.0,
            spacing: Spacing::Uniform(10.0),
        }
    }
}

impl CellsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(mut self, shape: impl Into<GridShape>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn border_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.border_color = color.into();
        self
    }

    pub fn border_width(mut self, width: impl Into<Px>) -> Self {
        self.border_width = width.into().0;
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<Px>) -> Self {
        self.corner_radius = radius.into().0;
        self
    }

    pub fn fill(mut self, color: impl Into<Option<Color>>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn height(mut self, height: impl Into<Px>) -> Self {
        self.height = Some(height.into().0);
        self
    }

    pub fn width(mut self, width: impl Into<Px>) -> Self {
        self.width = Some(width.into().0);
        self
    }

    /// Fallback used for whichever of width and height is unset.
    pub fn size(mut self, size: impl Into<Px>) -> Self {
        self.size = size.into().0;
        self
    }

    pub fn spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// `(width, height)` of every cell after the `size` fallback.
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(self.size),
            self.height.unwrap_or(self.size),
        )
    }

    /// Style shared by every cell of the build.
    pub fn cell_style(&self) -> FrameStyle {
        let (width, height) = self.cell_size();
        FrameStyle::new()
            .border_color(self.border_color)
            .border_width(self.border_width)
            .corner_radius(self.corner_radius)
            .foreground(self.fill)
            .size(width, height)
    }

    /// Read a build from a JSON object with the keys `array`,
    /// `cells_border_color`, `cells_border_width`, `cells_corner_radius`,
    /// `cells_fg_color`, `cells_height`, `cells_size`, `cells_spacing` and
    /// `cells_width`. Missing keys and `null` sizes keep their defaults.
    ///
    /// `array` is validated before anything else so a bad shape is always
    /// the error reported.
    pub fn from_value(value: &Value) -> Result<Self, GridError> {
        let fields = object(value, "cells")?;
        let mut config = Self::default();
        if let Some(shape) = fields.get("array") {
            config.shape = GridShape::from_value(shape)?;
        }
        for (key, value) in fields {
            match key.as_str() {
                "array" => {}
                "cells_border_color" => config.border_color = color(value, key)?,
                "cells_border_width" => config.border_width = number(value, key)?,
                "cells_corner_radius" => config.corner_radius = number(value, key)?,
                "cells_fg_color" => config.fill = color(value, key)?,
                "cells_height" => config.height = optional_number(value, key)?,
                "cells_width" => config.width = optional_number(value, key)?,
                "cells_size" => config.size = number(value, key)?,
                CELLS_SPACING => config.spacing = Spacing::from_value(value, key)?,
                _ => return Err(GridError::UnknownKey { key: key.clone() }),
            }
        }
        Ok(config)
    }
}

fn object<'a>(value: &'a Value, param: &str) -> Result<&'a Map<String, Value>, GridError> {
    value.as_object().ok_or_else(|| GridError::InvalidType {
        param: param.to_string(),
        expected: "an object",
        found: kind_of(value),
    })
}

fn number(value: &Value, param: &str) -> Result<f64, GridError> {
    value.as_f64().ok_or_else(|| GridError::InvalidType {
        param: param.to_string(),
        expected: "int or float",
        found: kind_of(value),
    })
}

fn optional_number(value: &Value, param: &str) -> Result<Option<f64>, GridError> {
    match value {
        Value::Null => Ok(None),
        _ => number(value, param).map(Some),
    }
}

/// `null` leaves the color to the toolkit; strings are CSS colors.
fn color(value: &Value, param: &str) -> Result<Option<Color>, GridError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => parse_color(text)
            .map(|color| Some(color.to_alpha_color::<Srgb>()))
            .map_err(|_| GridError::InvalidColor {
                param: param.to_string(),
                value: text.clone(),
            }),
        _ => Err(GridError::InvalidType {
            param: param.to_string(),
            expected: "a color string",
            found: kind_of(value),
        }),
    }
}
