use peniko::Color;
pub use taffy::style::{AlignContent, Display, JustifyContent};
use taffy::{
    prelude::{Rect, Size},
    style::{Dimension, LengthPercentage, Style as TaffyStyle},
};

use crate::unit::Px;

/// Appearance and requested size of a rectangular frame.
///
/// `None` colors are transparent. A `None` width or height lets the frame
/// size itself from the children gridded into it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameStyle {
    /// Color painted behind the rounded corners.
    pub background: Option<Color>,
    /// Fill color inside the border.
    pub foreground: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f64,
    pub corner_radius: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::BASE
    }
}

impl From<&FrameStyle> for TaffyStyle {
    fn from(value: &FrameStyle) -> Self {
        let border = LengthPercentage::length(value.border_width as f32);
        Self {
            display: Display::Grid,
            // Requested sizes are minimums so a frame grows around its children.
            min_size: Size {
                width: value.width.map_or(Dimension::auto(), |w| Px(w).into()),
                height: value.height.map_or(Dimension::auto(), |h| Px(h).into()),
            },
            border: Rect {
                left: border,
                top: border,
                right: border,
                bottom: border,
            },
            justify_content: Some(JustifyContent::Start),
            align_content: Some(AlignContent::Start),
            ..Default::default()
        }
    }
}

impl FrameStyle {
    pub const BASE: FrameStyle = FrameStyle {
        background: None,
        foreground: None,
        border_color: None,
        border_width: 0.0,
        corner_radius: 0.0,
        width: None,
        height: None,
    };

    pub fn new() -> Self {
        Self::BASE
    }

    pub fn width(mut self, width: impl Into<Px>) -> Self {
        self.width = Some(width.into().0);
        self
    }

    pub fn height(mut self, height: impl Into<Px>) -> Self {
        self.height = Some(height.into().0);
        self
    }

    pub fn size(self, width: impl Into<Px>, height: impl Into<Px>) -> Self {
        self.width(width).height(height)
    }

    pub fn background(mut self, background: impl Into<Option<Color>>) -> Self {
        self.background = background.into();
        self
    }

    pub fn foreground(mut self, foreground: impl Into<Option<Color>>) -> Self {
        self.foreground = foreground.into();
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
}
