use taffy::style::{Dimension, LengthPercentage, LengthPercentageAuto};

/// A pixel value
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub f64);

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Px(value)
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value as f64)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value as f64)
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f64)
    }
}

impl From<Px> for Dimension {
    fn from(value: Px) -> Self {
        Dimension::length(value.0 as f32)
    }
}

impl From<Px> for LengthPercentage {
    fn from(value: Px) -> Self {
        LengthPercentage::length(value.0 as f32)
    }
}

impl From<Px> for LengthPercentageAuto {
    fn from(value: Px) -> Self {
        LengthPercentageAuto::length(value.0 as f32)
    }
}

pub trait UnitExt {
    fn px(self) -> Px;
}

impl UnitExt for f64 {
    fn px(self) -> Px {
        Px(self)
    }
}

impl UnitExt for i32 {
    fn px(self) -> Px {
        Px(self as f64)
    }
}
