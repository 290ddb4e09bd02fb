//! Overlay items drawn on top of the tile layer.

pub mod circle;
pub mod style;
