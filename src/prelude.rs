//! Prelude module for common geotile types and traits
//!
//! This module re-exports the most commonly used types, traits, and constants
//! for easy importing with `use geotile::prelude::*;`

pub use crate::core::{
    config::TileGridConfig,
    constants::{
        LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN, TILE_SIZE, ZOOM_LEVEL_MAX,
        ZOOM_LEVEL_MIN,
    },
    geo::{GeoPoint, Point},
    projection::MercatorProjection,
    tile::Tile,
    viewport::Viewport,
};

pub use crate::layers::{
    circle::{Circle, CircleState},
    style::{Color, Paint, PaintStyle},
};

pub use crate::traits::{CoordinateTransform, DrawSurface};

pub use crate::{Error as MapError, Result};
