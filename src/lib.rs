//! # geotile
//!
//! Geometry for slippy-map (tile pyramid) renderers built on the Web Mercator
//! tiling scheme.
//!
//! The crate provides value types for geographic coordinates ([`GeoPoint`]) and
//! tile addresses ([`Tile`]), plus a [`MercatorProjection`] that converts between
//! latitude/longitude, pixel coordinates on the zoom-dependent world canvas and
//! discrete tile indices.
//!
//! ```
//! use geotile::{GeoPoint, MercatorProjection};
//!
//! # fn main() -> geotile::Result<()> {
//! let projection = MercatorProjection::default();
//! let berlin: GeoPoint = "52.517037,13.38886".parse()?;
//!
//! let pixel = projection.geo_point_to_pixel(&berlin, 12)?;
//! let tile = projection.tile_for_pixel(pixel, 12)?;
//! assert_eq!(tile.zoom_level(), 12);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod layers;
pub mod prelude;
pub mod traits;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::TileGridConfig,
    geo::{GeoPoint, Point},
    projection::MercatorProjection,
    tile::Tile,
    viewport::Viewport,
};

pub use layers::{
    circle::{Circle, CircleState},
    style::{Color, Paint, PaintStyle},
};

pub use traits::{CoordinateTransform, DrawSurface};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A precondition on an input value was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl MapError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns true for precondition violations.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Error type alias for convenience
pub type Error = MapError;
