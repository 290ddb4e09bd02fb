//! Configuration of the tile grid
//!
//! The grid is described by its tile edge length and the range of zoom levels a
//! map offers. Configurations can be built in code, taken from a preset, or
//! loaded from JSON.

use crate::core::constants::{TILE_SIZE, ZOOM_LEVEL_MAX, ZOOM_LEVEL_MIN};
use crate::core::projection::{validate_zoom_level, MercatorProjection};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGridConfig {
    /// Tile edge length in pixels
    pub tile_size: u32,
    pub min_zoom: i8,
    pub max_zoom: i8,
}

impl Default for TileGridConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            min_zoom: ZOOM_LEVEL_MIN,
            max_zoom: ZOOM_LEVEL_MAX,
        }
    }
}

impl TileGridConfig {
    /// Typical web map: 256 pixel tiles up to zoom 18.
    pub fn web() -> Self {
        Self {
            max_zoom: 18,
            ..Self::default()
        }
    }

    /// 512 pixel tiles for high density displays.
    pub fn high_dpi() -> Self {
        Self {
            tile_size: TILE_SIZE * 2,
            ..Self::web()
        }
    }

    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            log::warn!("rejected tile grid configuration: {e}");
            return Err(e);
        }
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(MapError::invalid("tile size must be positive"));
        }
        validate_zoom_level(self.min_zoom)?;
        validate_zoom_level(self.max_zoom)?;
        if self.min_zoom > self.max_zoom {
            return Err(MapError::invalid(format!(
                "min zoom {} is above max zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    /// Projection for the configured tile size.
    pub fn projection(&self) -> Result<MercatorProjection> {
        MercatorProjection::new(self.tile_size)
    }

    /// Maps a requested zoom level into the configured range.
    pub fn clamp_zoom(&self, zoom_level: i8) -> i8 {
        zoom_level.max(self.min_zoom).min(self.max_zoom)
    }
}
