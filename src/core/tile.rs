use crate::core::projection::validate_zoom_level;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one square tile in the tile pyramid.
///
/// `0 <= tile_x, tile_y < 2^zoom_level` holds for every value, so a `Tile`
/// always names a tile that exists. Equality and ordering cover all four fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "TileRepr", into = "TileRepr")]
pub struct Tile {
    tile_x: i64,
    tile_y: i64,
    zoom_level: i8,
    tile_size: u32,
}

#[derive(Serialize, Deserialize)]
struct TileRepr {
    tile_x: i64,
    tile_y: i64,
    zoom_level: i8,
    tile_size: u32,
}

impl Tile {
    pub fn new(tile_x: i64, tile_y: i64, zoom_level: i8, tile_size: u32) -> Result<Self> {
        validate_zoom_level(zoom_level)?;
        if tile_size == 0 {
            return Err(MapError::invalid("tile size must be positive"));
        }

        let max_tile_number = Self::max_tile_number(zoom_level)?;
        if !(0..=max_tile_number).contains(&tile_x) {
            return Err(MapError::invalid(format!(
                "invalid tileX number on zoom level {zoom_level}: {tile_x}"
            )));
        }
        if !(0..=max_tile_number).contains(&tile_y) {
            return Err(MapError::invalid(format!(
                "invalid tileY number on zoom level {zoom_level}: {tile_y}"
            )));
        }

        Ok(Self {
            tile_x,
            tile_y,
            zoom_level,
            tile_size,
        })
    }

    /// Largest valid tile index on the given zoom level, `2^zoom_level - 1`.
    pub fn max_tile_number(zoom_level: i8) -> Result<i64> {
        validate_zoom_level(zoom_level)?;
        Ok((1_i64 << zoom_level) - 1)
    }

    pub fn tile_x(&self) -> i64 {
        self.tile_x
    }

    pub fn tile_y(&self) -> i64 {
        self.tile_y
    }

    pub fn zoom_level(&self) -> i8 {
        self.zoom_level
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// X coordinate of the top-left corner on the world pixel canvas.
    pub fn pixel_x(&self) -> i64 {
        self.tile_x * i64::from(self.tile_size)
    }

    /// Y coordinate of the top-left corner on the world pixel canvas.
    pub fn pixel_y(&self) -> i64 {
        self.tile_y * i64::from(self.tile_size)
    }

    /// Gets the parent tile at a lower zoom level
    pub fn parent(&self) -> Option<Tile> {
        if self.zoom_level == 0 {
            None
        } else {
            Some(Tile {
                tile_x: self.tile_x / 2,
                tile_y: self.tile_y / 2,
                zoom_level: self.zoom_level - 1,
                tile_size: self.tile_size,
            })
        }
    }

    /// Gets the four child tiles at the next zoom level, or none at the deepest level.
    pub fn children(&self) -> Vec<Tile> {
        let zoom_level = self.zoom_level + 1;
        if validate_zoom_level(zoom_level).is_err() {
            return Vec::new();
        }

        [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(|(dx, dy)| Tile {
                tile_x: self.tile_x * 2 + dx,
                tile_y: self.tile_y * 2 + dy,
                zoom_level,
                tile_size: self.tile_size,
            })
            .collect()
    }
}

impl TryFrom<TileRepr> for Tile {
    type Error = MapError;

    fn try_from(repr: TileRepr) -> Result<Self> {
        Tile::new(repr.tile_x, repr.tile_y, repr.zoom_level, repr.tile_size)
    }
}

impl From<Tile> for TileRepr {
    fn from(tile: Tile) -> Self {
        Self {
            tile_x: tile.tile_x,
            tile_y: tile.tile_y,
            zoom_level: tile.zoom_level,
            tile_size: tile.tile_size,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}, y={}, z={}",
            self.tile_x, self.tile_y, self.zoom_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{TILE_SIZE, ZOOM_LEVEL_MAX};

    #[test]
    fn test_tile_creation() {
        let tile = Tile::new(1, 2, 3, TILE_SIZE).unwrap();
        assert_eq!(tile.tile_x(), 1);
        assert_eq!(tile.tile_y(), 2);
        assert_eq!(tile.zoom_level(), 3);
        assert_eq!(tile.tile_size(), TILE_SIZE);
        assert_eq!(tile.to_string(), "x=1, y=2, z=3");
    }

    #[test]
    fn test_invalid_tiles() {
        assert!(Tile::new(-1, 0, 0, TILE_SIZE).is_err());
        assert!(Tile::new(0, -1, 0, TILE_SIZE).is_err());
        assert!(Tile::new(1, 0, 0, TILE_SIZE).is_err());
        assert!(Tile::new(0, 4, 2, TILE_SIZE).is_err());
        assert!(Tile::new(0, 0, -1, TILE_SIZE).is_err());
        assert!(Tile::new(0, 0, 0, 0).is_err());
        assert!(Tile::new(3, 3, 2, TILE_SIZE).is_ok());
    }

    #[test]
    fn test_pixel_origin() {
        let tile = Tile::new(3, 5, 4, TILE_SIZE).unwrap();
        assert_eq!(tile.pixel_x(), 768);
        assert_eq!(tile.pixel_y(), 1280);
    }

    #[test]
    fn test_parent_and_children() {
        let tile = Tile::new(5, 6, 3, TILE_SIZE).unwrap();
        let parent = tile.parent().unwrap();
        assert_eq!((parent.tile_x(), parent.tile_y(), parent.zoom_level()), (2, 3, 2));
        assert!(parent.children().contains(&tile));
        assert_eq!(tile.children().len(), 4);

        let root = Tile::new(0, 0, 0, TILE_SIZE).unwrap();
        assert!(root.parent().is_none());

        let deepest = Tile::new(0, 0, ZOOM_LEVEL_MAX, TILE_SIZE).unwrap();
        assert!(deepest.children().is_empty());
    }

    #[test]
    fn test_ordering_covers_all_fields() {
        let a = Tile::new(0, 1, 1, TILE_SIZE).unwrap();
        let b = Tile::new(1, 0, 1, TILE_SIZE).unwrap();
        assert!(a < b);
        assert_ne!(a, Tile::new(0, 1, 1, 512).unwrap());
    }

    #[test]
    fn test_serde_validates() {
        let json = r#"{"tile_x":4,"tile_y":0,"zoom_level":2,"tile_size":256}"#;
        assert!(serde_json::from_str::<Tile>(json).is_err());

        let tile = Tile::new(3, 1, 2, TILE_SIZE).unwrap();
        let encoded = serde_json::to_string(&tile).unwrap();
        assert_eq!(serde_json::from_str::<Tile>(&encoded).unwrap(), tile);
    }
}
