//! Spherical Web Mercator (EPSG:3857) projection for tile pyramids.
//!
//! Every conversion is a pure function of its arguments. The only state a
//! [`MercatorProjection`] carries is the tile edge length in pixels, which is a
//! rendering constant.

use crate::core::constants::{
    EARTH_CIRCUMFERENCE, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN, TILE_SIZE,
    ZOOM_LEVEL_MAX, ZOOM_LEVEL_MIN,
};
use crate::core::geo::{GeoPoint, Point};
use crate::core::tile::Tile;
use crate::traits::CoordinateTransform;
use crate::{MapError, Result};
use std::f64::consts::PI;

/// Rejects zoom levels outside `ZOOM_LEVEL_MIN..=ZOOM_LEVEL_MAX`.
pub(crate) fn validate_zoom_level(zoom_level: i8) -> Result<()> {
    if zoom_level < ZOOM_LEVEL_MIN {
        return Err(MapError::invalid(format!(
            "zoom level must not be negative: {zoom_level}"
        )));
    }
    if zoom_level > ZOOM_LEVEL_MAX {
        return Err(MapError::invalid(format!(
            "zoom level must not exceed {ZOOM_LEVEL_MAX}: {zoom_level}"
        )));
    }
    Ok(())
}

/// Converts between geographic coordinates, world pixels and tile indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MercatorProjection {
    tile_size: u32,
}

impl Default for MercatorProjection {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl MercatorProjection {
    /// Projection for the common 256 pixel tiles.
    pub const STANDARD: MercatorProjection = MercatorProjection {
        tile_size: TILE_SIZE,
    };

    pub fn new(tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(MapError::invalid("tile size must be positive"));
        }
        Ok(Self { tile_size })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Width and height of the world in pixels: `tile_size * 2^zoom_level`.
    pub fn map_size(&self, zoom_level: i8) -> Result<i64> {
        validate_zoom_level(zoom_level)?;
        Ok(i64::from(self.tile_size) << zoom_level)
    }

    fn map_size_f64(&self, zoom_level: i8) -> Result<f64> {
        // Exact: map sizes stay far below 2^53.
        Ok(self.map_size(zoom_level)? as f64)
    }

    /// Projects a latitude onto the vertical pixel axis.
    ///
    /// Latitudes beyond [`LATITUDE_MIN`]/[`LATITUDE_MAX`] are clamped silently, and so is
    /// the result, which keeps the poles at exactly `0` and `map_size`.
    pub fn latitude_to_pixel_y(&self, latitude: f64, zoom_level: i8) -> Result<f64> {
        let map_size = self.map_size_f64(zoom_level)?;
        let clamped = latitude.clamp(LATITUDE_MIN, LATITUDE_MAX);
        if clamped != latitude {
            log::trace!("clamped latitude {latitude} to {clamped}");
        }

        let sin_latitude = (clamped * (PI / 180.0)).sin();
        let pixel_y =
            (0.5 - ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln() / (4.0 * PI)) * map_size;
        Ok(pixel_y.clamp(0.0, map_size))
    }

    /// Inverse of [`latitude_to_pixel_y`](Self::latitude_to_pixel_y) for `0 <= pixel_y <= map_size`.
    pub fn pixel_y_to_latitude(&self, pixel_y: f64, zoom_level: i8) -> Result<f64> {
        let map_size = self.map_size_f64(zoom_level)?;
        let y = 0.5 - (pixel_y / map_size);
        Ok(90.0 - 360.0 * (-y * (2.0 * PI)).exp().atan() / PI)
    }

    /// Projects a longitude in `[-180, 180]` onto the horizontal pixel axis.
    pub fn longitude_to_pixel_x(&self, longitude: f64, zoom_level: i8) -> Result<f64> {
        let map_size = self.map_size_f64(zoom_level)?;
        Ok((longitude + 180.0) / 360.0 * map_size)
    }

    pub fn pixel_x_to_longitude(&self, pixel_x: f64, zoom_level: i8) -> Result<f64> {
        let map_size = self.map_size_f64(zoom_level)?;
        Ok(360.0 * ((pixel_x / map_size) - 0.5))
    }

    /// Tile column containing `pixel_x`; the pixel is clamped to the map first.
    pub fn pixel_x_to_tile_x(&self, pixel_x: f64, zoom_level: i8) -> Result<i64> {
        self.pixel_to_tile_index(pixel_x, zoom_level)
    }

    /// Tile row containing `pixel_y`; the pixel is clamped to the map first.
    pub fn pixel_y_to_tile_y(&self, pixel_y: f64, zoom_level: i8) -> Result<i64> {
        self.pixel_to_tile_index(pixel_y, zoom_level)
    }

    fn pixel_to_tile_index(&self, pixel: f64, zoom_level: i8) -> Result<i64> {
        let map_size = self.map_size(zoom_level)?;
        let clamped = pixel.clamp(0.0, (map_size - 1) as f64);
        Ok((clamped / f64::from(self.tile_size)).floor() as i64)
    }

    /// Longitude of the western edge of tile column `tile_x`.
    pub fn tile_x_to_longitude(&self, tile_x: i64, zoom_level: i8) -> Result<f64> {
        self.pixel_x_to_longitude(tile_x as f64 * f64::from(self.tile_size), zoom_level)
    }

    /// Latitude of the northern edge of tile row `tile_y`. Rows grow southwards.
    pub fn tile_y_to_latitude(&self, tile_y: i64, zoom_level: i8) -> Result<f64> {
        self.pixel_y_to_latitude(tile_y as f64 * f64::from(self.tile_size), zoom_level)
    }

    /// Tile column containing `longitude`. Wraps like [`Self::tile_for_pixel`], so
    /// longitude 180 lands in column 0 together with -180.
    pub fn longitude_to_tile_x(&self, longitude: f64, zoom_level: i8) -> Result<i64> {
        let map_size = self.map_size_f64(zoom_level)?;
        let pixel_x = self.longitude_to_pixel_x(longitude, zoom_level)?;
        self.pixel_x_to_tile_x(pixel_x.rem_euclid(map_size), zoom_level)
    }

    /// Tile row containing `latitude`, clamped to the first and last row.
    pub fn latitude_to_tile_y(&self, latitude: f64, zoom_level: i8) -> Result<i64> {
        let pixel_y = self.latitude_to_pixel_y(latitude, zoom_level)?;
        self.pixel_y_to_tile_y(pixel_y, zoom_level)
    }

    /// Meters covered by one pixel at the given latitude and zoom level.
    pub fn ground_resolution(&self, latitude: f64, zoom_level: i8) -> Result<f64> {
        let map_size = self.map_size_f64(zoom_level)?;
        Ok((latitude * (PI / 180.0)).cos() * EARTH_CIRCUMFERENCE / map_size)
    }

    pub fn geo_point_to_pixel(&self, geo_point: &GeoPoint, zoom_level: i8) -> Result<Point> {
        Ok(Point::new(
            self.longitude_to_pixel_x(geo_point.longitude(), zoom_level)?,
            self.latitude_to_pixel_y(geo_point.latitude(), zoom_level)?,
        ))
    }

    /// Converts a pixel back into a coordinate. Pixels off the map are clamped onto it.
    pub fn pixel_to_geo_point(&self, pixel: Point, zoom_level: i8) -> Result<GeoPoint> {
        let map_size = self.map_size_f64(zoom_level)?;
        let longitude = self
            .pixel_x_to_longitude(pixel.x.clamp(0.0, map_size), zoom_level)?
            .clamp(LONGITUDE_MIN, LONGITUDE_MAX);
        let latitude = self
            .pixel_y_to_latitude(pixel.y.clamp(0.0, map_size), zoom_level)?
            .clamp(LATITUDE_MIN, LATITUDE_MAX);
        GeoPoint::new(latitude, longitude)
    }

    /// The tile containing `pixel`.
    ///
    /// The x axis wraps around the map width because longitude is cyclic. The y axis
    /// is clamped because the poles are a hard edge.
    pub fn tile_for_pixel(&self, pixel: Point, zoom_level: i8) -> Result<Tile> {
        let map_size = self.map_size_f64(zoom_level)?;
        let tile_x = self.pixel_x_to_tile_x(pixel.x.rem_euclid(map_size), zoom_level)?;
        let tile_y = self.pixel_y_to_tile_y(pixel.y, zoom_level)?;
        Tile::new(tile_x, tile_y, zoom_level, self.tile_size)
    }

    pub fn tile_for_geo_point(&self, geo_point: &GeoPoint, zoom_level: i8) -> Result<Tile> {
        let pixel = self.geo_point_to_pixel(geo_point, zoom_level)?;
        self.tile_for_pixel(pixel, zoom_level)
    }
}

impl CoordinateTransform for MercatorProjection {
    fn project(&self, geo_point: &GeoPoint, zoom_level: i8) -> Result<Point> {
        self.geo_point_to_pixel(geo_point, zoom_level)
    }

    fn unproject(&self, pixel: Point, zoom_level: i8) -> Result<GeoPoint> {
        self.pixel_to_geo_point(pixel, zoom_level)
    }

    fn ground_resolution(&self, latitude: f64, zoom_level: i8) -> Result<f64> {
        MercatorProjection::ground_resolution(self, latitude, zoom_level)
    }
}
