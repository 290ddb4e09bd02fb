//! Core constants of the Web Mercator tiling scheme.
//! Keeping them in a single place makes it easier to share them between the
//! value types and the projection.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Lowest supported zoom level.
pub const ZOOM_LEVEL_MIN: i8 = 0;

/// Highest supported zoom level. `TILE_SIZE << 30` still fits comfortably in an `i64`.
pub const ZOOM_LEVEL_MAX: i8 = 30;

/// Northernmost latitude the projection can represent. At this latitude the
/// vertical extent of the map equals its horizontal extent.
pub const LATITUDE_MAX: f64 = 85.05112877980659;

/// Southernmost latitude the projection can represent.
pub const LATITUDE_MIN: f64 = -LATITUDE_MAX;

pub const LONGITUDE_MAX: f64 = 180.0;

pub const LONGITUDE_MIN: f64 = -180.0;

/// Bounds accepted by [`GeoPoint`](crate::GeoPoint), which covers the whole globe
/// rather than the projectable band.
pub const GEO_LATITUDE_MAX: f64 = 90.0;

pub const GEO_LATITUDE_MIN: f64 = -90.0;

/// Equatorial circumference of the earth in meters.
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// Equatorial radius of the WGS84 ellipsoid in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Field delimiter of the `"<lat>,<lon>"` text form.
pub const COORDINATE_DELIMITER: char = ',';
