//! Trait seams between the projection core and its collaborators
//!
//! [`CoordinateTransform`] abstracts the projection so overlays can be drawn
//! against any implementation, and [`DrawSurface`] is the narrow interface the
//! rendering layer provides for actual pixel output.

use crate::{
    core::geo::{GeoPoint, Point},
    layers::style::Paint,
    Result,
};

/// Trait for coordinate transformation operations
pub trait CoordinateTransform {
    /// Transform geographic coordinates to world pixel coordinates
    fn project(&self, geo_point: &GeoPoint, zoom_level: i8) -> Result<Point>;

    /// Transform world pixel coordinates to geographic coordinates
    fn unproject(&self, pixel: Point, zoom_level: i8) -> Result<GeoPoint>;

    /// Meters represented by one pixel at the given latitude
    fn ground_resolution(&self, latitude: f64, zoom_level: i8) -> Result<f64>;

    /// Converts a real-world distance into a pixel distance at the given latitude
    fn meters_to_pixels(&self, meters: f64, latitude: f64, zoom_level: i8) -> Result<f64> {
        Ok(meters / self.ground_resolution(latitude, zoom_level)?)
    }
}

/// Drawing primitives supplied by the rendering layer.
///
/// Coordinates are relative to the surface's own origin.
pub trait DrawSurface {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, paint: &Paint);
}
