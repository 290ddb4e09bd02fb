use crate::core::geo::{GeoPoint, Point};
use crate::core::projection::{validate_zoom_level, MercatorProjection};
use crate::core::tile::Tile;
use crate::Result;

/// The visible part of the map: a screen-sized window centered on a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: GeoPoint,
    zoom: i8,
    /// The size of the viewport in pixels
    size: Point,
    projection: MercatorProjection,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(
        center: GeoPoint,
        zoom: i8,
        size: Point,
        projection: MercatorProjection,
    ) -> Result<Self> {
        validate_zoom_level(zoom)?;
        Ok(Self {
            center,
            zoom,
            size,
            projection,
        })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> i8 {
        self.zoom
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn projection(&self) -> &MercatorProjection {
        &self.projection
    }

    pub fn set_center(&mut self, center: GeoPoint) {
        self.center = center;
    }

    pub fn set_zoom(&mut self, zoom: i8) -> Result<()> {
        validate_zoom_level(zoom)?;
        self.zoom = zoom;
        Ok(())
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// World pixel position of the top-left screen corner
    pub fn pixel_origin(&self) -> Result<Point> {
        let center = self.projection.geo_point_to_pixel(&self.center, self.zoom)?;
        Ok(center.subtract(&Point::new(self.size.x / 2.0, self.size.y / 2.0)))
    }

    /// Converts a geographical coordinate to screen pixel coordinates
    pub fn geo_to_screen(&self, geo_point: &GeoPoint) -> Result<Point> {
        let pixel = self.projection.geo_point_to_pixel(geo_point, self.zoom)?;
        Ok(pixel.offset_from(&self.pixel_origin()?))
    }

    /// Converts screen pixel coordinates back to geographical coordinates
    pub fn screen_to_geo(&self, screen: Point) -> Result<GeoPoint> {
        let pixel = screen.add(&self.pixel_origin()?);
        self.projection.pixel_to_geo_point(pixel, self.zoom)
    }

    /// Tiles covering the screen, row by row from the north-west corner.
    ///
    /// The range is clamped to the map, so a screen wider than the world does not
    /// repeat tiles.
    pub fn visible_tiles(&self) -> Result<Vec<Tile>> {
        let top_left = self.pixel_origin()?;
        let bottom_right = top_left.add(&self.size);
        let p = &self.projection;

        let min_x = p.pixel_x_to_tile_x(top_left.x, self.zoom)?;
        let max_x = self.last_tile_index(bottom_right.x, min_x)?;
        let min_y = p.pixel_y_to_tile_y(top_left.y, self.zoom)?;
        let max_y = self.last_tile_index(bottom_right.y, min_y)?;

        let mut tiles = Vec::new();
        for tile_y in min_y..=max_y {
            for tile_x in min_x..=max_x {
                tiles.push(Tile::new(tile_x, tile_y, self.zoom, p.tile_size())?);
            }
        }

        log::debug!(
            "viewport at zoom {} covers tiles x {}..={}, y {}..={}",
            self.zoom,
            min_x,
            max_x,
            min_y,
            max_y
        );
        Ok(tiles)
    }

    /// Last tile index touched by a span whose exclusive end is the pixel `edge`.
    fn last_tile_index(&self, edge: f64, first: i64) -> Result<i64> {
        let tile_size = f64::from(self.projection.tile_size());
        let last = (edge / tile_size).ceil() as i64 - 1;
        Ok(last.clamp(first, Tile::max_tile_number(self.zoom)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(lat: f64, lng: f64, zoom: i8, width: f64, height: f64) -> Viewport {
        Viewport::new(
            GeoPoint::new(lat, lng).unwrap(),
            zoom,
            Point::new(width, height),
            MercatorProjection::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_viewport_creation() {
        let center = GeoPoint::new(0.0, 0.0).unwrap();
        let projection = MercatorProjection::default();
        assert!(Viewport::new(center, -1, Point::new(1.0, 1.0), projection).is_err());

        let mut viewport = viewport(40.7128, -74.0060, 10, 800.0, 600.0);
        assert_eq!(viewport.zoom(), 10);
        assert!(viewport.set_zoom(31).is_err());
        assert_eq!(viewport.zoom(), 10);
    }

    #[test]
    fn test_center_maps_to_screen_center() {
        let viewport = viewport(48.8566, 2.3522, 12, 800.0, 600.0);
        let screen = viewport.geo_to_screen(&viewport.center()).unwrap();
        assert!((screen.x - 400.0).abs() < 1e-6);
        assert!((screen.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_coordinate_conversion() {
        let viewport = viewport(0.0, 0.0, 1, 512.0, 512.0);
        assert_eq!(viewport.pixel_origin().unwrap(), Point::new(0.0, 0.0));

        let center = viewport.screen_to_geo(Point::new(256.0, 256.0)).unwrap();
        assert!(center.latitude().abs() < 1e-9);
        assert!(center.longitude().abs() < 1e-9);
    }

    #[test]
    fn test_visible_tiles_whole_world() {
        let viewport = viewport(0.0, 0.0, 1, 512.0, 512.0);
        let tiles = viewport.visible_tiles().unwrap();
        let coords: Vec<_> = tiles.iter().map(|t| (t.tile_x(), t.tile_y())).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_visible_tiles_partial() {
        // 300x300 window centered on the map at zoom 2 spans tiles 1..=2 both ways.
        let viewport = viewport(0.0, 0.0, 2, 300.0, 300.0);
        let tiles = viewport.visible_tiles().unwrap();
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| (1..=2).contains(&t.tile_x())));
        assert!(tiles.iter().all(|t| (1..=2).contains(&t.tile_y())));
    }

    #[test]
    fn test_visible_tiles_edges_on_tile_boundaries() {
        // 512x512 window centered at zoom 2 covers pixels [256, 768) on both axes.
        let viewport = viewport(0.0, 0.0, 2, 512.0, 512.0);
        let tiles = viewport.visible_tiles().unwrap();
        let coords: Vec<_> = tiles.iter().map(|t| (t.tile_x(), t.tile_y())).collect();
        assert_eq!(coords, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_visible_tiles_single_tile_window() {
        let viewport = viewport(0.0, 0.0, 0, 256.0, 256.0);
        let tiles = viewport.visible_tiles().unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!((tiles[0].tile_x(), tiles[0].tile_y()), (0, 0));
    }
}
