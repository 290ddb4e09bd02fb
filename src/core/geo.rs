use crate::core::constants::{
    COORDINATE_DELIMITER, EARTH_RADIUS, GEO_LATITUDE_MAX, GEO_LATITUDE_MIN, LONGITUDE_MAX,
    LONGITUDE_MIN,
};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable geographical coordinate in degrees.
///
/// Construction validates both bounds, so every `GeoPoint` in existence has
/// `-90 <= latitude <= 90` and `-180 <= longitude <= 180`. Points are ordered by
/// latitude first, then by longitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "GeoPointRepr", into = "GeoPointRepr")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form of a [`GeoPoint`].
#[derive(Serialize, Deserialize)]
struct GeoPointRepr {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(GEO_LATITUDE_MIN..=GEO_LATITUDE_MAX).contains(&latitude) {
            return Err(MapError::invalid(format!(
                "invalid latitude: {latitude}"
            )));
        }
        if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&longitude) {
            return Err(MapError::invalid(format!(
                "invalid longitude: {longitude}"
            )));
        }

        // Adding positive zero folds -0.0 into 0.0 so equality and hashing agree.
        Ok(Self {
            latitude: latitude + 0.0,
            longitude: longitude + 0.0,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Renders the `"<lat>,<lon>"` form accepted by [`GeoPoint::from_str`].
    pub fn to_coordinate_string(&self) -> String {
        format!(
            "{:?}{}{:?}",
            self.latitude, COORDINATE_DELIMITER, self.longitude
        )
    }

    /// Encodes the point into a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a point produced by [`GeoPoint::to_bytes`]. Out-of-range values are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Calculates the great-circle distance to another point in meters (haversine).
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lng = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }
}

impl TryFrom<GeoPointRepr> for GeoPoint {
    type Error = MapError;

    fn try_from(repr: GeoPointRepr) -> Result<Self> {
        GeoPoint::new(repr.latitude, repr.longitude)
    }
}

impl From<GeoPoint> for GeoPointRepr {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

fn parse_coordinate(field: &str, input: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|e| MapError::invalid(format!("invalid coordinate {field:?} in {input:?}: {e}")))
}

impl FromStr for GeoPoint {
    type Err = MapError;

    /// Parses exactly two comma separated decimal fields: latitude, then longitude.
    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.split(COORDINATE_DELIMITER);
        let (Some(latitude), Some(longitude), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(MapError::invalid(format!(
                "expected two comma separated coordinates: {s:?}"
            )));
        };

        GeoPoint::new(parse_coordinate(latitude, s)?, parse_coordinate(longitude, s)?)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "latitude={:?}, longitude={:?}",
            self.latitude, self.longitude
        )
    }
}

// NaN never passes validation, so the total order below is also the numeric order.
impl Ord for GeoPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}

impl PartialOrd for GeoPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

impl TryFrom<geo_types::Point<f64>> for GeoPoint {
    type Error = MapError;

    /// Interprets `x` as longitude and `y` as latitude.
    fn try_from(point: geo_types::Point<f64>) -> Result<Self> {
        GeoPoint::new(point.y(), point.x())
    }
}

/// A continuous position on the world pixel canvas of one zoom level.
/// The origin is the north-west corner; y grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Position of this point relative to `origin`, e.g. a viewport corner.
    pub fn offset_from(&self, origin: &Point) -> Point {
        self.subtract(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_geo_point_creation() {
        let point = GeoPoint::new(1.0, 2.0).unwrap();
        assert_eq!(point.latitude(), 1.0);
        assert_eq!(point.longitude(), 2.0);
    }

    #[test]
    fn test_geo_point_bounds_are_inclusive() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(90.000001, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.000001).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        let a = GeoPoint::new(-0.0, 0.0).unwrap();
        let b = GeoPoint::new(0.0, -0.0).unwrap();
        assert_eq!(a, b);

        let set: HashSet<GeoPoint> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_latitude_first() {
        let south_east = GeoPoint::new(-10.0, 100.0).unwrap();
        let north_west = GeoPoint::new(10.0, -100.0).unwrap();
        let north_east = GeoPoint::new(10.0, 100.0).unwrap();

        let mut points = vec![north_east, north_west, south_east];
        points.sort();
        assert_eq!(points, vec![south_east, north_west, north_east]);
    }

    #[test]
    fn test_coordinate_string_round_trip() {
        let point = GeoPoint::new(52.517037, -13.38886).unwrap();
        let text = point.to_coordinate_string();
        assert_eq!(text, "52.517037,-13.38886");
        assert_eq!(text.parse::<GeoPoint>().unwrap(), point);
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(" 1,2".parse::<GeoPoint>().is_err());
        assert!("1, 2".parse::<GeoPoint>().is_err());
        assert!("1,2 ".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_distance() {
        let nyc = GeoPoint::new(40.7128, -74.0060).unwrap();
        let la = GeoPoint::new(34.0522, -118.2437).unwrap();

        // Distance should be approximately 3944 km
        assert!((nyc.distance_to(&la) - 3_944_000.0).abs() < 10_000.0);
        assert_eq!(nyc.distance_to(&nyc), 0.0);
    }

    #[test]
    fn test_geo_types_conversion() {
        let point = GeoPoint::new(1.0, 2.0).unwrap();
        let geo_point: geo_types::Point<f64> = point.into();
        assert_eq!(geo_point.x(), 2.0);
        assert_eq!(geo_point.y(), 1.0);
        assert_eq!(GeoPoint::try_from(geo_point).unwrap(), point);

        let out_of_range = geo_types::Point::new(0.0, 95.0);
        assert!(GeoPoint::try_from(out_of_range).is_err());
    }

    #[test]
    fn test_decoding_rejects_invalid_values() {
        let bytes = bincode::serialize(&GeoPointRepr {
            latitude: 91.0,
            longitude: 0.0,
        })
        .unwrap();
        assert!(GeoPoint::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_point_offset() {
        let pixel = Point::new(300.5, 200.0);
        let origin = Point::new(256.0, 128.0);
        assert_eq!(pixel.offset_from(&origin), Point::new(44.5, 72.0));
    }
}
