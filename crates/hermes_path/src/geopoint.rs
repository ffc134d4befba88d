use geo::{Bearing, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::{
    constants::EARTH_RADIUS_METERS,
    distance::{Distance, Meters},
};

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Serialize,
    Deserialize,
    rkyv::Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint {
            lat,
            lng,
            elevation: None,
        }
    }

    pub fn with_elevation(lat: f64, lng: f64, elevation: f64) -> Self {
        GeoPoint {
            lat,
            lng,
            elevation: Some(elevation),
        }
    }

    /// Same position with the elevation dropped.
    pub fn to_2d(self) -> Self {
        GeoPoint {
            elevation: None,
            ..self
        }
    }

    /// Whether both points are at the same latitude and longitude, elevation ignored.
    pub fn same_position(&self, other: &GeoPoint) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> Distance<Meters> {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from(EARTH_RADIUS_METERS * c)
    }

    /// Bearing in degrees clockwise from north, in `[0, 360)`.
    pub fn bearing(&self, other: &GeoPoint) -> f64 {
        Haversine.bearing(Point::from(*self), Point::from(*other))
    }

    /// Coordinates in GeoJSON order: longitude, latitude, then elevation if any.
    pub fn to_position(&self) -> Vec<f64> {
        match self.elevation {
            Some(elevation) => vec![self.lng, self.lat, elevation],
            None => vec![self.lng, self.lat],
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(value: GeoPoint) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<&GeoPoint> for geo_types::Coord<f64> {
    fn from(value: &GeoPoint) -> Self {
        geo_types::coord! { x: value.lng, y: value.lat }
    }
}
