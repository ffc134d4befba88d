use crate::{
    distance::{Distance, Meters},
    geopoint::GeoPoint,
};

pub fn compute_geometry_distance(geometry: &[GeoPoint]) -> Distance<Meters> {
    geometry
        .windows(2)
        .map(|window| window[0].haversine_distance(&window[1]))
        .sum()
}

/// Signed change of heading in degrees, in `(-180, 180]`. Positive values
/// turn right (clockwise).
pub fn bearing_delta(incoming: f64, outgoing: f64) -> f64 {
    let mut delta = (outgoing - incoming) % 360.0;

    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }

    delta
}
