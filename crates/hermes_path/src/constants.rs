pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Bearing changes below this many degrees keep the current direction.
pub(crate) const CONTINUE_MAX_ANGLE: f64 = 12.0;
pub(crate) const SLIGHT_TURN_MAX_ANGLE: f64 = 40.0;
pub(crate) const TURN_MAX_ANGLE: f64 = 110.0;
pub(crate) const SHARP_TURN_MAX_ANGLE: f64 = 170.0;
