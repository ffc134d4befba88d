use geo_types::LineString;
use serde::Serialize;

use crate::geopoint::GeoPoint;

/// A polyline that is either 2D or 3D as a whole.
///
/// A 2D list drops the elevation of every point pushed into it, so a route
/// never mixes 2D and 3D coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PointList {
    points: Vec<GeoPoint>,
    is_3d: bool,
}

impl PointList {
    pub fn new(is_3d: bool) -> Self {
        PointList {
            points: Vec::new(),
            is_3d,
        }
    }

    pub fn with_capacity(capacity: usize, is_3d: bool) -> Self {
        PointList {
            points: Vec::with_capacity(capacity),
            is_3d,
        }
    }

    pub fn is_3d(&self) -> bool {
        self.is_3d
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: GeoPoint) {
        if self.is_3d {
            self.points.push(point);
        } else {
            self.points.push(point.to_2d());
        }
    }

    pub fn extend<I: IntoIterator<Item = GeoPoint>>(&mut self, points: I) {
        for point in points {
            self.push(point);
        }
    }

    /// Appends `other`, skipping its first point when it sits on the current last point.
    pub fn append_deduplicated(&mut self, other: &PointList) {
        let skip = match (self.last(), other.first()) {
            (Some(last), Some(first)) => usize::from(last.same_position(first)),
            _ => 0,
        };

        self.extend(other.points.iter().skip(skip).copied());
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Total positive and negative elevation change, both as positive meters.
    /// Always `(0.0, 0.0)` for a 2D list.
    pub fn ascend_descend(&self) -> (f64, f64) {
        if !self.is_3d {
            return (0.0, 0.0);
        }

        let mut ascend = 0.0;
        let mut descend = 0.0;

        for window in self.points.windows(2) {
            if let (Some(from), Some(to)) = (window[0].elevation, window[1].elevation) {
                let delta = to - from;
                if delta > 0.0 {
                    ascend += delta;
                } else {
                    descend -= delta;
                }
            }
        }

        (ascend, descend)
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<&PointList> for LineString<f64> {
    fn from(value: &PointList) -> Self {
        LineString::new(value.iter().map(geo_types::Coord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_elevation_when_2d() {
        let mut points = PointList::new(false);
        points.push(GeoPoint::with_elevation(49.0, 8.0, 100.0));

        assert_eq!(points.get(0), Some(&GeoPoint::new(49.0, 8.0)));
    }

    #[test]
    fn keeps_elevation_when_3d() {
        let mut points = PointList::new(true);
        points.push(GeoPoint::with_elevation(49.0, 8.0, 100.0));

        assert_eq!(points.get(0).and_then(|p| p.elevation), Some(100.0));
    }

    #[test]
    fn append_skips_shared_junction() {
        let mut first = PointList::new(false);
        first.extend([GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);

        let mut second = PointList::new(false);
        second.extend([GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]);

        first.append_deduplicated(&second);

        assert_eq!(
            first.as_slice(),
            &[
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn append_keeps_distinct_start() {
        let mut first = PointList::new(false);
        first.push(GeoPoint::new(0.0, 0.0));

        let mut second = PointList::new(false);
        second.extend([GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]);

        first.append_deduplicated(&second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn ascend_descend() {
        let mut points = PointList::new(true);
        points.extend([
            GeoPoint::with_elevation(0.0, 0.0, 10.0),
            GeoPoint::with_elevation(0.0, 0.1, 25.0),
            GeoPoint::with_elevation(0.0, 0.2, 5.0),
            GeoPoint::with_elevation(0.0, 0.3, 7.5),
        ]);

        assert_eq!(points.ascend_descend(), (17.5, 20.0));
    }

    #[test]
    fn converts_to_line_string() {
        let mut points = PointList::new(false);
        points.extend([GeoPoint::new(49.0, 8.0), GeoPoint::new(50.0, 9.0)]);

        let line: LineString<f64> = (&points).into();
        assert_eq!(line.0[0].x, 8.0);
        assert_eq!(line.0[1].y, 50.0);
    }
}
