use geojson::{Feature, GeoJson, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

use crate::{
    distance::{Distance, Meters},
    error::ResponseError,
    geopoint::GeoPoint,
    point_list::PointList,
    weighting::{Milliseconds, Weight},
};

use super::instructions::InstructionList;

/// A leg that could not be routed. `from_waypoint` and `to_waypoint` index
/// into the waypoints of the request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegError {
    Unreachable {
        leg: usize,
        from_waypoint: usize,
        to_waypoint: usize,
        from: GeoPoint,
        to: GeoPoint,
    },
}

impl std::fmt::Display for LegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegError::Unreachable {
                from_waypoint,
                to_waypoint,
                ..
            } => write!(
                f,
                "Cannot find a route between waypoint {} and waypoint {}",
                from_waypoint, to_waypoint
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RouteSummary {
    pub(crate) distance: Distance<Meters>,
    pub(crate) time: Milliseconds,
    pub(crate) weight: Weight,
    pub(crate) points: PointList,
    pub(crate) instructions: Option<InstructionList>,
    pub(crate) description: Vec<String>,
}

/// Merged result of all legs of a route.
///
/// As soon as one leg failed, the route as a whole is unavailable: every
/// accessor of the merged route returns [`ResponseError::Unavailable`] and
/// only [`RouteResponse::errors`] carries information.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResponse {
    legs: usize,
    summary: Option<RouteSummary>,
    errors: Vec<LegError>,
}

impl RouteResponse {
    pub(crate) fn completed(legs: usize, summary: RouteSummary) -> Self {
        RouteResponse {
            legs,
            summary: Some(summary),
            errors: Vec::new(),
        }
    }

    pub(crate) fn failed(legs: usize, errors: Vec<LegError>) -> Self {
        RouteResponse {
            legs,
            summary: None,
            errors,
        }
    }

    pub fn leg_count(&self) -> usize {
        self.legs
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[LegError] {
        &self.errors
    }

    fn summary(&self) -> Result<&RouteSummary, ResponseError> {
        self.summary.as_ref().ok_or(ResponseError::Unavailable {
            failed_legs: self.errors.len(),
        })
    }

    pub fn distance(&self) -> Result<Distance<Meters>, ResponseError> {
        Ok(self.summary()?.distance)
    }

    pub fn time(&self) -> Result<Milliseconds, ResponseError> {
        Ok(self.summary()?.time)
    }

    pub fn route_weight(&self) -> Result<Weight, ResponseError> {
        Ok(self.summary()?.weight)
    }

    /// Merged geometry. Empty when points were not requested.
    pub fn points(&self) -> Result<&PointList, ResponseError> {
        Ok(&self.summary()?.points)
    }

    /// `None` when instructions were not requested.
    pub fn instructions(&self) -> Result<Option<&InstructionList>, ResponseError> {
        Ok(self.summary()?.instructions.as_ref())
    }

    pub fn description(&self) -> Result<&[String], ResponseError> {
        Ok(&self.summary()?.description)
    }

    /// Total climb in meters, 0 on 2D routes.
    pub fn ascend(&self) -> Result<f64, ResponseError> {
        Ok(self.summary()?.points.ascend_descend().0)
    }

    /// Total drop in meters, 0 on 2D routes.
    pub fn descend(&self) -> Result<f64, ResponseError> {
        Ok(self.summary()?.points.ascend_descend().1)
    }

    pub fn to_geojson(&self) -> Result<GeoJson, ResponseError> {
        let summary = self.summary()?;

        let coordinates = summary.points.iter().map(GeoPoint::to_position).collect();

        let mut properties = JsonObject::new();
        properties.insert(
            "distance".to_string(),
            JsonValue::from(summary.distance.value()),
        );
        properties.insert("time".to_string(), JsonValue::from(summary.time));
        properties.insert("weight".to_string(), JsonValue::from(summary.weight));

        Ok(GeoJson::Feature(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(coordinates))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }))
    }
}
