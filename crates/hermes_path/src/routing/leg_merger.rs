use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    distance::{Distance, Meters},
    error::PathError,
    geopoint::GeoPoint,
    graph::{EdgeAnnotations, GeometryAccess, Graph},
    point_list::PointList,
    weighting::{Milliseconds, Weight, Weighting},
};

use super::{
    instructions::{InstructionList, build_leg_instructions},
    path::Path,
    path_reconstructor::PathReconstructor,
    route_response::{LegError, RouteResponse, RouteSummary},
};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    pub instructions: bool,
    pub calc_points: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        MergeOptions {
            instructions: false,
            calc_points: true,
        }
    }
}

/// Combines the paths found between consecutive waypoints into one route.
pub struct LegMerger<'a, G, W, A> {
    graph: &'a G,
    weighting: &'a W,
    annotations: &'a A,
    options: MergeOptions,
}

impl<'a, G, W, A> LegMerger<'a, G, W, A>
where
    G: Graph + GeometryAccess,
    W: Weighting,
    A: EdgeAnnotations,
{
    pub fn new(graph: &'a G, weighting: &'a W, annotations: &'a A, options: MergeOptions) -> Self {
        LegMerger {
            graph,
            weighting,
            annotations,
            options,
        }
    }

    /// `paths[i]` is the leg from `waypoints[i]` to `waypoints[i + 1]`.
    ///
    /// Legs that were not found are reported in the response errors and
    /// make the merged route unavailable. Inconsistent input aborts the merge.
    pub fn merge(
        &self,
        waypoints: &[GeoPoint],
        paths: &[Path],
    ) -> Result<RouteResponse, PathError> {
        if paths.is_empty() {
            return Err(PathError::NoLegs);
        }

        if waypoints.len() != paths.len() + 1 {
            return Err(PathError::WaypointCountMismatch {
                waypoints: waypoints.len(),
                legs: paths.len(),
            });
        }

        let reconstructor = PathReconstructor::new(self.graph);

        let mut distance: Distance<Meters> = Distance::zero();
        let mut time: Milliseconds = 0;
        let mut weight: Weight = 0.0;
        let mut points = PointList::new(self.graph.is_3d());
        let mut instructions = self.options.instructions.then(InstructionList::new);
        let mut description = Vec::new();
        let mut errors = Vec::new();

        for (leg, path) in paths.iter().enumerate() {
            let found = match path {
                Path::Found(found) => found,
                Path::NotFound { .. } => {
                    warn!(leg, "No path found between waypoint {} and {}", leg, leg + 1);
                    errors.push(LegError::Unreachable {
                        leg,
                        from_waypoint: leg,
                        to_waypoint: leg + 1,
                        from: waypoints[leg],
                        to: waypoints[leg + 1],
                    });
                    continue;
                }
            };

            distance += found.distance();
            time += found.time();
            weight += found.weight();
            description.extend_from_slice(found.description());

            if self.options.calc_points {
                let leg_points = reconstructor.calc_points(path)?;
                points.append_deduplicated(&leg_points);
            }

            if let Some(instructions) = instructions.as_mut() {
                build_leg_instructions(
                    self.graph,
                    self.weighting,
                    self.annotations,
                    path,
                    leg + 1 == paths.len(),
                    instructions,
                )?;
            }

            debug!(
                leg,
                edges = found.edges().len(),
                distance = found.distance().value(),
                time = found.time(),
                "Merged leg"
            );
        }

        if !errors.is_empty() {
            warn!(
                legs = paths.len(),
                failed_legs = errors.len(),
                "Route is unavailable"
            );
            return Ok(RouteResponse::failed(paths.len(), errors));
        }

        Ok(RouteResponse::completed(
            paths.len(),
            RouteSummary {
                distance,
                time,
                weight,
                points,
                instructions,
                description,
            },
        ))
    }
}
