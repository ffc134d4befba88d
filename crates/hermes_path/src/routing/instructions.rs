use serde::Serialize;

use crate::{
    constants::{CONTINUE_MAX_ANGLE, SHARP_TURN_MAX_ANGLE, SLIGHT_TURN_MAX_ANGLE, TURN_MAX_ANGLE},
    distance::{Distance, Meters},
    error::PathError,
    geometry::bearing_delta,
    geopoint::GeoPoint,
    graph::{EdgeAnnotations, GeometryAccess, Graph},
    point_list::PointList,
    weighting::{Milliseconds, Weighting},
};

use super::{path::Path, path_reconstructor::PathReconstructor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstructionSign {
    Depart,
    Continue,
    SlightLeft,
    Left,
    SharpLeft,
    SlightRight,
    Right,
    SharpRight,
    UTurn,
    ReachedVia { via_index: usize },
    Finish,
}

impl InstructionSign {
    /// `delta` is the signed heading change in degrees, positive to the right.
    pub fn from_bearing_delta(delta: f64) -> Self {
        let angle = delta.abs();
        let right = delta > 0.0;

        if angle < CONTINUE_MAX_ANGLE {
            InstructionSign::Continue
        } else if angle < SLIGHT_TURN_MAX_ANGLE {
            if right {
                InstructionSign::SlightRight
            } else {
                InstructionSign::SlightLeft
            }
        } else if angle < TURN_MAX_ANGLE {
            if right {
                InstructionSign::Right
            } else {
                InstructionSign::Left
            }
        } else if angle < SHARP_TURN_MAX_ANGLE {
            if right {
                InstructionSign::SharpRight
            } else {
                InstructionSign::SharpLeft
            }
        } else {
            InstructionSign::UTurn
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Instruction {
    index: usize,
    sign: InstructionSign,
    name: Option<String>,
    distance: Distance<Meters>,
    time: Milliseconds,
    points: PointList,
}

impl Instruction {
    fn new(sign: InstructionSign, name: Option<String>, points: PointList) -> Self {
        Instruction {
            index: 0,
            sign,
            name,
            distance: Distance::zero(),
            time: 0,
            points,
        }
    }

    /// Position of the instruction in the whole route.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sign(&self) -> InstructionSign {
        self.sign
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn distance(&self) -> Distance<Meters> {
        self.distance
    }

    pub fn time(&self) -> Milliseconds {
        self.time
    }

    /// Geometry covered by the instruction, starting where it applies.
    pub fn points(&self) -> &PointList {
        &self.points
    }
}

/// Instructions of a whole route, numbered continuously across legs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InstructionList {
    instructions: Vec<Instruction>,
    #[serde(skip)]
    via_count: usize,
}

impl InstructionList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, mut instruction: Instruction) {
        instruction.index = self.instructions.len();
        self.instructions.push(instruction);
    }

    fn next_via_index(&mut self) -> usize {
        self.via_count += 1;
        self.via_count
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn last(&self) -> Option<&Instruction> {
        self.instructions.last()
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Appends the instructions of one leg to `instructions`.
///
/// A new instruction starts whenever the street name changes; its sign comes
/// from the heading change at the junction. The leg is closed by a via
/// instruction, or by a finish instruction when `is_last_leg` is set.
pub fn build_leg_instructions<G, W, A>(
    graph: &G,
    weighting: &W,
    annotations: &A,
    path: &Path,
    is_last_leg: bool,
    instructions: &mut InstructionList,
) -> Result<(), PathError>
where
    G: Graph + GeometryAccess,
    W: Weighting,
    A: EdgeAnnotations,
{
    let found = path.found()?;
    let is_3d = graph.is_3d();
    let start = graph
        .node_geometry(found.from_node())
        .ok_or(PathError::UnknownNode(found.from_node()))?;
    let end = graph
        .node_geometry(found.end_node())
        .ok_or(PathError::UnknownNode(found.end_node()))?;

    let mut current: Option<Instruction> = None;
    let mut last_point = start;
    let mut incoming_bearing: Option<f64> = None;

    PathReconstructor::new(graph).for_each_edge(path, |_, edge, geometry| {
        let name = annotations.edge_name(edge.edge_id).map(str::to_string);

        let mut instruction = match current.take() {
            Some(instruction) if instruction.name == name => instruction,
            previous => {
                let sign = match (&previous, incoming_bearing, geometry.first()) {
                    (Some(_), Some(incoming), Some(first)) => {
                        let outgoing = last_point.bearing(first);
                        InstructionSign::from_bearing_delta(bearing_delta(incoming, outgoing))
                    }
                    (Some(_), _, _) => InstructionSign::Continue,
                    (None, _, _) => InstructionSign::Depart,
                };

                if let Some(previous) = previous {
                    instructions.push(previous);
                }

                let mut points = PointList::new(is_3d);
                points.push(last_point);
                Instruction::new(sign, name, points)
            }
        };

        instruction.distance += edge.distance;
        instruction.time += weighting.calc_edge_ms(edge);
        instruction.points.extend(geometry.iter().copied());

        if let Some(&edge_end) = geometry.last() {
            let segment_start = match geometry.len() {
                1 => last_point,
                len => geometry[len - 2],
            };
            incoming_bearing = Some(segment_start.bearing(&edge_end));
            last_point = edge_end;
        }

        current = Some(instruction);
    })?;

    if let Some(instruction) = current {
        instructions.push(instruction);
    }

    let sign = if is_last_leg {
        InstructionSign::Finish
    } else {
        InstructionSign::ReachedVia {
            via_index: instructions.next_via_index(),
        }
    };

    let mut points = PointList::new(is_3d);
    points.push(end);
    instructions.push(Instruction::new(sign, None, points));

    Ok(())
}
