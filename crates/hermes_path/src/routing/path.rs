use crate::{
    distance::{Distance, Meters},
    error::PathError,
    graph::Graph,
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight, Weighting},
};

/// Result of one shortest-path search between two nodes.
///
/// A path that was not found carries no edges and no metrics, so there is
/// nothing on it that could be read by mistake.
#[derive(Clone, Debug, PartialEq)]
pub enum Path {
    Found(FoundPath),
    NotFound { from_node: NodeId, end_node: NodeId },
}

impl Path {
    pub fn not_found(from_node: NodeId, end_node: NodeId) -> Self {
        Path::NotFound {
            from_node,
            end_node,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Path::Found(_))
    }

    pub fn from_node(&self) -> NodeId {
        match self {
            Path::Found(path) => path.from_node,
            Path::NotFound { from_node, .. } => *from_node,
        }
    }

    pub fn end_node(&self) -> NodeId {
        match self {
            Path::Found(path) => path.end_node,
            Path::NotFound { end_node, .. } => *end_node,
        }
    }

    pub fn found(&self) -> Result<&FoundPath, PathError> {
        match self {
            Path::Found(path) => Ok(path),
            Path::NotFound { .. } => Err(PathError::PathNotFound),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FoundPath {
    from_node: NodeId,
    end_node: NodeId,
    edges: Vec<EdgeId>,
    distance: Distance<Meters>,
    time: Milliseconds,
    weight: Weight,
    description: Vec<String>,
}

impl FoundPath {
    pub fn from_node(&self) -> NodeId {
        self.from_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    /// Edge ids in traversal order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn distance(&self) -> Distance<Meters> {
        self.distance
    }

    pub fn time(&self) -> Milliseconds {
        self.time
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }
}

/// Collects the edges and metrics of a path while a search unwinds it.
pub struct PathBuilder {
    from_node: NodeId,
    end_node: NodeId,
    edges: Vec<EdgeId>,
    distance: Distance<Meters>,
    time: Milliseconds,
    weight: Weight,
    description: Vec<String>,
}

impl PathBuilder {
    pub fn new(from_node: NodeId, end_node: NodeId) -> Self {
        PathBuilder {
            from_node,
            end_node,
            edges: Vec::with_capacity(32),
            distance: Distance::zero(),
            time: 0,
            weight: 0.0,
            description: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, edge_id: EdgeId) -> &mut Self {
        self.edges.push(edge_id);
        self
    }

    pub fn add_distance(&mut self, distance: Distance<Meters>) -> &mut Self {
        self.distance += distance;
        self
    }

    pub fn add_time(&mut self, time: Milliseconds) -> &mut Self {
        self.time += time;
        self
    }

    pub fn add_weight(&mut self, weight: Weight) -> &mut Self {
        self.weight += weight;
        self
    }

    pub fn add_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description.push(description.into());
        self
    }

    /// Appends `edge_id` walked from `current_node` and accumulates its
    /// distance, time and weight. Returns the node the edge leads to.
    pub fn add_edge_with_metrics<G: Graph>(
        &mut self,
        graph: &G,
        weighting: &impl Weighting,
        edge_id: EdgeId,
        current_node: NodeId,
    ) -> Result<NodeId, PathError> {
        let edge = graph
            .oriented_edge(edge_id, current_node)
            .ok_or(PathError::EdgeNotAdjacent {
                edge_id,
                node_id: current_node,
            })?;

        self.add_edge(edge_id)
            .add_distance(edge.distance)
            .add_time(weighting.calc_edge_ms(&edge))
            .add_weight(weighting.calc_edge_weight(&edge));

        Ok(edge.adj_node)
    }

    pub fn build(self) -> Result<Path, PathError> {
        if self.edges.is_empty() && self.from_node != self.end_node {
            return Err(PathError::EmptyPathEndpointsDiffer {
                from_node: self.from_node,
                end_node: self.end_node,
            });
        }

        Ok(Path::Found(FoundPath {
            from_node: self.from_node,
            end_node: self.end_node,
            edges: self.edges,
            distance: self.distance,
            time: self.time,
            weight: self.weight,
            description: self.description,
        }))
    }
}
