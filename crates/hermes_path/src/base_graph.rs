use std::path::Path;

use rkyv::util::AlignedVec;
use tracing::info;

use crate::{
    distance::{Distance, Meters},
    edge_direction::EdgeDirection,
    error::StorageError,
    geometry::compute_geometry_distance,
    geopoint::GeoPoint,
    graph::{EdgeAnnotations, GeometryAccess, Graph, OrientedEdge},
    storage::{read_bytes, write_bytes},
    types::{EdgeId, NodeId},
};

#[derive(Debug, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct GraphEdge {
    id: EdgeId,
    start_node: NodeId,
    end_node: NodeId,
    distance: Distance<Meters>,
    name: Option<String>,
}

impl GraphEdge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn distance(&self) -> Distance<Meters> {
        self.distance
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// In-memory road graph. Every edge keeps its full geometry, from the
/// coordinate of its start node to the coordinate of its end node.
#[derive(Default, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct BaseGraph {
    nodes: Vec<GeoPoint>,
    edges: Vec<GraphEdge>,
    geometry: Vec<Vec<GeoPoint>>,
    adjacency_list: Vec<Vec<EdgeId>>,
    is_3d: bool,
}

impl BaseGraph {
    pub fn new(is_3d: bool) -> Self {
        BaseGraph {
            is_3d,
            ..Default::default()
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<BaseGraph, StorageError> {
        let path = path.as_ref();
        let bytes = read_bytes(path)?;

        // Archived data must be aligned before it can be validated.
        let mut aligned = AlignedVec::<16>::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);

        let graph = rkyv::from_bytes::<BaseGraph, rkyv::rancor::Error>(&aligned)
            .map_err(StorageError::Decode)?;

        info!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Loaded graph"
        );

        Ok(graph)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        let bytes =
            rkyv::to_bytes::<rkyv::rancor::Error>(self).map_err(StorageError::Encode)?;
        write_bytes(&bytes, path)?;

        info!(path = %path.display(), size = bytes.len(), "Saved graph");
        Ok(())
    }

    pub fn add_node(&mut self, coordinates: GeoPoint) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(coordinates);
        self.adjacency_list.push(Vec::new());
        node_id
    }

    /// Adds an edge between two existing nodes. `pillars` are the shape
    /// points between the two nodes, ordered from `start_node` to `end_node`.
    ///
    /// # Panics
    ///
    /// Panics if either node was not added first.
    pub fn add_edge(
        &mut self,
        start_node: NodeId,
        end_node: NodeId,
        pillars: &[GeoPoint],
        name: Option<&str>,
    ) -> EdgeId {
        let mut geometry = Vec::with_capacity(pillars.len() + 2);
        geometry.push(self.nodes[start_node]);
        geometry.extend_from_slice(pillars);
        geometry.push(self.nodes[end_node]);

        let edge_id = self.edges.len();
        self.edges.push(GraphEdge {
            id: edge_id,
            start_node,
            end_node,
            distance: compute_geometry_distance(&geometry),
            name: name.map(str::to_string),
        });
        self.geometry.push(geometry);

        self.adjacency_list[start_node].push(edge_id);
        if end_node != start_node {
            self.adjacency_list[end_node].push(edge_id);
        }

        edge_id
    }

    pub fn node_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency_list[node]
    }

    pub fn edge(&self, edge_id: EdgeId) -> &GraphEdge {
        &self.edges[edge_id]
    }
}

impl Graph for BaseGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn oriented_edge(&self, edge_id: EdgeId, node: NodeId) -> Option<OrientedEdge> {
        let edge = self.edges.get(edge_id)?;

        let (adj_node, direction) = if edge.start_node == node {
            (edge.end_node, EdgeDirection::Forward)
        } else if edge.end_node == node {
            (edge.start_node, EdgeDirection::Backward)
        } else {
            return None;
        };

        Some(OrientedEdge {
            edge_id,
            base_node: node,
            adj_node,
            direction,
            distance: edge.distance,
        })
    }

    fn node_geometry(&self, node_id: NodeId) -> Option<GeoPoint> {
        self.nodes.get(node_id).copied()
    }

    fn is_3d(&self) -> bool {
        self.is_3d
    }
}

impl GeometryAccess for BaseGraph {
    fn way_geometry(&self, edge: &OrientedEdge) -> Vec<GeoPoint> {
        let geometry = &self.geometry[edge.edge_id];

        match edge.direction {
            EdgeDirection::Forward => geometry[1..].to_vec(),
            EdgeDirection::Backward => geometry[..geometry.len() - 1]
                .iter()
                .rev()
                .copied()
                .collect(),
        }
    }
}

impl EdgeAnnotations for BaseGraph {
    fn edge_name(&self, edge_id: EdgeId) -> Option<&str> {
        self.edges.get(edge_id).and_then(GraphEdge::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph() -> BaseGraph {
        let mut graph = BaseGraph::new(false);
        let a = graph.add_node(GeoPoint::new(49.0, 8.0));
        let b = graph.add_node(GeoPoint::new(49.5, 8.5));
        graph.add_edge(a, b, &[GeoPoint::new(49.25, 8.25)], Some("Main Street"));
        graph
    }

    #[test]
    fn orients_edges_from_either_end() {
        let graph = create_graph();

        let forward = graph.oriented_edge(0, 0).unwrap();
        assert_eq!(forward.adj_node, 1);
        assert_eq!(forward.direction, EdgeDirection::Forward);

        let backward = graph.oriented_edge(0, 1).unwrap();
        assert_eq!(backward.base_node, 1);
        assert_eq!(backward.adj_node, 0);
        assert_eq!(backward.direction, EdgeDirection::Backward);

        assert!(graph.oriented_edge(0, 2).is_none());
        assert!(graph.oriented_edge(1, 0).is_none());
    }

    #[test]
    fn way_geometry_ends_with_adjacent_node() {
        let graph = create_graph();

        let forward = graph.way_geometry(&graph.oriented_edge(0, 0).unwrap());
        assert_eq!(
            forward,
            vec![GeoPoint::new(49.25, 8.25), GeoPoint::new(49.5, 8.5)]
        );

        let backward = graph.way_geometry(&graph.oriented_edge(0, 1).unwrap());
        assert_eq!(
            backward,
            vec![GeoPoint::new(49.25, 8.25), GeoPoint::new(49.0, 8.0)]
        );
    }

    #[test]
    fn edge_distance_follows_geometry() {
        let graph = create_graph();
        let expected = compute_geometry_distance(&[
            GeoPoint::new(49.0, 8.0),
            GeoPoint::new(49.25, 8.25),
            GeoPoint::new(49.5, 8.5),
        ]);

        assert_eq!(graph.edge(0).distance(), expected);
        assert_eq!(graph.edge_name(0), Some("Main Street"));
    }

    #[test]
    fn save_and_load() {
        let graph = create_graph();
        let path = std::env::temp_dir().join(format!(
            "hermes_path_graph_{}.bin",
            std::process::id()
        ));

        graph.save_to_file(&path).unwrap();
        let loaded = BaseGraph::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.edge_count(), 1);
        assert_eq!(loaded.node_edges(1), &[0]);
        assert_eq!(loaded.edge(0).distance(), graph.edge(0).distance());
        assert_eq!(loaded.edge_name(0), Some("Main Street"));
    }

    #[test]
    fn loading_a_missing_file_fails() {
        let result = BaseGraph::from_file("/nonexistent/hermes_path/graph.bin");
        assert!(matches!(result, Err(StorageError::Read { .. })));
    }
}
