#[cfg(test)]
pub mod test_graph {
    use fxhash::FxHashMap;

    use crate::{
        distance::{Distance, Meters},
        edge_direction::EdgeDirection,
        geometry::compute_geometry_distance,
        geopoint::GeoPoint,
        graph::{EdgeAnnotations, GeometryAccess, Graph, OrientedEdge},
        types::{EdgeId, NodeId},
        weighting::{Milliseconds, Weight, Weighting},
    };

    struct TestEdge {
        start_node: NodeId,
        end_node: NodeId,
        distance: Distance<Meters>,
        pillars: Vec<GeoPoint>,
        name: Option<String>,
    }

    /// Graph double with caller-chosen node and edge ids.
    #[derive(Default)]
    pub struct TestGraph {
        nodes: FxHashMap<NodeId, GeoPoint>,
        edges: FxHashMap<EdgeId, TestEdge>,
        is_3d: bool,
    }

    impl TestGraph {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn new_3d() -> Self {
            Self {
                is_3d: true,
                ..Self::default()
            }
        }

        pub fn add_node(&mut self, node_id: NodeId, coordinates: GeoPoint) {
            self.nodes.insert(node_id, coordinates);
        }

        /// `pillars` are ordered from `start_node` to `end_node`, both nodes excluded.
        pub fn add_edge(
            &mut self,
            edge_id: EdgeId,
            start_node: NodeId,
            end_node: NodeId,
            pillars: &[GeoPoint],
        ) {
            self.insert_edge(edge_id, start_node, end_node, pillars, None);
        }

        pub fn add_named_edge(
            &mut self,
            edge_id: EdgeId,
            start_node: NodeId,
            end_node: NodeId,
            pillars: &[GeoPoint],
            name: &str,
        ) {
            self.insert_edge(edge_id, start_node, end_node, pillars, Some(name.to_string()));
        }

        fn insert_edge(
            &mut self,
            edge_id: EdgeId,
            start_node: NodeId,
            end_node: NodeId,
            pillars: &[GeoPoint],
            name: Option<String>,
        ) {
            let mut geometry = vec![self.nodes[&start_node]];
            geometry.extend_from_slice(pillars);
            geometry.push(self.nodes[&end_node]);

            self.edges.insert(
                edge_id,
                TestEdge {
                    start_node,
                    end_node,
                    distance: compute_geometry_distance(&geometry),
                    pillars: pillars.to_vec(),
                    name,
                },
            );
        }

        /// Two edges (10, 20) walking nodes 0 -> 1 -> 2.
        pub fn create_two_edge_graph() -> Self {
            let mut graph = TestGraph::new();
            graph.add_node(0, GeoPoint::new(49.0, 8.0));
            graph.add_node(1, GeoPoint::new(49.5, 8.5));
            graph.add_node(2, GeoPoint::new(50.0, 9.0));

            graph.add_edge(10, 0, 1, &[GeoPoint::new(49.25, 8.25)]);
            graph.add_edge(20, 1, 2, &[GeoPoint::new(49.75, 8.75)]);
            graph
        }
    }

    impl Graph for TestGraph {
        fn node_count(&self) -> usize {
            self.nodes.len()
        }

        fn edge_count(&self) -> usize {
            self.edges.len()
        }

        fn oriented_edge(&self, edge_id: EdgeId, node: NodeId) -> Option<OrientedEdge> {
            let edge = self.edges.get(&edge_id)?;

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
            self.nodes.get(&node_id).copied()
        }

        fn is_3d(&self) -> bool {
            self.is_3d
        }
    }

    impl GeometryAccess for TestGraph {
        fn way_geometry(&self, edge: &OrientedEdge) -> Vec<GeoPoint> {
            let test_edge = &self.edges[&edge.edge_id];

            let mut geometry: Vec<GeoPoint> = match edge.direction {
                EdgeDirection::Forward => test_edge.pillars.clone(),
                EdgeDirection::Backward => test_edge.pillars.iter().rev().copied().collect(),
            };
            geometry.push(self.nodes[&edge.adj_node]);
            geometry
        }
    }

    impl EdgeAnnotations for TestGraph {
        fn edge_name(&self, edge_id: EdgeId) -> Option<&str> {
            self.edges.get(&edge_id).and_then(|edge| edge.name.as_deref())
        }
    }

    pub struct TestWeighting;

    impl Weighting for TestWeighting {
        fn calc_edge_weight(&self, edge: &OrientedEdge) -> Weight {
            edge.distance.value()
        }

        fn calc_edge_ms(&self, edge: &OrientedEdge) -> Milliseconds {
            let speed_kmh = 120.0;
            let speed_ms = speed_kmh / 3.6;

            ((edge.distance.value() / speed_ms) * 1000.0).round() as Milliseconds
        }
    }
}
