use tracing::debug;

use crate::{
    error::PathError,
    geopoint::GeoPoint,
    graph::{GeometryAccess, Graph, OrientedEdge},
    point_list::PointList,
    types::NodeId,
};

use super::path::{FoundPath, Path};

/// Turns the edge ids of a found path into nodes, oriented edges and a
/// polyline, resolving each edge from the node the walk is currently on.
pub struct PathReconstructor<'a, G> {
    graph: &'a G,
}

impl<'a, G> PathReconstructor<'a, G>
where
    G: Graph + GeometryAccess,
{
    pub fn new(graph: &'a G) -> Self {
        PathReconstructor { graph }
    }

    /// Calls `visitor` with the index, oriented view and way geometry of
    /// every edge, in traversal order.
    pub fn for_each_edge<F>(&self, path: &Path, mut visitor: F) -> Result<(), PathError>
    where
        F: FnMut(usize, &OrientedEdge, Vec<GeoPoint>),
    {
        let path = path.found()?;

        self.walk(path, |index, edge| {
            visitor(index, edge, self.graph.way_geometry(edge));
        })
    }

    pub fn calc_edges(&self, path: &Path) -> Result<Vec<OrientedEdge>, PathError> {
        let path = path.found()?;
        let mut edges = Vec::with_capacity(path.edges().len());

        self.walk(path, |_, edge| edges.push(*edge))?;

        Ok(edges)
    }

    pub fn calc_nodes(&self, path: &Path) -> Result<Vec<NodeId>, PathError> {
        let path = path.found()?;
        let mut nodes = Vec::with_capacity(path.edges().len() + 1);
        nodes.push(path.from_node());

        self.walk(path, |_, edge| nodes.push(edge.adj_node))?;

        Ok(nodes)
    }

    /// The start node coordinate followed by the way geometry of every edge.
    /// Each way geometry already ends at the next node, so no point is repeated.
    pub fn calc_points(&self, path: &Path) -> Result<PointList, PathError> {
        let path = path.found()?;
        let start = self
            .graph
            .node_geometry(path.from_node())
            .ok_or(PathError::UnknownNode(path.from_node()))?;

        let mut points =
            PointList::with_capacity(path.edges().len() * 4 + 1, self.graph.is_3d());
        points.push(start);

        self.walk(path, |_, edge| points.extend(self.graph.way_geometry(edge)))?;

        debug!(
            from_node = path.from_node(),
            end_node = path.end_node(),
            edges = path.edges().len(),
            points = points.len(),
            "Reconstructed path geometry"
        );

        Ok(points)
    }

    fn walk<F>(&self, path: &FoundPath, mut visit: F) -> Result<(), PathError>
    where
        F: FnMut(usize, &OrientedEdge),
    {
        let mut current_node = path.from_node();

        for (index, &edge_id) in path.edges().iter().enumerate() {
            let edge = self
                .graph
                .oriented_edge(edge_id, current_node)
                .ok_or(PathError::EdgeNotAdjacent {
                    edge_id,
                    node_id: current_node,
                })?;

            visit(index, &edge);
            current_node = edge.adj_node;
        }

        if current_node != path.end_node() {
            return Err(PathError::InconsistentPath {
                expected: path.end_node(),
                actual: current_node,
            });
        }

        Ok(())
    }
}
