use crate::{
    distance::{Distance, Meters},
    edge_direction::EdgeDirection,
    geopoint::GeoPoint,
    types::{EdgeId, NodeId},
};

/// An edge as seen while walking it from `base_node` to `adj_node`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedEdge {
    pub edge_id: EdgeId,
    pub base_node: NodeId,
    pub adj_node: NodeId,
    pub direction: EdgeDirection,
    pub distance: Distance<Meters>,
}

pub trait Graph {
    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    /// Resolves `edge_id` so that `node` is its base node. Returns `None`
    /// when the edge is unknown or does not touch `node`.
    fn oriented_edge(&self, edge_id: EdgeId, node: NodeId) -> Option<OrientedEdge>;

    fn node_geometry(&self, node_id: NodeId) -> Option<GeoPoint>;

    /// Whether node coordinates carry an elevation.
    fn is_3d(&self) -> bool;
}

pub trait GeometryAccess {
    /// Geometry of the edge in the direction of `edge`, without the base node
    /// coordinate and ending with the adjacent node coordinate.
    fn way_geometry(&self, edge: &OrientedEdge) -> Vec<GeoPoint>;
}

/// Street-level attributes used to build instructions.
pub trait EdgeAnnotations {
    fn edge_name(&self, edge_id: EdgeId) -> Option<&str>;
}
