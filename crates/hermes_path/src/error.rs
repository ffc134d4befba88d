use thiserror::Error;

use crate::types::{EdgeId, NodeId};

/// Inconsistent input handed to the path layer. Any of these aborts the
/// request being processed.
#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("Cannot reconstruct a path that was not found")]
    PathNotFound,
    #[error("Edge {edge_id} does not touch node {node_id}")]
    EdgeNotAdjacent { edge_id: EdgeId, node_id: NodeId },
    #[error("Path was expected to end at node {expected} but ended at node {actual}")]
    InconsistentPath { expected: NodeId, actual: NodeId },
    #[error("No coordinate for node {0}")]
    UnknownNode(NodeId),
    #[error("Path without edges must start and end at the same node ({from_node} != {end_node})")]
    EmptyPathEndpointsDiffer { from_node: NodeId, end_node: NodeId },
    #[error("Expected {expected} waypoints for {legs} legs, got {waypoints}", expected = .legs + 1)]
    WaypointCountMismatch { waypoints: usize, legs: usize },
    #[error("Cannot merge a route without legs")]
    NoLegs,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    #[error("Route is unavailable, {failed_legs} leg(s) could not be routed")]
    Unavailable { failed_legs: usize },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read graph file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write graph file {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode graph")]
    Encode(#[source] rkyv::rancor::Error),
    #[error("Failed to decode graph")]
    Decode(#[source] rkyv::rancor::Error),
}
