pub mod base_graph;
pub(crate) mod constants;
pub mod distance;
pub mod edge_direction;
pub mod error;
pub mod geometry;
pub mod geopoint;
pub mod graph;
pub mod point_list;
pub mod routing;
pub(crate) mod storage;
mod test_graph_utils;
pub mod types;
pub mod weighting;
