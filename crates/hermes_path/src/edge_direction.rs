/// Traversal direction of an edge relative to its stored start and end nodes.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum EdgeDirection {
    Forward,
    Backward,
}
